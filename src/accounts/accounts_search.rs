use regex::Regex;
use serde::{Deserialize, Serialize};

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::Account;

/// Three independent search patterns, one per account field.
///
/// Each pattern is a regular expression matched unanchored against the
/// corresponding field; an empty pattern matches every value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountQuery {
    pub first_name: String,
    pub last_name: String,
    pub passport_id: String,
}

impl AccountQuery {
    /// Compiles the three patterns. A malformed pattern fails the whole
    /// search with `InvalidPattern`; no field is silently skipped.
    pub fn compile(&self) -> Result<AccountMatcher> {
        Ok(AccountMatcher {
            first_name: compile_pattern(&self.first_name)?,
            last_name: compile_pattern(&self.last_name)?,
            passport_id: compile_pattern(&self.passport_id)?,
        })
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| AccountError::InvalidPattern(e.to_string()))
}

/// Compiled form of an [`AccountQuery`]
#[derive(Debug, Clone)]
pub struct AccountMatcher {
    first_name: Regex,
    last_name: Regex,
    passport_id: Regex,
}

impl AccountMatcher {
    /// True when all three field patterns match
    pub fn is_match(&self, account: &Account) -> bool {
        self.first_name.is_match(&account.first_name)
            && self.last_name.is_match(&account.last_name)
            && self.passport_id.is_match(&account.passport_id)
    }

    /// Linear scan over the given accounts, preserving their order
    pub fn filter(&self, accounts: Vec<Account>) -> Vec<Account> {
        accounts
            .into_iter()
            .filter(|account| self.is_match(account))
            .collect()
    }
}
