use log::debug;
use std::sync::Arc;

use crate::db::DbPool;

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_search::AccountQuery;
use super::accounts_store::AccountStore;
use super::accounts_traits::AccountServiceTrait;

/// Service for managing accounts.
///
/// Every method opens one scoped [`AccountStore`] session, performs one
/// logical operation, flushes, and drops the session. This mirrors how
/// the presentation layer drives the core: one blocking round trip per
/// user action.
pub struct AccountService {
    pool: Arc<DbPool>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountServiceTrait for AccountService {
    /// Inserts a new account and returns it with its server-assigned id
    fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        // Incomplete form input is rejected before any storage interaction
        new_account.validate()?;

        debug!(
            "Creating account for {} {}",
            new_account.first_name, new_account.last_name
        );

        let mut store = AccountStore::open(&self.pool)?;
        store.stage_insert(new_account)?;
        let mut inserted = store.flush()?;

        inserted
            .pop()
            .ok_or_else(|| AccountError::DatabaseError("Insert returned no record".to_string()))
    }

    /// Updates an existing account.
    ///
    /// The authoritative row is re-fetched by id before mutation: the
    /// caller's selection may be stale, so identity is resolved through
    /// the store rather than trusted from the input.
    fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        let account_id = account_update.id.ok_or_else(|| {
            AccountError::InvalidData("Account ID is required for updates".to_string())
        })?;

        debug!("Updating account {}", account_id);

        let mut store = AccountStore::open(&self.pool)?;
        let mut account = store.fetch_by_id(account_id)?;

        account.first_name = account_update.first_name;
        account.last_name = account_update.last_name;
        account.passport_id = account_update.passport_id;

        store.stage_update(account.clone());
        store.flush()?;

        Ok(account)
    }

    /// Deletes an account by its id
    fn delete_account(&self, account_id: i32) -> Result<()> {
        debug!("Deleting account {}", account_id);

        let mut store = AccountStore::open(&self.pool)?;
        let account = store.fetch_by_id(account_id)?;
        store.stage_delete(&account);
        store.flush()?;

        Ok(())
    }

    /// Retrieves an account by its id
    fn get_account(&self, account_id: i32) -> Result<Account> {
        let mut store = AccountStore::open(&self.pool)?;
        store.fetch_by_id(account_id)
    }

    /// Lists every stored account, used to refresh the display list
    fn get_all_accounts(&self) -> Result<Vec<Account>> {
        let mut store = AccountStore::open(&self.pool)?;
        store.fetch_all()
    }

    /// Full-table scan filtered client-side by the query's three patterns.
    ///
    /// Patterns compile before any storage call, so a malformed pattern
    /// aborts the search without touching the table.
    fn search_accounts(&self, query: &AccountQuery) -> Result<Vec<Account>> {
        let matcher = query.compile()?;

        let mut store = AccountStore::open(&self.pool)?;
        let accounts = store.fetch_all()?;

        Ok(matcher.filter(accounts))
    }
}
