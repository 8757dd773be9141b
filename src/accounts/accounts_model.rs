use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::accounts_errors::{AccountError, Result};

/// Maximum length of the persisted text columns (VARCHAR(50)).
pub const MAX_FIELD_LEN: usize = 50;

/// Domain model representing one person's registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub passport_id: String,
}

/// Input model for creating a new account. The id is assigned by the
/// database on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub passport_id: String,
}

impl NewAccount {
    /// Validates the new account data
    pub fn validate(&self) -> Result<()> {
        validate_field("first name", &self.first_name)?;
        validate_field("last name", &self.last_name)?;
        validate_field("passport id", &self.passport_id)?;
        Ok(())
    }
}

/// Input model for updating an existing account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub passport_id: String,
}

impl AccountUpdate {
    /// Validates the account update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(AccountError::InvalidData(
                "Account ID is required for updates".to_string(),
            ));
        }
        validate_field("first name", &self.first_name)?;
        validate_field("last name", &self.last_name)?;
        validate_field("passport id", &self.passport_id)?;
        Ok(())
    }
}

fn validate_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AccountError::InvalidData(format!(
            "Account {} cannot be empty",
            field
        )));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(AccountError::InvalidData(format!(
            "Account {} cannot exceed {} characters",
            field, MAX_FIELD_LEN
        )));
    }
    Ok(())
}

/// Database model for accounts
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    // Assigned by the database on insert
    #[diesel(skip_insertion)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub passport_id: String,
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            passport_id: db.passport_id,
        }
    }
}

impl From<NewAccount> for AccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            id: 0, // Filled by the database on insert
            first_name: domain.first_name,
            last_name: domain.last_name,
            passport_id: domain.passport_id,
        }
    }
}

impl From<Account> for AccountDB {
    fn from(domain: Account) -> Self {
        Self {
            id: domain.id,
            first_name: domain.first_name,
            last_name: domain.last_name,
            passport_id: domain.passport_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_fields() {
        let new_account = NewAccount {
            first_name: "Jane".to_string(),
            last_name: "  ".to_string(),
            passport_id: "P123".to_string(),
        };
        assert!(matches!(
            new_account.validate(),
            Err(AccountError::InvalidData(_))
        ));
    }

    #[test]
    fn validate_rejects_overlong_fields() {
        let new_account = NewAccount {
            first_name: "a".repeat(MAX_FIELD_LEN + 1),
            last_name: "Doe".to_string(),
            passport_id: "P123".to_string(),
        };
        assert!(matches!(
            new_account.validate(),
            Err(AccountError::InvalidData(_))
        ));
    }

    #[test]
    fn validate_accepts_complete_form() {
        let new_account = NewAccount {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            passport_id: "P123".to_string(),
        };
        assert!(new_account.validate().is_ok());
    }

    #[test]
    fn update_requires_id() {
        let update = AccountUpdate {
            id: None,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            passport_id: "P123".to_string(),
        };
        assert!(matches!(update.validate(), Err(AccountError::InvalidData(_))));
    }
}
