//! Connection-level statements for the accounts table. The backing store
//! exposes insert and update as single server-side operations
//! (insert-returning-id and update-by-id-returning-count); these functions
//! are their SQLite rendition, shared by the store session's flush path.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::schema::accounts;
use crate::schema::accounts::dsl::*;

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::{Account, AccountDB, NewAccount};

/// Inserts a new account and returns it with the server-assigned id
pub fn create_account(conn: &mut SqliteConnection, new_account: NewAccount) -> Result<Account> {
    new_account.validate()?;

    let account_db: AccountDB = new_account.into();

    let inserted = diesel::insert_into(accounts::table)
        .values(&account_db)
        .returning(AccountDB::as_returning())
        .get_result::<AccountDB>(conn)?;

    Ok(inserted.into())
}

/// Updates the three text fields of an existing account by id and returns
/// the number of affected rows
pub fn update_account(conn: &mut SqliteConnection, account_db: &AccountDB) -> Result<usize> {
    let affected = diesel::update(accounts.find(account_db.id))
        .set(account_db)
        .execute(conn)?;

    if affected == 0 {
        return Err(AccountError::NotFound(format!(
            "Account with id {} not found",
            account_db.id
        )));
    }

    Ok(affected)
}

/// Retrieves the authoritative row for an account by its id
pub fn find_account(conn: &mut SqliteConnection, account_id: i32) -> Result<Account> {
    let account = accounts
        .find(account_id)
        .select(AccountDB::as_select())
        .first::<AccountDB>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                AccountError::NotFound(format!("Account with id {} not found", account_id))
            }
            _ => AccountError::DatabaseError(e.to_string()),
        })?;

    Ok(account.into())
}

/// Loads every stored account in the backing table's natural order
pub fn load_accounts(conn: &mut SqliteConnection) -> Result<Vec<Account>> {
    let results = accounts::table
        .select(AccountDB::as_select())
        .load::<AccountDB>(conn)?;

    Ok(results.into_iter().map(Account::from).collect())
}

/// Deletes an account by its id and returns the number of deleted records
pub fn delete_account(conn: &mut SqliteConnection, account_id: i32) -> Result<usize> {
    let affected = diesel::delete(accounts.find(account_id)).execute(conn)?;

    if affected == 0 {
        return Err(AccountError::NotFound(format!(
            "Account with id {} not found",
            account_id
        )));
    }

    Ok(affected)
}
