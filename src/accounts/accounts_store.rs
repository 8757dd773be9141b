use diesel::Connection;
use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbConnection, DbPool};

use super::accounts_errors::{AccountError, Result};
use super::accounts_model::{Account, AccountDB, NewAccount};
use super::accounts_repository;

/// A change staged against a store session, applied on flush
enum PendingChange {
    Insert(NewAccount),
    Update(Account),
    Delete(i32),
}

/// Scoped store session over the accounts table.
///
/// A session owns one pooled connection and a queue of staged changes.
/// Reads go straight to the table; staged inserts, updates and deletes
/// have no database effect until [`flush`](AccountStore::flush), which
/// applies them all inside a single transaction. The connection returns
/// to the pool when the session is dropped, on every exit path.
///
/// Sessions are intended to be short-lived: open, perform one logical
/// operation, flush, drop.
pub struct AccountStore {
    conn: DbConnection,
    pending: Vec<PendingChange>,
}

impl AccountStore {
    /// Opens a new store session on a connection from the pool
    pub fn open(pool: &Arc<DbPool>) -> Result<Self> {
        let conn =
            get_connection(pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;
        Ok(Self {
            conn,
            pending: Vec::new(),
        })
    }

    /// Returns every stored account in the backing table's natural order
    pub fn fetch_all(&mut self) -> Result<Vec<Account>> {
        accounts_repository::load_accounts(&mut self.conn)
    }

    /// Returns the authoritative row for the given id, or `NotFound`.
    ///
    /// Callers that update or delete should re-resolve the record through
    /// this method rather than trusting a possibly stale selection.
    pub fn fetch_by_id(&mut self, account_id: i32) -> Result<Account> {
        accounts_repository::find_account(&mut self.conn, account_id)
    }

    /// Stages an insert. Validation runs here, before any storage call;
    /// the id is assigned by the database on flush.
    pub fn stage_insert(&mut self, new_account: NewAccount) -> Result<()> {
        new_account.validate()?;
        self.pending.push(PendingChange::Insert(new_account));
        Ok(())
    }

    /// Stages an update of a previously fetched record. The record's id
    /// identifies the row; the three text fields are written as a unit.
    pub fn stage_update(&mut self, account: Account) {
        self.pending.push(PendingChange::Update(account));
    }

    /// Stages the deletion of a previously fetched record
    pub fn stage_delete(&mut self, account: &Account) {
        self.pending.push(PendingChange::Delete(account.id));
    }

    /// Number of staged changes awaiting flush
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Applies every staged change inside one transaction.
    ///
    /// On success the staging queue is cleared and the inserted records
    /// are returned with their server-assigned ids. On failure the
    /// transaction rolls back and the staged changes remain unapplied;
    /// nothing is partially committed.
    pub fn flush(&mut self) -> Result<Vec<Account>> {
        if self.pending.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Flushing {} staged change(s)", self.pending.len());

        let pending = &self.pending;
        let mut inserted = Vec::new();

        self.conn.transaction::<_, AccountError, _>(|tx_conn| {
            for change in pending {
                match change {
                    PendingChange::Insert(new_account) => {
                        let account =
                            accounts_repository::create_account(tx_conn, new_account.clone())?;
                        inserted.push(account);
                    }
                    PendingChange::Update(account) => {
                        let account_db: AccountDB = account.clone().into();
                        accounts_repository::update_account(tx_conn, &account_db)?;
                    }
                    PendingChange::Delete(account_id) => {
                        accounts_repository::delete_account(tx_conn, *account_id)?;
                    }
                }
            }
            Ok(())
        })?;

        self.pending.clear();
        Ok(inserted)
    }
}
