use super::accounts_errors::Result;
use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_search::AccountQuery;

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    fn create_account(&self, new_account: NewAccount) -> Result<Account>;
    fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;
    fn delete_account(&self, account_id: i32) -> Result<()>;
    fn get_account(&self, account_id: i32) -> Result<Account>;
    fn get_all_accounts(&self) -> Result<Vec<Account>>;
    fn search_accounts(&self, query: &AccountQuery) -> Result<Vec<Account>>;
}
