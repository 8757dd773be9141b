// Module declarations
pub(crate) mod accounts_errors;
pub(crate) mod accounts_model;
pub(crate) mod accounts_repository;
pub(crate) mod accounts_search;
pub(crate) mod accounts_service;
pub(crate) mod accounts_store;
pub(crate) mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{Account, AccountDB, AccountUpdate, NewAccount};
pub use accounts_search::{AccountMatcher, AccountQuery};
pub use accounts_service::AccountService;
pub use accounts_store::AccountStore;
pub use accounts_traits::AccountServiceTrait;

// Re-export error types for convenience
pub use accounts_errors::{AccountError, Result};
