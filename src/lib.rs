pub mod db;

pub mod accounts;

pub mod errors;
pub mod schema;
pub mod settings;

pub use accounts::{
    Account, AccountQuery, AccountService, AccountStore, AccountUpdate, NewAccount,
};
pub use errors::{Error, Result};
