//! Accounts module (current and savings accounts with withdrawal policies).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod details;
pub mod error;
pub mod shared;

pub use account::{Account, AccountKind, OVERDRAFT_LIMIT};
pub use details::AccountDetails;
pub use error::{AccountError, AmountRejection, Operation};
pub use shared::SharedAccount;

pub use bankacct_core::{AccountNumber, Amount};
