//! Lock-guarded account handle for shared-memory use.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bankacct_core::{AccountNumber, Amount};

use crate::account::Account;
use crate::error::AccountError;

/// Cloneable handle to one account behind its own lock.
///
/// Deposit and withdraw read then write the balance, so both run under the
/// lock. Separate accounts never contend with each other.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    // Every mutation validates before its single assignment, so a panic while
    // holding the lock cannot leave the account half-updated.
    fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deposit(&self, amount: Amount) -> Result<(), AccountError> {
        self.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: Amount) -> Result<(), AccountError> {
        self.lock().withdraw(amount)
    }

    pub fn balance(&self) -> Amount {
        self.lock().balance()
    }

    pub fn number(&self) -> AccountNumber {
        self.lock().number().clone()
    }

    /// Copy of the account as of now.
    pub fn snapshot(&self) -> Account {
        self.lock().clone()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
