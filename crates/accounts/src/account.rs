use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use bankacct_core::{AccountNumber, Amount, Entity};

use crate::details::AccountDetails;
use crate::error::{AccountError, AmountRejection, Operation};

/// Most negative balance a current account may reach.
pub const OVERDRAFT_LIMIT: Amount = Amount::new(dec!(-5000));

/// Account variant (determines the withdrawal policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Current,
    Savings,
}

impl AccountKind {
    /// Minimum permissible balance for this variant.
    pub fn floor(self) -> Amount {
        match self {
            AccountKind::Current => OVERDRAFT_LIMIT,
            AccountKind::Savings => Amount::ZERO,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Current => "Current Account",
            AccountKind::Savings => "Savings Account",
        }
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Entity: Account.
///
/// Invariant: `balance >= kind.floor()` at all times. The fields are private
/// and only [`Account::deposit`] / [`Account::withdraw`] move the balance, so
/// the invariant established by [`Account::open`] is never broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    number: AccountNumber,
    balance: Amount,
    kind: AccountKind,
}

impl Account {
    /// Open an account, rejecting an initial balance below the variant's floor.
    pub fn open(
        number: AccountNumber,
        kind: AccountKind,
        initial_balance: Amount,
    ) -> Result<Self, AccountError> {
        let floor = kind.floor();
        if initial_balance < floor {
            tracing::debug!(
                account = %number,
                ?kind,
                balance = %initial_balance,
                "opening rejected: initial balance below floor"
            );
            return Err(AccountError::PolicyViolation {
                kind,
                attempted: Some(initial_balance),
                floor,
            });
        }

        Ok(Self {
            number,
            balance: initial_balance,
            kind,
        })
    }

    pub fn current(number: AccountNumber, initial_balance: Amount) -> Result<Self, AccountError> {
        Self::open(number, AccountKind::Current, initial_balance)
    }

    pub fn savings(number: AccountNumber, initial_balance: Amount) -> Result<Self, AccountError> {
        Self::open(number, AccountKind::Savings, initial_balance)
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Fixed per-variant label (`"Current Account"` / `"Savings Account"`).
    pub fn account_type(&self) -> &'static str {
        self.kind.label()
    }

    pub fn floor(&self) -> Amount {
        self.kind.floor()
    }

    /// Largest amount a single withdrawal can currently take (rounded when
    /// the exact headroom is not representable).
    pub fn available_to_withdraw(&self) -> Amount {
        let floor = self.floor();
        self.balance
            .checked_sub(floor)
            .unwrap_or_else(|| Amount::new(self.balance.value().saturating_sub(floor.value())))
    }

    /// Console block with number, balance and type.
    pub fn details(&self) -> AccountDetails<'_> {
        AccountDetails::new(self)
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.ensure_positive(Operation::Deposit, amount)?;

        let Some(next) = self.balance.checked_add(amount) else {
            return Err(self.reject(AccountError::InvalidAmount {
                operation: Operation::Deposit,
                amount,
                reason: AmountRejection::Unrepresentable,
            }));
        };

        self.balance = next;
        tracing::trace!(account = %self.number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.ensure_positive(Operation::Withdrawal, amount)?;

        let floor = self.floor();
        match self.balance.checked_sub(amount) {
            Some(next) if next >= floor => {
                self.balance = next;
                tracing::trace!(account = %self.number, %amount, balance = %self.balance, "withdrawal applied");
                Ok(())
            }
            Some(next) => Err(self.reject(AccountError::PolicyViolation {
                kind: self.kind,
                attempted: Some(next),
                floor,
            })),
            None if self.lands_below_floor(amount) => {
                Err(self.reject(AccountError::PolicyViolation {
                    kind: self.kind,
                    attempted: None,
                    floor,
                }))
            }
            None => Err(self.reject(AccountError::InvalidAmount {
                operation: Operation::Withdrawal,
                amount,
                reason: AmountRejection::Unrepresentable,
            })),
        }
    }

    /// Side of the floor for a withdrawal whose exact result is not
    /// representable. Rounding never crosses the floor (it is representable),
    /// so the rounded result decides; landing exactly on it counts as below.
    fn lands_below_floor(&self, amount: Amount) -> bool {
        match self.balance.value().checked_sub(amount.value()) {
            Some(rounded) => rounded <= self.floor().value(),
            None => true,
        }
    }

    fn ensure_positive(&self, operation: Operation, amount: Amount) -> Result<(), AccountError> {
        if amount.is_positive() {
            Ok(())
        } else {
            Err(self.reject(AccountError::InvalidAmount {
                operation,
                amount,
                reason: AmountRejection::NotPositive,
            }))
        }
    }

    fn reject(&self, err: AccountError) -> AccountError {
        tracing::debug!(account = %self.number, kind = ?self.kind, balance = %self.balance, "rejected: {err}");
        err
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
