use bankacct_core::{Amount, DomainError};
use thiserror::Error;

use crate::account::AccountKind;

/// Balance-changing operation, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Operation::Deposit => "Deposit",
            Operation::Withdrawal => "Withdrawal",
        })
    }
}

/// What is wrong with a refused amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountRejection {
    /// Zero or negative.
    NotPositive,
    /// Positive, but the new balance would overflow or need rounding.
    Unrepresentable,
}

/// Why an account refused an operation.
///
/// The balance is never changed when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Non-positive amount, or one the balance cannot absorb exactly.
    #[error("{}", amount_message(.operation, .reason))]
    InvalidAmount {
        operation: Operation,
        amount: Amount,
        reason: AmountRejection,
    },

    /// The resulting balance would sit below the account's floor.
    ///
    /// `attempted` is `None` when that balance is not representable at all.
    #[error("{}", violation_message(.kind))]
    PolicyViolation {
        kind: AccountKind,
        attempted: Option<Amount>,
        floor: Amount,
    },
}

fn amount_message(operation: &Operation, reason: &AmountRejection) -> String {
    match reason {
        AmountRejection::NotPositive => format!("{operation} amount must be positive."),
        AmountRejection::Unrepresentable => {
            format!("{operation} amount cannot be applied to the balance without rounding.")
        }
    }
}

fn violation_message(kind: &AccountKind) -> &'static str {
    match kind {
        AccountKind::Current => "Withdrawal exceeds overdraft limit.",
        AccountKind::Savings => "Insufficient balance.",
    }
}

impl From<AccountError> for DomainError {
    fn from(err: AccountError) -> Self {
        match &err {
            AccountError::InvalidAmount { .. } => DomainError::validation(err.to_string()),
            AccountError::PolicyViolation {
                attempted: Some(attempted),
                floor,
                ..
            } => DomainError::invariant(format!(
                "{err} (balance would be {attempted}, floor is {floor})"
            )),
            AccountError::PolicyViolation {
                attempted: None,
                floor,
                ..
            } => DomainError::invariant(format!("{err} (floor is {floor})")),
        }
    }
}
