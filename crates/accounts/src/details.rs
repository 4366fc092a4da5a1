//! Console rendering of a single account.

use crate::account::Account;

/// Width of the rule printed under each account block.
pub const RULE_WIDTH: usize = 30;

/// Display adapter printing number, balance and type, one per line, followed
/// by a rule:
///
/// ```text
/// Account Number: SAV123
/// Balance: 1500
/// Account Type: Savings Account
/// ------------------------------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccountDetails<'a> {
    account: &'a Account,
}

impl<'a> AccountDetails<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }
}

impl core::fmt::Display for AccountDetails<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Account Number: {}", self.account.number())?;
        writeln!(f, "Balance: {}", self.account.balance())?;
        writeln!(f, "Account Type: {}", self.account.account_type())?;
        write!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}
