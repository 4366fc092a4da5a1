//! Demonstration driver: opens a few accounts, moves money, prints them.

use std::io::Write;

use anyhow::Context;
use bankacct_accounts::{Account, AccountError};
use bankacct_core::{AccountNumber, Amount};

fn open(
    number: &str,
    constructor: fn(AccountNumber, Amount) -> Result<Account, AccountError>,
    initial: i64,
) -> anyhow::Result<Account> {
    let account = constructor(AccountNumber::new(number)?, Amount::from(initial))
        .with_context(|| format!("opening account {number}"))?;
    tracing::info!(account = number, kind = ?account.kind(), balance = %account.balance(), "account opened");
    Ok(account)
}

/// Withdraw `amount`, which the account must refuse; the refusal is printed.
fn expect_refusal<W: Write>(out: &mut W, account: &mut Account, amount: Amount) -> anyhow::Result<()> {
    match account.withdraw(amount) {
        Err(err) => {
            tracing::info!(account = %account.number(), "withdrawal refused: {err}");
            writeln!(out, "{err}")?;
            Ok(())
        }
        Ok(()) => anyhow::bail!(
            "withdrawal of {amount} from {} was expected to be refused but succeeded",
            account.number()
        ),
    }
}

/// Replay the demo script, writing everything meant for the user to `out`.
///
/// The over-limit withdrawal on `CUR456` is expected to fail; its message is
/// printed and the run carries on. Any other failure is returned.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let mut savings1 = open("SAV123", Account::savings, 1000)?;
    let mut savings2 = open("SAV456", Account::savings, 2000)?;
    let mut current1 = open("CUR123", Account::current, 500)?;
    let mut current2 = open("CUR456", Account::current, 1000)?;

    savings1.deposit(Amount::from(500))?;
    savings2.withdraw(Amount::from(1000))?;
    current1.deposit(Amount::from(1000))?;

    expect_refusal(out, &mut current2, Amount::from(7000))?;

    for account in [&savings1, &savings2, &current1, &current2] {
        writeln!(out, "{}", account.details())?;
    }

    Ok(())
}
