use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::account::AccountNumber;
use crate::money::Money;

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub customer: String,
    pub account: AccountNumber,
    pub branch: &'static str,
    pub balance: Money,
    pub withdrawals: usize,
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for summary in accounts {
        if let Err(err) = writer.serialize(summary) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
