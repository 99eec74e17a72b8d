use std::fs::File;

use anyhow::{Context, Result};
use branch_ledger::bin_utils::{OperationError, Service};
use branch_ledger::teller::TellerError;

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                OperationError::Teller(TellerError::Customer(_)) => {
                    // business rejections, not technical errors, so we don't print them
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    service.run()
}
