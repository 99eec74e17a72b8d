//! This module could be a separate crate on its own, to bootstrap
//! [`branch_ledger`](crate) within a binary, but for simplicity purposes
//! it lives here and doubles as the integration-test harness.

use std::io::{Read, Write};

use anyhow::Result;
use thiserror::Error;

use crate::history::TransactionKind;
use crate::money::Money;
use crate::teller::in_memory_teller::InMemoryTeller;
use crate::teller::{Teller, TellerError};
use crate::transaction::Transaction;
use csv_parser::{CsvOperationParser, Operation, OperationKind};
use csv_printer::{AccountSummary, print_accounts};

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Amount is required for {op:?}")]
    AmountRequired { op: OperationKind },
    #[error("Customer name is required for register")]
    NameRequired,
    #[error(transparent)]
    Teller(#[from] TellerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut teller = InMemoryTeller::default();

        for (line, row) in parser {
            if let Err(err) = apply_operation(&mut teller, row) {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(
            self.output,
            teller.customers().iter().flat_map(|customer| {
                customer.accounts().iter().map(|account| AccountSummary {
                    customer: customer.id().to_string(),
                    account: account.number(),
                    branch: account.branch(),
                    balance: account.balance(),
                    withdrawals: account
                        .history()
                        .records_of_kind(TransactionKind::Withdrawal)
                        .count(),
                })
            }),
        )
    }
}

fn apply_operation(teller: &mut impl Teller, row: Operation) -> Result<(), OperationError> {
    match row.op {
        OperationKind::Register => {
            let name = row.name.ok_or(OperationError::NameRequired)?;
            teller.register_customer(
                &row.customer,
                &name,
                row.birth_date.as_deref().unwrap_or_default(),
                row.address.as_deref().unwrap_or_default(),
            )?;
        }
        OperationKind::Open => {
            teller.open_account(&row.customer)?;
        }
        OperationKind::Deposit => {
            let amount = row
                .amount
                .ok_or(OperationError::AmountRequired { op: row.op })?;
            teller.process(&row.customer, Transaction::Deposit(Money::new(amount)))?;
        }
        OperationKind::Withdrawal => {
            let amount = row
                .amount
                .ok_or(OperationError::AmountRequired { op: row.op })?;
            teller.process(&row.customer, Transaction::Withdrawal(Money::new(amount)))?;
        }
    }
    Ok(())
}
