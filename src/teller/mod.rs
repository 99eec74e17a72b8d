use thiserror::Error;

use crate::account::{Account, AccountNumber};
use crate::customer::CustomerError;
use crate::transaction::Transaction;

pub mod in_memory_teller;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TellerError {
    #[error("No customer registered under tax id {id}")]
    UnknownCustomer { id: String },
    #[error("A customer is already registered under tax id {id}")]
    DuplicateCustomer { id: String },
    #[error("Customer {id} has no account")]
    NoAccount { id: String },
    #[error(transparent)]
    Customer(#[from] CustomerError),
}

/// Branch-side operations over the customer directory.
///
/// NOTE: Technically this interface is not necessary, but it is the
/// integration point for replacing the in-memory directory with a
/// persistent one.
pub trait Teller {
    /// Registers a new customer. Tax ids are unique across the directory.
    fn register_customer(
        &mut self,
        id: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<(), TellerError>;

    /// Opens a checking account for an existing customer and returns the
    /// allocated account number.
    fn open_account(&mut self, customer_id: &str) -> Result<AccountNumber, TellerError>;

    /// Executes a movement against the customer's primary account.
    fn process(&mut self, customer_id: &str, transaction: Transaction)
    -> Result<(), TellerError>;

    /// The customer's primary account, for statement rendering.
    fn statement(&self, customer_id: &str) -> Result<&Account, TellerError>;
}
