use thiserror::Error;

use crate::account::{Account, AccountError, AccountNumber};
use crate::clock::Clock;
use crate::transaction::Transaction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Account {number} does not belong to this customer")]
    ForeignAccount { number: AccountNumber },
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// A registered natural person, identified by an immutable tax id.
///
/// The customer owns its accounts; the owned set only grows, via
/// [`Customer::add_account`].
#[derive(Debug)]
pub struct Customer {
    id: String,
    name: String,
    birth_date: String,
    address: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date: birth_date.into(),
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Account-number uniqueness is the external allocator's guarantee; the
    /// customer just appends.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// First owned account. The ledger assumes a customer cares about at
    /// most one account at a time.
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn primary_account_mut(&mut self) -> Option<&mut Account> {
        self.accounts.first_mut()
    }

    /// Sole entry point that couples a customer to a mutation of one of its
    /// accounts. Ownership is enforced: a number that resolves to no owned
    /// account is refused before the transaction runs. No I/O, no side
    /// effect beyond the delegated [`Transaction::apply`].
    pub fn execute(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
        clock: &impl Clock,
    ) -> Result<(), CustomerError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(CustomerError::ForeignAccount { number })?;
        transaction.apply(account, clock).map_err(CustomerError::from)
    }
}
