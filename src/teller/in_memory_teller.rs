use tracing::{debug, warn};

use crate::account::{Account, AccountNumber};
use crate::clock::{Clock, SystemClock};
use crate::customer::Customer;
use crate::transaction::Transaction;

use super::{Teller, TellerError};

/// In-memory customer directory plus a monotonic account-number allocator.
///
/// This is the explicitly owned replacement for the original's process-wide
/// customer and account lists; the embedder creates one and passes it
/// around. Single-threaded by design, an embedder that shares it across
/// threads must add its own lock.
#[derive(Debug)]
pub struct InMemoryTeller<C = SystemClock> {
    customers: Vec<Customer>,
    next_account_number: AccountNumber,
    clock: C,
}

impl Default for InMemoryTeller<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> InMemoryTeller<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            customers: Vec::new(),
            next_account_number: 1,
            clock,
        }
    }

    /// Directory contents in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn customer(&self, id: &str) -> Result<&Customer, TellerError> {
        self.customers
            .iter()
            .find(|customer| customer.id() == id)
            .ok_or_else(|| TellerError::UnknownCustomer { id: id.to_string() })
    }
}

impl<C: Clock> Teller for InMemoryTeller<C> {
    fn register_customer(
        &mut self,
        id: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<(), TellerError> {
        if self.customers.iter().any(|customer| customer.id() == id) {
            return Err(TellerError::DuplicateCustomer { id: id.to_string() });
        }
        self.customers
            .push(Customer::new(id, name, birth_date, address));
        debug!(customer = id, "customer registered");
        Ok(())
    }

    fn open_account(&mut self, customer_id: &str) -> Result<AccountNumber, TellerError> {
        let number = self.next_account_number;
        let customer = self
            .customers
            .iter_mut()
            .find(|customer| customer.id() == customer_id)
            .ok_or_else(|| TellerError::UnknownCustomer {
                id: customer_id.to_string(),
            })?;
        customer.add_account(Account::new_checking(number, customer_id));
        self.next_account_number += 1;
        debug!(customer = customer_id, number, "checking account opened");
        Ok(number)
    }

    fn process(
        &mut self,
        customer_id: &str,
        transaction: Transaction,
    ) -> Result<(), TellerError> {
        let clock = &self.clock;
        let customer = self
            .customers
            .iter_mut()
            .find(|customer| customer.id() == customer_id)
            .ok_or_else(|| TellerError::UnknownCustomer {
                id: customer_id.to_string(),
            })?;
        let Some(number) = customer.primary_account().map(Account::number) else {
            return Err(TellerError::NoAccount {
                id: customer_id.to_string(),
            });
        };
        match customer.execute(number, &transaction, clock) {
            Ok(()) => {
                debug!(customer = customer_id, ?transaction, "movement accepted");
                Ok(())
            }
            Err(err) => {
                warn!(customer = customer_id, %err, "movement rejected");
                Err(err.into())
            }
        }
    }

    fn statement(&self, customer_id: &str) -> Result<&Account, TellerError> {
        self.customer(customer_id)?
            .primary_account()
            .ok_or_else(|| TellerError::NoAccount {
                id: customer_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::account::AccountError;
    use crate::clock::FixedClock;
    use crate::customer::CustomerError;
    use crate::history::TransactionKind;
    use crate::money::Money;

    use super::*;

    fn teller() -> InMemoryTeller<FixedClock> {
        InMemoryTeller::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn registration_rejects_duplicate_tax_ids() {
        let mut teller = teller();
        teller
            .register_customer("111", "Maria Silva", "01-01-1990", "Rua A, 52")
            .unwrap();
        let err = teller
            .register_customer("111", "Another Maria", "02-02-1992", "Rua B, 10")
            .unwrap_err();
        assert_eq!(err, TellerError::DuplicateCustomer { id: "111".into() });
        assert_eq!(teller.customers().len(), 1);
    }

    #[test]
    fn account_numbers_are_allocated_monotonically() {
        let mut teller = teller();
        teller
            .register_customer("111", "Maria Silva", "01-01-1990", "Rua A, 52")
            .unwrap();
        teller
            .register_customer("222", "Joao Souza", "12-03-1985", "Rua B, 10")
            .unwrap();
        assert_eq!(teller.open_account("111").unwrap(), 1);
        assert_eq!(teller.open_account("222").unwrap(), 2);
        assert_eq!(teller.open_account("111").unwrap(), 3);

        let err = teller.open_account("999").unwrap_err();
        assert_eq!(err, TellerError::UnknownCustomer { id: "999".into() });
        // failed allocation must not burn a number
        assert_eq!(teller.open_account("222").unwrap(), 4);
    }

    #[test]
    fn process_routes_to_the_primary_account() {
        let mut teller = teller();
        teller
            .register_customer("111", "Maria Silva", "01-01-1990", "Rua A, 52")
            .unwrap();
        teller.open_account("111").unwrap();

        teller
            .process("111", Transaction::Deposit(Money::from(300)))
            .unwrap();
        teller
            .process("111", Transaction::Withdrawal(Money::from(120)))
            .unwrap();

        let account = teller.statement("111").unwrap();
        assert_eq!(account.balance(), Money::from(180));
        assert_eq!(account.history().len(), 2);
        assert_eq!(
            account
                .history()
                .records_of_kind(TransactionKind::Withdrawal)
                .count(),
            1
        );
    }

    #[test]
    fn process_requires_a_registered_customer_with_an_account() {
        let mut teller = teller();
        let err = teller
            .process("111", Transaction::Deposit(Money::from(10)))
            .unwrap_err();
        assert_eq!(err, TellerError::UnknownCustomer { id: "111".into() });

        teller
            .register_customer("111", "Maria Silva", "01-01-1990", "Rua A, 52")
            .unwrap();
        let err = teller
            .process("111", Transaction::Deposit(Money::from(10)))
            .unwrap_err();
        assert_eq!(err, TellerError::NoAccount { id: "111".into() });

        let err = teller.statement("111").unwrap_err();
        assert_eq!(err, TellerError::NoAccount { id: "111".into() });
    }

    #[test]
    fn rejections_pass_through_untouched() {
        let mut teller = teller();
        teller
            .register_customer("111", "Maria Silva", "01-01-1990", "Rua A, 52")
            .unwrap();
        teller.open_account("111").unwrap();

        let err = teller
            .process("111", Transaction::Withdrawal(Money::from(10)))
            .unwrap_err();
        assert_eq!(
            err,
            TellerError::Customer(CustomerError::Account(AccountError::InsufficientFunds))
        );
        assert_eq!(teller.statement("111").unwrap().balance(), Money::ZERO);
        assert!(teller.statement("111").unwrap().history().is_empty());
    }
}
