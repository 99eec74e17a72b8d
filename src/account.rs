use rust_decimal::Decimal;
use thiserror::Error;

use crate::history::{History, TransactionKind};
use crate::money::Money;

pub type AccountNumber = u32;

/// The ledger models a single branch; every account carries this code.
pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be a positive value")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Withdrawal amount exceeds the per-withdrawal ceiling")]
    WithdrawalLimitExceeded,
    #[error("Maximum number of withdrawals exceeded")]
    WithdrawalCountExceeded,
}

/// Limits an account class imposes on withdrawals, beyond solvency.
///
/// The variant set is closed: the ledger only knows plain accounts and
/// checking accounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountPolicy {
    /// No limits beyond solvency and amount positivity.
    Standard,
    /// Per-withdrawal ceiling plus a cap on the number of withdrawals
    /// recorded over the account's whole history.
    Checking {
        withdrawal_ceiling: Money,
        max_withdrawals: usize,
    },
}

impl AccountPolicy {
    /// Default checking limits: ceiling 500.00, at most 3 withdrawals.
    pub fn checking_default() -> Self {
        AccountPolicy::Checking {
            withdrawal_ceiling: Money::new(Decimal::from(500)),
            max_withdrawals: 3,
        }
    }
}

/// A balance-holding entity owned by one customer.
///
/// The balance is mutated only through [`Account::deposit`] and
/// [`Account::withdraw`], and stays non-negative across any sequence of
/// calls. The history is exclusively owned; callers get read access, while
/// appending is reserved for [`crate::transaction::Transaction::apply`].
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    customer_id: String,
    balance: Money,
    policy: AccountPolicy,
    history: History,
}

impl Account {
    /// Opens a plain account with balance 0. The number must come from an
    /// allocator that guarantees uniqueness; the account does not check it.
    pub fn new(number: AccountNumber, customer_id: impl Into<String>) -> Self {
        Self::with_policy(number, customer_id, AccountPolicy::Standard)
    }

    /// Opens a checking account with the default limits.
    pub fn new_checking(number: AccountNumber, customer_id: impl Into<String>) -> Self {
        Self::with_policy(number, customer_id, AccountPolicy::checking_default())
    }

    pub fn with_policy(
        number: AccountNumber,
        customer_id: impl Into<String>,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            customer_id: customer_id.into(),
            balance: Money::ZERO,
            policy,
            history: History::default(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        self.branch
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Credits the account. Fails with [`AccountError::InvalidAmount`] for
    /// zero or negative amounts; mutates the balance only.
    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Debits the account. Checking limits come first: the ceiling is a
    /// structural property of the single withdrawal and is checked before
    /// the history-dependent count, so an amount that violates both is
    /// reported as over-ceiling.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if let AccountPolicy::Checking {
            withdrawal_ceiling,
            max_withdrawals,
        } = self.policy
        {
            if amount > withdrawal_ceiling {
                return Err(AccountError::WithdrawalLimitExceeded);
            }
            let withdrawals = self
                .history
                .records_of_kind(TransactionKind::Withdrawal)
                .count();
            if withdrawals >= max_withdrawals {
                return Err(AccountError::WithdrawalCountExceeded);
            }
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount);
        }
        self.balance -= amount;
        Ok(())
    }
}
