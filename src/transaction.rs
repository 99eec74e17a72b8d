use crate::account::{Account, AccountError};
use crate::clock::Clock;
use crate::history::{TransactionKind, TransactionRecord};
use crate::money::Money;

/// A single money movement awaiting application to an account.
///
/// The variant carries the amount and the policy for applying itself; it is
/// a transient value and does not outlive its one application. Validation
/// happens inside [`Transaction::apply`] through the account's own checks,
/// so error attribution stays with the account's policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(Money),
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Applies the movement to the account and, on success, appends a record
    /// to the account's history. A rejected movement leaves both the balance
    /// and the history untouched.
    pub fn apply(&self, account: &mut Account, clock: &impl Clock) -> Result<(), AccountError> {
        let amount = self.amount();
        match self {
            Transaction::Deposit(_) => account.deposit(amount)?,
            Transaction::Withdrawal(_) => account.withdraw(amount)?,
        }
        account
            .history_mut()
            .append(TransactionRecord::new(self.kind(), amount, clock.now()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::clock::FixedClock;

    use super::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn successful_movements_are_recorded() {
        let clock = clock();
        let mut acc = Account::new_checking(1, "123");

        Transaction::Deposit(Money::from(100)).apply(&mut acc, &clock).unwrap();
        Transaction::Withdrawal(Money::from(30)).apply(&mut acc, &clock).unwrap();

        assert_eq!(acc.balance(), Money::from(70));
        let records = acc.history().all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind(), TransactionKind::Deposit);
        assert_eq!(records[0].amount(), Money::from(100));
        assert_eq!(records[1].kind(), TransactionKind::Withdrawal);
        assert_eq!(records[1].amount(), Money::from(30));
        assert_eq!(records[0].at(), clock.0);
    }

    #[test]
    fn failed_movements_leave_no_trace() {
        let clock = clock();
        let mut acc = Account::new_checking(1, "123");
        Transaction::Deposit(Money::from(100)).apply(&mut acc, &clock).unwrap();

        let err = Transaction::Withdrawal(Money::from(200))
            .apply(&mut acc, &clock)
            .unwrap_err();
        assert_eq!(err, AccountError::InsufficientFunds);
        assert_eq!(acc.balance(), Money::from(100));
        assert_eq!(acc.history().len(), 1);

        let err = Transaction::Deposit(Money::from(-5))
            .apply(&mut acc, &clock)
            .unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount);
        assert_eq!(acc.balance(), Money::from(100));
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn deposit_then_withdraw_round_trip() {
        let clock = clock();
        let mut acc = Account::new_checking(1, "123");
        Transaction::Deposit(Money::from(250)).apply(&mut acc, &clock).unwrap();
        let before = acc.balance();

        Transaction::Deposit(Money::from(40)).apply(&mut acc, &clock).unwrap();
        Transaction::Withdrawal(Money::from(40)).apply(&mut acc, &clock).unwrap();

        assert_eq!(acc.balance(), before);
        assert_eq!(acc.history().len(), 3);
    }

    // The full checking-account script: ceiling 500, at most 3 withdrawals
    // counted over the whole history.
    #[test]
    fn checking_account_script() {
        let clock = clock();
        let mut acc = Account::new_checking(1, "123");

        Transaction::Deposit(Money::from(1_000)).apply(&mut acc, &clock).unwrap();
        assert_eq!(acc.balance(), Money::from(1_000));

        Transaction::Withdrawal(Money::from(500)).apply(&mut acc, &clock).unwrap();
        assert_eq!(acc.balance(), Money::from(500));

        Transaction::Withdrawal(Money::from(500)).apply(&mut acc, &clock).unwrap();
        assert_eq!(acc.balance(), Money::ZERO);
        assert_eq!(
            acc.history().records_of_kind(TransactionKind::Withdrawal).count(),
            2
        );

        let err = Transaction::Withdrawal(Money::from(1))
            .apply(&mut acc, &clock)
            .unwrap_err();
        assert_eq!(err, AccountError::InsufficientFunds);

        Transaction::Deposit(Money::from(100)).apply(&mut acc, &clock).unwrap();
        assert_eq!(acc.balance(), Money::from(100));

        // third withdrawal reaches the cap, the fourth is refused
        Transaction::Withdrawal(Money::from(50)).apply(&mut acc, &clock).unwrap();
        let err = Transaction::Withdrawal(Money::from(50))
            .apply(&mut acc, &clock)
            .unwrap_err();
        assert_eq!(err, AccountError::WithdrawalCountExceeded);
        let err = Transaction::Withdrawal(Money::from(50))
            .apply(&mut acc, &clock)
            .unwrap_err();
        assert_eq!(err, AccountError::WithdrawalCountExceeded);

        assert_eq!(acc.balance(), Money::from(50));
        assert_eq!(
            acc.history().records_of_kind(TransactionKind::Withdrawal).count(),
            3
        );
        for record in acc.history().records_of_kind(TransactionKind::Withdrawal) {
            assert!(record.amount() <= Money::from(500));
        }
    }
}
