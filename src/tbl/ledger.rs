use crate::events::{LedgerEvent, TransactionEvent};
use crate::ids::TransactionId;
use crate::{LedgerConfig, Money, Transaction, TransactionType};

use chrono::Utc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds: cannot withdraw {requested} from a balance of {available}")]
    InsufficientFunds { requested: Money, available: Money },
}

/// Coarse failure category carried on a `LedgerEvent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerErrorKind {
    InvalidAmount,
    InsufficientFunds,
}

impl LedgerError {
    pub fn kind(&self) -> LedgerErrorKind {
        return match self {
            Self::InvalidAmount(_) => LedgerErrorKind::InvalidAmount,
            Self::InsufficientFunds { .. } => LedgerErrorKind::InsufficientFunds,
        };
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Balance plus an append-only history of the deposits and withdrawals that produced it.
///
/// The balance never drops below zero: a withdrawal larger than the balance is rejected
/// without touching either field. Failed calls leave the ledger exactly as it was.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: Money,
    /// Oldest first; `history` hands it out reversed
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new(initial_balance: Money) -> LedgerResult<Self> {
        if initial_balance.is_negative() {
            Err(LedgerError::InvalidAmount(format!(
                "initial balance {initial_balance} is negative"
            )))?
        }

        log::debug!("Opening ledger with balance {initial_balance}");

        return Ok(Self {
            balance: initial_balance,
            entries: Vec::new(),
        });
    }

    pub fn from_config(config: &LedgerConfig) -> LedgerResult<Self> {
        return Self::new(config.initial_balance);
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Transactions newest first
    pub fn history(&self) -> Vec<&Transaction> {
        return self.entries.iter().rev().collect();
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `amount` to the balance and returns the new balance
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<Money> {
        self.try_deposit(amount)?;
        return Ok(self.balance);
    }

    /// Removes `amount` from the balance and returns the new balance
    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<Money> {
        self.try_withdraw(amount)?;
        return Ok(self.balance);
    }

    /// Runs the requested operation and reports the outcome as a `LedgerEvent`
    pub fn apply(&mut self, event: TransactionEvent) -> LedgerEvent {
        log::debug!("Applying transaction event: {event:?}");

        let res = match event {
            TransactionEvent::Deposit(event) => self.try_deposit(event.amount),
            TransactionEvent::Withdrawal(event) => self.try_withdraw(event.amount),
        };

        return match res {
            Ok(transaction) => {
                let transaction = transaction.clone();
                LedgerEvent::succeeded(self.balance, transaction)
            }
            Err(e) => {
                log::warn!("{e}");
                LedgerEvent::failed(self.balance, e.kind())
            }
        };
    }

    fn try_deposit(&mut self, amount: Money) -> LedgerResult<&Transaction> {
        validate_amount(amount)?;

        let balance = self
            .balance
            .checked_add(&amount)
            .map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        self.balance = balance;

        return Ok(self.record(TransactionType::Deposit, amount));
    }

    fn try_withdraw(&mut self, amount: Money) -> LedgerResult<&Transaction> {
        validate_amount(amount)?;

        if amount > self.balance {
            Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })?
        }

        // amount is positive and no larger than a non-negative balance
        let balance = self
            .balance
            .checked_sub(&amount)
            .map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        self.balance = balance;

        return Ok(self.record(TransactionType::Withdrawal, amount));
    }

    fn record(&mut self, kind: TransactionType, amount: Money) -> &Transaction {
        let timestamp = Utc::now();
        let id = TransactionId::next(&timestamp, self.latest().map(|tx| tx.id));

        self.entries.push(Transaction {
            id,
            kind,
            amount,
            timestamp,
        });

        log::debug!("Recorded {kind} of {amount} as {id}, balance now {}", self.balance);

        let index = self.entries.len() - 1;
        return &self.entries[index];
    }
}

impl Default for Ledger {
    fn default() -> Self {
        return Self {
            balance: LedgerConfig::default().initial_balance,
            entries: Vec::new(),
        };
    }
}

fn validate_amount(amount: Money) -> LedgerResult<()> {
    if !amount.is_positive() {
        Err(LedgerError::InvalidAmount(format!(
            "{amount} is not greater than zero"
        )))?
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_AMOUNT: Money = Money::from_cents(25_050);

    fn ledger_with(units: i64) -> Ledger {
        Ledger::new(Money::from_units(units)).unwrap()
    }

    fn kinds_and_amounts(ledger: &Ledger) -> Vec<(TransactionType, Money)> {
        ledger
            .history()
            .into_iter()
            .map(|tx| (tx.kind, tx.amount))
            .collect()
    }

    #[test]
    fn default_starts_at_one_thousand() {
        let ledger = Ledger::default();

        assert_eq!(ledger.balance(), Money::from_units(1000));
        assert!(ledger.is_empty());
    }

    #[test]
    fn from_config() {
        let config = LedgerConfig::with_initial_balance(Money::from_units(5));
        let ledger = Ledger::from_config(&config).unwrap();

        assert_eq!(ledger.balance(), Money::from_units(5));
    }

    #[test]
    fn fail_to_open_with_negative_balance() {
        let res = Ledger::new(Money::from_units(-1));

        assert!(matches!(res, Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn deposit() {
        let mut ledger = ledger_with(1000);

        let balance = ledger.deposit(SOME_AMOUNT).unwrap();

        assert_eq!(balance, Money::from_cents(125_050));
        assert_eq!(ledger.balance(), balance);
        assert_eq!(
            kinds_and_amounts(&ledger),
            vec![(TransactionType::Deposit, SOME_AMOUNT)]
        );
    }

    #[test]
    fn withdraw() {
        let mut ledger = ledger_with(1000);

        let balance = ledger.withdraw(SOME_AMOUNT).unwrap();

        assert_eq!(balance, Money::from_cents(74_950));
        assert_eq!(
            kinds_and_amounts(&ledger),
            vec![(TransactionType::Withdrawal, SOME_AMOUNT)]
        );
    }

    #[test]
    fn withdraw_entire_balance() {
        let mut ledger = ledger_with(10);

        let balance = ledger.withdraw(Money::from_units(10)).unwrap();

        assert_eq!(balance, Money::ZERO);
    }

    #[test]
    fn fail_to_withdraw_more_than_balance() {
        let mut ledger = ledger_with(10);

        let res = ledger.withdraw(Money::from_cents(1001));

        assert_eq!(
            res,
            Err(LedgerError::InsufficientFunds {
                requested: Money::from_cents(1001),
                available: Money::from_units(10),
            })
        );
        assert_eq!(ledger.balance(), Money::from_units(10));
        assert!(ledger.is_empty());
    }

    #[test]
    fn fail_on_non_positive_amounts() {
        let mut ledger = ledger_with(1000);

        for amount in [Money::ZERO, Money::from_units(-5)] {
            let res = ledger.deposit(amount);
            assert_eq!(res.unwrap_err().kind(), LedgerErrorKind::InvalidAmount);

            let res = ledger.withdraw(amount);
            assert_eq!(res.unwrap_err().kind(), LedgerErrorKind::InvalidAmount);
        }

        assert_eq!(ledger.balance(), Money::from_units(1000));
        assert!(ledger.is_empty());
    }

    #[test]
    fn fail_to_deposit_past_max() {
        let mut ledger = Ledger::new(Money::MAX).unwrap();

        let res = ledger.deposit(Money(1));

        assert_eq!(res.unwrap_err().kind(), LedgerErrorKind::InvalidAmount);
        assert_eq!(ledger.balance(), Money::MAX);
        assert!(ledger.is_empty());
    }

    #[test]
    fn history_is_newest_first() {
        let mut ledger = ledger_with(0);

        ledger.deposit(Money::from_units(10)).unwrap();
        ledger.withdraw(Money::from_units(5)).unwrap();

        assert_eq!(
            kinds_and_amounts(&ledger),
            vec![
                (TransactionType::Withdrawal, Money::from_units(5)),
                (TransactionType::Deposit, Money::from_units(10)),
            ]
        );
        assert_eq!(ledger.latest().unwrap().kind, TransactionType::Withdrawal);
    }

    #[test]
    fn history_reads_are_stable() {
        let mut ledger = ledger_with(0);
        ledger.deposit(Money::from_units(3)).unwrap();
        ledger.deposit(Money::from_units(4)).unwrap();

        assert_eq!(ledger.history(), ledger.history());
    }

    #[test]
    fn ids_strictly_increase() {
        let mut ledger = ledger_with(0);

        for _ in 0..50 {
            ledger.deposit(Money(1)).unwrap();
        }

        let ids = ledger
            .history()
            .into_iter()
            .rev()
            .map(|tx| tx.id)
            .collect::<Vec<_>>();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn failure_does_not_block_later_calls() {
        let mut ledger = ledger_with(1);

        assert!(ledger.withdraw(Money::from_units(2)).is_err());
        assert_eq!(ledger.deposit(Money::from_units(1)), Ok(Money::from_units(2)));
        assert_eq!(ledger.withdraw(Money::from_units(2)), Ok(Money::ZERO));
    }

    #[test]
    fn scenario_from_one_thousand() {
        let mut ledger = Ledger::default();

        assert_eq!(
            ledger.deposit(Money::from_cents(25_050)),
            Ok(Money::from_cents(125_050))
        );
        assert_eq!(ledger.len(), 1);

        let res = ledger.withdraw(Money::from_units(2000));
        assert_eq!(res.unwrap_err().kind(), LedgerErrorKind::InsufficientFunds);
        assert_eq!(ledger.balance(), Money::from_cents(125_050));

        assert_eq!(ledger.withdraw(Money::from_cents(125_050)), Ok(Money::ZERO));

        let latest = ledger.history()[0];
        assert_eq!(latest.kind, TransactionType::Withdrawal);
        assert_eq!(latest.amount, Money::from_cents(125_050));
        assert_eq!(ledger.balance().to_string(), "0.00");
    }

    #[test]
    fn apply_reports_success() {
        let mut ledger = ledger_with(100);

        let event = ledger.apply(TransactionEvent::new(
            TransactionType::Withdrawal,
            Money::from_units(40),
        ));

        assert!(event.success());
        assert_eq!(event.balance(), Money::from_units(60));
        assert_eq!(event.error(), None);
        assert_eq!(event.transaction(), ledger.latest());
    }

    #[test]
    fn apply_reports_failure() {
        let mut ledger = ledger_with(100);

        let event = ledger.apply(TransactionEvent::new(
            TransactionType::Withdrawal,
            Money::from_units(101),
        ));

        assert!(!event.success());
        assert_eq!(event.balance(), Money::from_units(100));
        assert_eq!(event.error(), Some(LedgerErrorKind::InsufficientFunds));
        assert_eq!(event.transaction(), None);

        let event = ledger.apply(TransactionEvent::new(TransactionType::Deposit, Money::ZERO));
        assert_eq!(event.error(), Some(LedgerErrorKind::InvalidAmount));
    }
}
