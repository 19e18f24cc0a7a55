use tbl::{Ledger, LedgerErrorKind, Money, TransactionType};

use proptest::prelude::*;

fn amounts() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..10_000_000i64, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: final balance is the initial balance plus everything deposited.
    #[test]
    fn deposits_add_up(initial in 0i64..1_000_000_000i64, deposits in amounts()) {
        let mut ledger = Ledger::new(Money(initial)).unwrap();

        for amount in deposits.iter() {
            ledger.deposit(Money(*amount)).unwrap();
        }

        prop_assert_eq!(ledger.balance(), Money(initial + deposits.iter().sum::<i64>()));
        prop_assert_eq!(ledger.len(), deposits.len());
        prop_assert!(ledger.history().iter().all(|tx| tx.kind == TransactionType::Deposit));
    }

    /// Property: accepted withdrawals subtract exactly, rejected ones change nothing, and the
    /// balance never goes negative.
    #[test]
    fn withdrawals_never_overdraw(initial in 0i64..100_000_000i64, withdrawals in amounts()) {
        let mut ledger = Ledger::new(Money(initial)).unwrap();
        let mut expected = initial;

        for amount in withdrawals {
            let before = ledger.len();

            match ledger.withdraw(Money(amount)) {
                Ok(balance) => {
                    prop_assert!(amount <= expected);
                    expected -= amount;
                    prop_assert_eq!(balance, Money(expected));
                    prop_assert_eq!(ledger.len(), before + 1);
                }
                Err(e) => {
                    prop_assert!(amount > expected);
                    prop_assert_eq!(e.kind(), LedgerErrorKind::InsufficientFunds);
                    prop_assert_eq!(ledger.len(), before);
                }
            }

            prop_assert!(!ledger.balance().is_negative());
            prop_assert_eq!(ledger.balance(), Money(expected));
        }
    }

    /// Property: non-positive amounts are always rejected without side effects.
    #[test]
    fn non_positive_amounts_rejected(amount in i64::MIN..=0i64) {
        let mut ledger = Ledger::default();
        let balance = ledger.balance();

        prop_assert_eq!(ledger.deposit(Money(amount)).unwrap_err().kind(), LedgerErrorKind::InvalidAmount);
        prop_assert_eq!(ledger.withdraw(Money(amount)).unwrap_err().kind(), LedgerErrorKind::InvalidAmount);
        prop_assert_eq!(ledger.balance(), balance);
        prop_assert!(ledger.is_empty());
    }
}
