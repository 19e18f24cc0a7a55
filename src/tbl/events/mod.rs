mod deposit_event;
mod ledger_event;
mod withdrawal_event;

pub use deposit_event::DepositEvent;
pub use ledger_event::LedgerEvent;
pub use withdrawal_event::WithdrawalEvent;

use crate::{Money, TransactionType};

/// Typed request against the ledger, forcing correct handling through the type-system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionEvent {
    Deposit(DepositEvent),
    Withdrawal(WithdrawalEvent),
}

impl TransactionEvent {
    pub fn new(kind: TransactionType, amount: Money) -> Self {
        return match kind {
            TransactionType::Deposit => Self::Deposit(DepositEvent { amount }),
            TransactionType::Withdrawal => Self::Withdrawal(WithdrawalEvent { amount }),
        };
    }

    pub fn kind(&self) -> TransactionType {
        return match self {
            Self::Deposit(_) => TransactionType::Deposit,
            Self::Withdrawal(_) => TransactionType::Withdrawal,
        };
    }

    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit(event) => event.amount,
            Self::Withdrawal(event) => event.amount,
        };
    }
}
