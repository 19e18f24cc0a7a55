use crate::{LedgerErrorKind, Money, Transaction};

/// Notification produced by every ledger call, successful or not.
///
/// A renderer turns it into balance text, a new history entry and a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEvent {
    balance: Money,
    outcome: Result<Transaction, LedgerErrorKind>,
}

impl LedgerEvent {
    pub fn succeeded(balance: Money, transaction: Transaction) -> Self {
        return Self {
            balance,
            outcome: Ok(transaction),
        };
    }

    pub fn failed(balance: Money, error: LedgerErrorKind) -> Self {
        return Self {
            balance,
            outcome: Err(error),
        };
    }

    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Balance after the call; unchanged from before when the call failed
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<LedgerErrorKind> {
        self.outcome.as_ref().err().copied()
    }

    pub fn outcome(&self) -> Result<&Transaction, LedgerErrorKind> {
        self.outcome.as_ref().map_err(|kind| *kind)
    }
}
