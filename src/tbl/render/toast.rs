use super::format_currency;

use crate::events::LedgerEvent;
use crate::{LedgerErrorKind, TransactionType};

use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short-lived notification shown after each ledger call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub dismiss_after: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        return Self {
            message: message.into(),
            kind,
            dismiss_after: TOAST_DURATION,
        };
    }

    pub fn from_event(event: &LedgerEvent) -> Self {
        return match event.outcome() {
            Ok(transaction) => {
                let amount = format_currency(transaction.amount);
                let message = match transaction.kind {
                    TransactionType::Deposit => format!("Successfully deposited {amount}"),
                    TransactionType::Withdrawal => format!("Successfully withdrawn {amount}"),
                };
                Self::new(message, ToastKind::Success)
            }
            Err(LedgerErrorKind::InvalidAmount) => {
                Self::new("Please enter a valid positive amount", ToastKind::Error)
            }
            Err(LedgerErrorKind::InsufficientFunds) => {
                Self::new("Insufficient funds! Cannot withdraw.", ToastKind::Error)
            }
        };
    }

    pub fn is_visible(&self, elapsed: Duration) -> bool {
        elapsed < self.dismiss_after
    }
}
