use crate::ids::TransactionId;
use crate::Money;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Immutable record of one accepted change to the balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionType,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        return match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return f.write_str(self.label());
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}({}) #{}", self.kind, self.amount, self.id);
    }
}
