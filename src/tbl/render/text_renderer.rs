use super::{format_currency, format_time, Renderer, Toast};

use crate::events::LedgerEvent;
use crate::ids::TransactionId;
use crate::{Money, Transaction, TransactionType};

use chrono::{DateTime, Utc};

/// Shown in place of the history while no transaction exists
pub const EMPTY_HISTORY: &str = "No transactions yet";

/// One rendered row of the transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: TransactionId,
    pub kind: TransactionType,
    pub amount_text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn line(&self, now: &DateTime<Utc>) -> String {
        let sign = match self.kind {
            TransactionType::Deposit => '+',
            TransactionType::Withdrawal => '\u{2212}',
        };

        return format!(
            "{sign} {}  {}  {}",
            self.amount_text,
            self.kind.label(),
            format_time(&self.timestamp, now)
        );
    }
}

impl From<&Transaction> for HistoryEntry {
    fn from(transaction: &Transaction) -> Self {
        return Self {
            id: transaction.id,
            kind: transaction.kind,
            amount_text: format_currency(transaction.amount),
            timestamp: transaction.timestamp,
        };
    }
}

/// Keeps a plain-text view of the account up to date from ledger events
#[derive(Debug, Clone)]
pub struct TextRenderer {
    balance_text: String,
    entries: Vec<HistoryEntry>,
    toast: Option<Toast>,
}

impl TextRenderer {
    pub fn new(initial_balance: Money) -> Self {
        return Self {
            balance_text: format_currency(initial_balance),
            entries: Vec::new(),
            toast: None,
        };
    }

    pub fn balance_text(&self) -> &str {
        &self.balance_text
    }

    /// Newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }

    /// Whole view as text, with relative times measured from `now`
    pub fn screen(&self, now: &DateTime<Utc>) -> String {
        let mut lines = vec![format!("Balance: {}", self.balance_text)];

        lines.push("Transactions:".to_string());

        if self.entries.is_empty() {
            lines.push(format!("  {EMPTY_HISTORY}"));
        }

        for entry in self.entries.iter() {
            lines.push(format!("  {}", entry.line(now)));
        }

        lines.join("\n")
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, event: &LedgerEvent) {
        self.balance_text = format_currency(event.balance());

        if let Some(transaction) = event.transaction() {
            self.entries.insert(0, HistoryEntry::from(transaction));
        }

        let toast = Toast::from_event(event);
        log::debug!("Showing toast: {toast:?}");

        self.toast = Some(toast);
    }
}
