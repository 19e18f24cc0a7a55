//! Presentation side of the ledger: anything that turns a `LedgerEvent` into something a
//! person looks at.

mod format;
mod text_renderer;
mod toast;

pub use format::{format_currency, format_time};
pub use text_renderer::{HistoryEntry, TextRenderer, EMPTY_HISTORY};
pub use toast::{Toast, ToastKind, TOAST_DURATION};

use crate::events::LedgerEvent;

/// Receives every event the ledger produces, in order
pub trait Renderer {
    fn render(&mut self, event: &LedgerEvent);
}

impl<F> Renderer for F
where
    F: FnMut(&LedgerEvent),
{
    fn render(&mut self, event: &LedgerEvent) {
        self(event)
    }
}
