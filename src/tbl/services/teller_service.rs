use crate::events::{LedgerEvent, TransactionEvent};
use crate::render::Renderer;
use crate::{Ledger, LedgerErrorKind, Money, TransactionType};

/// Front desk of a session: turns user input into ledger calls and hands every outcome to
/// the renderer.
pub struct TellerService<R: Renderer> {
    ledger: Ledger,
    renderer: R,
}

impl<R: Renderer> TellerService<R> {
    pub fn new(ledger: Ledger, renderer: R) -> Self {
        return Self { ledger, renderer };
    }

    pub fn deposit_input(&mut self, input: &str) -> LedgerEvent {
        return self.submit(TransactionType::Deposit, input);
    }

    pub fn withdraw_input(&mut self, input: &str) -> LedgerEvent {
        return self.submit(TransactionType::Withdrawal, input);
    }

    /// Parses `input` as an amount and applies it. Text that is not a number is reported as
    /// an invalid amount without reaching the ledger.
    pub fn submit(&mut self, kind: TransactionType, input: &str) -> LedgerEvent {
        log::debug!("Submitting {kind} input: {input:?}");

        let event = match input.parse::<Money>() {
            Ok(amount) => self.ledger.apply(TransactionEvent::new(kind, amount)),
            Err(e) => {
                log::warn!("{e}");
                LedgerEvent::failed(self.ledger.balance(), LedgerErrorKind::InvalidAmount)
            }
        };

        return self.dispatch(event);
    }

    pub fn process_event(&mut self, event: TransactionEvent) -> LedgerEvent {
        let event = self.ledger.apply(event);

        return self.dispatch(event);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn take(self) -> (Ledger, R) {
        log::debug!("Destructuring TellerService");
        return (self.ledger, self.renderer);
    }

    fn dispatch(&mut self, event: LedgerEvent) -> LedgerEvent {
        log::debug!("Dispatching ledger event: {event:?}");
        self.renderer.render(&event);

        return event;
    }
}
