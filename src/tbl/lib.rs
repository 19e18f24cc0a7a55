mod config;
pub mod events;
pub mod ids;
pub mod input;
mod ledger;
mod money;
pub mod render;
mod result;
pub mod services;
mod transaction;
pub mod validation;

pub use config::{LedgerConfig, DEFAULT_INITIAL_BALANCE};
pub use ledger::{Ledger, LedgerError, LedgerErrorKind, LedgerResult};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use transaction::{Transaction, TransactionType};

pub fn build_teller_service<R: render::Renderer>(
    config: &LedgerConfig,
    renderer: R,
) -> Result<services::TellerService<R>> {
    let ledger = Ledger::from_config(config)?;
    let teller_service = services::TellerService::new(ledger, renderer);

    return Ok(teller_service);
}
