mod args;
mod config;

use tbl::input::{self, InputEvent};
use tbl::render::TextRenderer;
use tbl::services::TellerService;
use tbl::{LedgerConfig, Result};

use chrono::Utc;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let input_args = args::parse_input_args()?;
    log::debug!("Parsed input args: {input_args:?}");

    let ledger_config = input_args
        .initial_balance
        .map(LedgerConfig::with_initial_balance)
        .unwrap_or_default();

    let renderer = TextRenderer::new(ledger_config.initial_balance);
    let mut teller = tbl::build_teller_service(&ledger_config, renderer)?;

    process_data(&mut teller, &input_args)?;

    log::debug!("Process complete. Rendering screen...");

    println!("{}", teller.renderer().screen(&Utc::now()));

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and replay every request against the ledger
fn process_data(teller: &mut TellerService<TextRenderer>, input_args: &args::InputArgs) -> Result {
    let mut rdr = input::build_csv_reader(&input_args.input_path)?;

    log::debug!("Deserializing reader...");
    for input_event in input::read_input_events(&mut rdr) {
        replay(teller, &input_event);
    }

    Ok(())
}

fn replay(teller: &mut TellerService<TextRenderer>, input_event: &InputEvent) {
    let event = teller.submit(input_event.typ, input_event.amount_text());

    if let Some(toast) = teller.renderer().toast() {
        if event.success() {
            log::info!("{}", toast.message);
        } else {
            log::warn!("{}", toast.message);
        }
    }
}
