mod teller_service;

pub use teller_service::TellerService;
