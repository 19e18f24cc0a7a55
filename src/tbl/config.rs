use crate::Money;

/// Balance a session starts with when nothing else is configured
pub const DEFAULT_INITIAL_BALANCE: Money = Money::from_units(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub initial_balance: Money,
}

impl LedgerConfig {
    pub fn with_initial_balance(initial_balance: Money) -> Self {
        return Self { initial_balance };
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        return Self {
            initial_balance: DEFAULT_INITIAL_BALANCE,
        };
    }
}
