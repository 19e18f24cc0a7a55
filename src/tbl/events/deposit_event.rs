use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositEvent {
    pub amount: Money,
}
