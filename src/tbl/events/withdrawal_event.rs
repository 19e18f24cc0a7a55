use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalEvent {
    pub amount: Money,
}
