use crate::errors::AppErrors;
use crate::models::amount::Amount;
use crate::models::identifiers::ClientId;

/// One deposit attempt: `sender` moves `amount` into `receiver`'s balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositCommand {
    pub sender: ClientId,
    pub receiver: ClientId,
    pub amount: Amount,
}

/// How a single deposit workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOutcome {
    Success { new_balance: Amount },
    Failed(AppErrors),
    TooManyRequests,
}
