use crate::models::amount::Amount;
use crate::models::identifiers::ClientId;
use serde::{Deserialize, Serialize};

/// Status of the liveness check and pool management calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    Alive,
    Success,
    Error,
}

/// Status of a single deposit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositStatus {
    Success,
    Error,
    ErrorTooManyRequests,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsAliveResponse {
    pub return_status: ReturnStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNumberOfClientsRequest {
    pub number_of_clients: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNumberOfClientsResponse {
    pub return_status: ReturnStatus,
    /// Pool size after the reset; absent when the reset failed.
    pub total_count: Option<u32>,
}

/// `requesting_client` sends `amount` to `client_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub requesting_client: ClientId,
    pub client_id: ClientId,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    pub return_status: DepositStatus,
    /// Receiver's balance after a successful deposit.
    pub amount: Option<Amount>,
}
