use crate::models::domain_state::Client;
use crate::models::identifiers::ClientId;
use crate::services::activity_log_codec;
use serde::{Deserialize, Serialize};

/// As read from input CSV: one deposit request per row
#[derive(Debug, Deserialize)]
pub struct InputRow {
    pub sender: ClientId,
    pub receiver: ClientId,
    pub amount: String,
}

/// As written to output CSV
#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub client: ClientId,
    pub balance: String,
    pub activity_log: String,
}

impl From<&Client> for OutputRow {
    fn from(client: &Client) -> Self {
        Self {
            client: client.id,
            balance: client.balance.to_string(),
            activity_log: activity_log_codec::encode(&client.activity_log),
        }
    }
}
