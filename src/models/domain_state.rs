use crate::models::amount::Amount;
use crate::models::identifiers::ClientId;
use chrono::{DateTime, Utc};

/// Ordered reservation expiry markers recorded against a sending client.
pub type ActivityLog = Vec<DateTime<Utc>>;

/// A bank client as seen by the deposit engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub balance: Amount,
    /// Each entry is the instant at which one consumed send slot frees up again.
    pub activity_log: ActivityLog,
}

impl Client {
    /// A fresh pool member: zero balance, no reservations.
    pub fn new(id: ClientId) -> Self {
        Self {
            id,
            balance: Amount::zero(),
            activity_log: ActivityLog::new(),
        }
    }

    /// Drops every reservation that expires at or before `now`.
    /// Returns how many were removed.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.activity_log.len();
        self.activity_log.retain(|expiry| *expiry > now);
        before - self.activity_log.len()
    }
}

/// Flat shape of a client as kept by a store; the activity log is delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: ClientId,
    pub balance: Amount,
    pub sending_records: String,
}
