use crate::config::RateLimitConfig;
use crate::errors::{AppErrors, AppResult};
use crate::models::identifiers::ClientId;
use crate::services::traits::client_store_trait::ClientStore;
use chrono::{DateTime, Utc};
use log::{debug, error};

/// Decides whether a client may send another deposit right now.
///
/// Every successful send leaves a reservation stamped with its expiry. A
/// client is admitted while it holds fewer than `max_active_reservations`
/// unexpired reservations.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    max_active_reservations: usize,
}

impl AdmissionController {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_active_reservations: config.max_active_reservations,
        }
    }

    /// Returns `true` if `client_id` has room for another reservation at `now`.
    ///
    /// Expired reservations are dropped and the pruned client is written back
    /// to the store, even when the answer is `false`. Any failure (unknown
    /// client, corrupt log, store error) is logged and answers `false`.
    pub fn can_send<S: ClientStore + ?Sized>(
        &self,
        store: &S,
        client_id: ClientId,
        now: DateTime<Utc>,
    ) -> bool {
        match self.active_reservations(store, client_id, now) {
            Ok(active) => {
                debug!("client {client_id} holds {active} active reservations");
                active < self.max_active_reservations
            }
            Err(e) => {
                error!("admission check for client {client_id} failed: {e}");
                false
            }
        }
    }

    fn active_reservations<S: ClientStore + ?Sized>(
        &self,
        store: &S,
        client_id: ClientId,
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        let mut client = store
            .find_client(client_id)?
            .ok_or(AppErrors::ClientNotFound(client_id))?;

        let expired = client.prune_expired(now);
        if expired > 0 {
            debug!("dropped {expired} expired reservations of client {client_id}");
        }
        store.upsert_client(&client)?;

        Ok(client.activity_log.len())
    }
}
