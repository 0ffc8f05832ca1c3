use crate::errors::AppResult;
use crate::models::domain_state::Client;
use crate::models::identifiers::ClientId;
use log::info;

/// Key-value style persistence for clients, keyed by id.
///
/// Implementors own the persisted records; callers work on detached
/// [`Client`] copies and must write changes back with [`upsert_client`].
///
/// [`upsert_client`]: ClientStore::upsert_client
pub trait ClientStore: Send + Sync {
    /// Loads a client, or `None` when the id is unknown.
    ///
    /// # Errors
    /// * `AppErrors::MalformedLog` if the persisted activity log cannot be decoded.
    /// * `AppErrors::Store` on any persistence failure.
    fn find_client(&self, id: ClientId) -> AppResult<Option<Client>>;

    /// Inserts the client, replacing any existing record with the same id.
    fn upsert_client(&self, client: &Client) -> AppResult<()>;

    /// Returns every client ordered by id.
    fn list_clients(&self) -> AppResult<Vec<Client>>;

    /// Removes a client. Unknown ids are ignored.
    fn delete_client(&self, id: ClientId) -> AppResult<()>;

    /// Ids of every stored client, ordered.
    ///
    /// Stores that keep the activity log encoded should override this so the
    /// ids can be read without decoding any log.
    fn client_ids(&self) -> AppResult<Vec<ClientId>> {
        Ok(self.list_clients()?.iter().map(|client| client.id).collect())
    }

    /// Clears the pool and creates clients `1..=size` with zero balance and no reservations.
    fn reset_pool(&self, size: u32) -> AppResult<()> {
        let existing = self.client_ids()?;
        if !existing.is_empty() {
            info!("Removing {} existing clients", existing.len());
            for id in existing {
                self.delete_client(id)?;
            }
        }

        for id in 1..=size {
            self.upsert_client(&Client::new(id))?;
        }
        Ok(())
    }
}
