use crate::errors::{AppErrors, AppResult};
use crate::models::domain_state::{Client, ClientRecord};
use crate::models::identifiers::ClientId;
use crate::services::activity_log_codec;
use crate::services::traits::client_store_trait::ClientStore;
use log::info;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local client store.
///
/// Records are kept in their flat persisted shape, so every read decodes the
/// activity log and every write encodes it again.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    records: Mutex<BTreeMap<ClientId, ClientRecord>>,
}

impl InMemoryClientStore {
    fn records(&self) -> AppResult<MutexGuard<'_, BTreeMap<ClientId, ClientRecord>>> {
        self.records
            .lock()
            .map_err(|_| AppErrors::Store("client table lock poisoned".to_string()))
    }

    /// Writes a raw record, bypassing the codec.
    #[cfg(test)]
    pub fn insert_record(&self, record: ClientRecord) {
        self.records().unwrap().insert(record.id, record);
    }

    /// Raw persisted record for `id`.
    #[cfg(test)]
    pub fn record(&self, id: ClientId) -> Option<ClientRecord> {
        self.records().unwrap().get(&id).cloned()
    }
}

fn to_client(record: &ClientRecord) -> AppResult<Client> {
    Ok(Client {
        id: record.id,
        balance: record.balance,
        activity_log: activity_log_codec::decode(&record.sending_records)?,
    })
}

fn to_record(client: &Client) -> ClientRecord {
    ClientRecord {
        id: client.id,
        balance: client.balance,
        sending_records: activity_log_codec::encode(&client.activity_log),
    }
}

impl ClientStore for InMemoryClientStore {
    fn find_client(&self, id: ClientId) -> AppResult<Option<Client>> {
        self.records()?.get(&id).map(to_client).transpose()
    }

    fn upsert_client(&self, client: &Client) -> AppResult<()> {
        self.records()?.insert(client.id, to_record(client));
        Ok(())
    }

    fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.records()?.values().map(to_client).collect()
    }

    fn client_ids(&self) -> AppResult<Vec<ClientId>> {
        Ok(self.records()?.keys().copied().collect())
    }

    fn delete_client(&self, id: ClientId) -> AppResult<()> {
        self.records()?.remove(&id);
        Ok(())
    }

    /// Swaps the whole table in one step. Old records are dropped without
    /// being decoded, so corrupt activity logs cannot block a reset.
    fn reset_pool(&self, size: u32) -> AppResult<()> {
        let fresh: BTreeMap<_, _> = (1..=size)
            .map(|id| (id, to_record(&Client::new(id))))
            .collect();

        let mut records = self.records()?;
        if !records.is_empty() {
            info!("Removing {} existing clients", records.len());
        }
        *records = fresh;
        Ok(())
    }
}
