//! Store doubles shared by the service tests.

use crate::errors::{AppErrors, AppResult};
use crate::models::amount::Amount;
use crate::models::domain_state::Client;
use crate::models::identifiers::ClientId;
use crate::services::traits::client_store_trait::ClientStore;
use crate::state::InMemoryClientStore;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Appends `count` reservations expiring at `expiry` to client `id`.
pub fn seed_reservations(
    store: &impl ClientStore,
    id: ClientId,
    expiry: DateTime<Utc>,
    count: usize,
) {
    let mut client = store.find_client(id).unwrap().unwrap();
    client.activity_log.extend(std::iter::repeat_n(expiry, count));
    store.upsert_client(&client).unwrap();
}

/// In-memory store whose reads or writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: InMemoryClientStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn with_pool(size: u32) -> Self {
        let store = Self::default();
        store.reset_pool(size).unwrap();
        store
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// The wrapped store, for writing raw records.
    pub fn inner(&self) -> &InMemoryClientStore {
        &self.inner
    }

    fn check(flag: &AtomicBool) -> AppResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(AppErrors::Store("injected failure".to_string()));
        }
        Ok(())
    }
}

impl ClientStore for FlakyStore {
    fn find_client(&self, id: ClientId) -> AppResult<Option<Client>> {
        Self::check(&self.fail_reads)?;
        self.inner.find_client(id)
    }

    fn upsert_client(&self, client: &Client) -> AppResult<()> {
        Self::check(&self.fail_writes)?;
        self.inner.upsert_client(client)
    }

    fn list_clients(&self) -> AppResult<Vec<Client>> {
        Self::check(&self.fail_reads)?;
        self.inner.list_clients()
    }

    fn delete_client(&self, id: ClientId) -> AppResult<()> {
        Self::check(&self.fail_writes)?;
        self.inner.delete_client(id)
    }

    fn client_ids(&self) -> AppResult<Vec<ClientId>> {
        Self::check(&self.fail_reads)?;
        self.inner.client_ids()
    }
}

/// Store that records every write and notices calls that overlap in time.
#[derive(Debug, Default)]
pub struct OverlapStore {
    inner: InMemoryClientStore,
    busy: AtomicBool,
    overlaps: AtomicUsize,
    writes: Mutex<Vec<(ClientId, Amount)>>,
}

impl OverlapStore {
    pub fn with_pool(size: u32) -> Self {
        let store = Self::default();
        store.reset_pool(size).unwrap();
        store.writes.lock().unwrap().clear();
        store
    }

    pub fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }

    /// Balances written for `id`, in write order.
    pub fn balance_trace(&self, id: ClientId) -> Vec<Amount> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(client, _)| *client == id)
            .map(|(_, balance)| *balance)
            .collect()
    }

    fn tracked<R>(&self, op: impl FnOnce() -> R) -> R {
        if self.busy.swap(true, Ordering::SeqCst) {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        // widen the window in which an unserialized caller would collide
        std::thread::sleep(Duration::from_micros(200));
        let out = op();
        self.busy.store(false, Ordering::SeqCst);
        out
    }
}

impl ClientStore for OverlapStore {
    fn find_client(&self, id: ClientId) -> AppResult<Option<Client>> {
        self.tracked(|| self.inner.find_client(id))
    }

    fn upsert_client(&self, client: &Client) -> AppResult<()> {
        self.tracked(|| {
            self.writes.lock().unwrap().push((client.id, client.balance));
            self.inner.upsert_client(client)
        })
    }

    fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.inner.list_clients()
    }

    fn delete_client(&self, id: ClientId) -> AppResult<()> {
        self.inner.delete_client(id)
    }
}
