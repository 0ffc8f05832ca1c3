use crate::clock::Clock;
use crate::config::RateLimitConfig;
use crate::models::deposit_command::{DepositCommand, DepositOutcome};
use crate::services::admission_controller::AdmissionController;
use crate::services::deposit_transactor::DepositTransactor;
use crate::services::traits::client_store_trait::ClientStore;
use log::debug;
use std::sync::{Mutex, PoisonError};

/// End-to-end "attempt a deposit": admission check, then apply.
///
/// A single lock serializes the whole check-then-apply sequence across all
/// clients, so no two attempts ever interleave their store reads and writes.
/// Listing and pool resets do not take this lock.
#[derive(Debug)]
pub struct DepositWorkflow {
    admission: AdmissionController,
    transactor: DepositTransactor,
    lock: Mutex<()>,
}

impl DepositWorkflow {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            admission: AdmissionController::new(config),
            transactor: DepositTransactor::new(config),
            lock: Mutex::new(()),
        }
    }

    /// Runs one deposit attempt under the global lock.
    ///
    /// Store and decode faults never escape: they end as
    /// `DepositOutcome::TooManyRequests` when raised by the admission check,
    /// or `DepositOutcome::Failed` when raised while applying.
    pub fn check_and_deposit<S, C>(
        &self,
        store: &S,
        clock: &C,
        cmd: &DepositCommand,
    ) -> DepositOutcome
    where
        S: ClientStore + ?Sized,
        C: Clock + ?Sized,
    {
        // guards `()`, all state lives in the store
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let now = clock.now();

        if !self.admission.can_send(store, cmd.sender, now) {
            debug!("client {} denied at {now}", cmd.sender);
            return DepositOutcome::TooManyRequests;
        }

        match self.transactor.apply(store, cmd, now) {
            Ok(new_balance) => DepositOutcome::Success { new_balance },
            Err(e) => DepositOutcome::Failed(e),
        }
    }
}
