use crate::clock::Clock;
use crate::config::RateLimitConfig;
use crate::errors::AppResult;
use crate::models::api_models::{
    DepositRequest, DepositResponse, DepositStatus, IsAliveResponse, ReturnStatus,
    SetNumberOfClientsRequest, SetNumberOfClientsResponse,
};
use crate::models::deposit_command::{DepositCommand, DepositOutcome};
use crate::models::domain_state::Client;
use crate::services::deposit_workflow::DepositWorkflow;
use crate::services::traits::client_store_trait::ClientStore;
use log::{error, info};

/// Caller-facing bank operations on top of a client store.
#[derive(Debug)]
pub struct BankService<S, C> {
    store: S,
    clock: C,
    workflow: DepositWorkflow,
}

impl<S: ClientStore, C: Clock> BankService<S, C> {
    pub fn new(store: S, clock: C, config: &RateLimitConfig) -> Self {
        Self {
            store,
            clock,
            workflow: DepositWorkflow::new(config),
        }
    }

    pub fn is_alive(&self) -> IsAliveResponse {
        IsAliveResponse {
            return_status: ReturnStatus::Alive,
        }
    }

    /// Lists every client. Store failures are logged and propagated.
    pub fn get_all_clients(&self) -> AppResult<Vec<Client>> {
        info!("Listing all clients");
        let clients = self
            .store
            .list_clients()
            .inspect_err(|e| error!("failed to list clients: {e}"))?;
        info!("There are {} clients in the store", clients.len());
        Ok(clients)
    }

    /// Replaces the whole pool with `number_of_clients` fresh clients.
    pub fn set_number_of_clients(
        &self,
        request: &SetNumberOfClientsRequest,
    ) -> SetNumberOfClientsResponse {
        let size = request.number_of_clients;
        info!("Initializing a pool of {size} clients");

        match self.store.reset_pool(size) {
            Ok(()) => {
                info!("Done initializing {size} clients");
                SetNumberOfClientsResponse {
                    return_status: ReturnStatus::Success,
                    total_count: Some(size),
                }
            }
            Err(e) => {
                error!("failed to initialize {size} clients: {e}");
                SetNumberOfClientsResponse {
                    return_status: ReturnStatus::Error,
                    total_count: None,
                }
            }
        }
    }

    /// Runs one rate-limited deposit and reports its status.
    pub fn deposit(&self, request: &DepositRequest) -> DepositResponse {
        let cmd = DepositCommand {
            sender: request.requesting_client,
            receiver: request.client_id,
            amount: request.amount,
        };

        match self.workflow.check_and_deposit(&self.store, &self.clock, &cmd) {
            DepositOutcome::Success { new_balance } => {
                info!(
                    "client {} deposited {} to client {}",
                    cmd.sender, cmd.amount, cmd.receiver
                );
                DepositResponse {
                    return_status: DepositStatus::Success,
                    amount: Some(new_balance),
                }
            }
            DepositOutcome::Failed(e) => {
                error!(
                    "client {} deposit of {} to client {} failed: {e}",
                    cmd.sender, cmd.amount, cmd.receiver
                );
                DepositResponse {
                    return_status: DepositStatus::Error,
                    amount: None,
                }
            }
            DepositOutcome::TooManyRequests => {
                error!("too many requests by client {}", cmd.sender);
                DepositResponse {
                    return_status: DepositStatus::ErrorTooManyRequests,
                    amount: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::models::amount::Amount;
    use crate::models::domain_state::ClientRecord;
    use crate::models::identifiers::ClientId;
    use crate::services::test_support::FlakyStore;
    use crate::state::InMemoryClientStore;

    fn bank() -> BankService<InMemoryClientStore, MockClock> {
        BankService::new(
            InMemoryClientStore::default(),
            MockClock::at_noon(),
            &RateLimitConfig::default(),
        )
    }

    fn request(sender: ClientId, receiver: ClientId, amount: &str) -> DepositRequest {
        DepositRequest {
            requesting_client: sender,
            client_id: receiver,
            amount: amount.parse().unwrap(),
        }
    }

    #[test]
    fn reports_alive() {
        assert_eq!(bank().is_alive().return_status, ReturnStatus::Alive);
    }

    #[test]
    fn pool_reset_then_listing_returns_fresh_clients() {
        // arrange
        let bank = bank();

        // act
        let resp = bank.set_number_of_clients(&SetNumberOfClientsRequest {
            number_of_clients: 10,
        });
        let clients = bank.get_all_clients().unwrap();

        // assert
        assert_eq!(resp.return_status, ReturnStatus::Success);
        assert_eq!(resp.total_count, Some(10));
        assert_eq!(
            clients.iter().map(|c| c.id).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<ClientId>>()
        );
        assert!(clients.iter().all(|c| c.balance == Amount::zero()));
        assert!(clients.iter().all(|c| c.activity_log.is_empty()));
    }

    #[test]
    fn pool_reset_failure_reports_error() {
        let store = FlakyStore::with_pool(3);
        store.fail_writes(true);
        let bank = BankService::new(store, MockClock::at_noon(), &RateLimitConfig::default());

        let resp = bank.set_number_of_clients(&SetNumberOfClientsRequest {
            number_of_clients: 5,
        });

        assert_eq!(resp.return_status, ReturnStatus::Error);
        assert_eq!(resp.total_count, None);
    }

    #[test]
    fn pool_reset_recovers_from_corrupt_activity_log() {
        // arrange
        let store = FlakyStore::with_pool(3);
        store.inner().insert_record(ClientRecord {
            id: 2,
            balance: Amount::zero(),
            sending_records: "garbage".to_string(),
        });
        let bank = BankService::new(store, MockClock::at_noon(), &RateLimitConfig::default());
        assert!(bank.get_all_clients().is_err());

        // act
        let resp = bank.set_number_of_clients(&SetNumberOfClientsRequest {
            number_of_clients: 4,
        });

        // assert
        assert_eq!(resp.return_status, ReturnStatus::Success);
        assert_eq!(resp.total_count, Some(4));
        assert_eq!(bank.get_all_clients().unwrap().len(), 4);
    }

    #[test]
    fn listing_propagates_store_failure() {
        let store = FlakyStore::with_pool(3);
        store.fail_reads(true);
        let bank = BankService::new(store, MockClock::at_noon(), &RateLimitConfig::default());

        assert!(bank.get_all_clients().is_err());
    }

    #[test]
    fn deposit_statuses_map_outcomes() {
        // arrange
        let bank = bank();
        bank.set_number_of_clients(&SetNumberOfClientsRequest {
            number_of_clients: 3,
        });

        // act
        let ok: Vec<_> = (0..5).map(|_| bank.deposit(&request(1, 2, "100"))).collect();
        let throttled = bank.deposit(&request(1, 2, "100"));
        let missing = bank.deposit(&request(3, 7, "1.5"));

        // assert
        assert!(ok.iter().all(|r| r.return_status == DepositStatus::Success));
        assert_eq!(ok[4].amount, Some("500".parse().unwrap()));
        assert_eq!(throttled.return_status, DepositStatus::ErrorTooManyRequests);
        assert_eq!(throttled.amount, None);
        assert_eq!(missing.return_status, DepositStatus::Error);
        assert_eq!(missing.amount, None);
    }

    #[test]
    fn response_serializes_balance_as_decimal_text() {
        let resp = DepositResponse {
            return_status: DepositStatus::Success,
            amount: Some(Amount(5_000_000)),
        };
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&resp).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(text, "returnStatus,amount\nSuccess,500.0000\n");
    }
}
