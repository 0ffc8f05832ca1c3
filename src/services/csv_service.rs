use crate::clock::Clock;
use crate::consts::MAX_CONCURRENT_REQUESTS;
use crate::errors::{AppErrors, AppResult};
use crate::models::amount::Amount;
use crate::models::api_models::{DepositRequest, DepositResponse, DepositStatus};
use crate::models::csv_models::client_rows::InputRow;
use crate::services::bank_service::BankService;
use crate::services::traits::client_store_trait::ClientStore;
use csv::ReaderBuilder;
use log::{error, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Tally of deposit statuses produced by one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub throttled: usize,
}

impl RunSummary {
    fn record(&mut self, resp: &DepositResponse) {
        match resp.return_status {
            DepositStatus::Success => self.succeeded += 1,
            DepositStatus::ErrorTooManyRequests => self.throttled += 1,
            DepositStatus::Error => self.failed += 1,
        }
    }
}

/// Replays deposit requests from a CSV file against the bank.
///
/// # Arguments
/// * `path` - CSV file with `sender,receiver,amount` rows.
/// * `bank` - The bank the deposits are sent to.
/// * `concurrent` - Submit every request from its own thread instead of in file order,
///   at most `MAX_CONCURRENT_REQUESTS` threads at a time.
pub fn run_from_csv_path<S: ClientStore, C: Clock>(
    path: &str,
    bank: &BankService<S, C>,
    concurrent: bool,
) -> AppResult<RunSummary> {
    let file = File::open(path).map_err(|e| AppErrors::Io(format!("open {path}: {e}")))?;
    run_from_reader(BufReader::new(file), bank, concurrent)
}

/// Same as [`run_from_csv_path`], reading rows from any reader.
/// Malformed rows are logged and skipped.
pub fn run_from_reader<R: Read, S: ClientStore, C: Clock>(
    reader: R,
    bank: &BankService<S, C>,
    concurrent: bool,
) -> AppResult<RunSummary> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut requests = Vec::new();
    for rec in rdr.deserialize::<InputRow>() {
        match rec {
            Ok(row) => match row_to_request(row) {
                Ok(req) => requests.push(req),
                Err(e) => error!("skip row: {e}"),
            },
            Err(e) => error!("skip malformed CSV row: {e}"),
        }
    }
    info!("Submitting {} deposit requests", requests.len());

    let responses = if concurrent {
        submit_concurrently(&requests, bank)
    } else {
        requests.iter().map(|req| bank.deposit(req)).collect()
    };

    let mut summary = RunSummary::default();
    for resp in &responses {
        summary.record(resp);
    }
    info!(
        "Run finished: {} succeeded, {} failed, {} throttled",
        summary.succeeded, summary.failed, summary.throttled
    );
    Ok(summary)
}

/// One thread per request, the way a server handles inbound calls.
///
/// Requests go out in batches of `MAX_CONCURRENT_REQUESTS`; a batch finishes
/// before the next one starts. A worker that cannot be spawned or that
/// panics is reported as a failed deposit.
fn submit_concurrently<S: ClientStore, C: Clock>(
    requests: &[DepositRequest],
    bank: &BankService<S, C>,
) -> Vec<DepositResponse> {
    let mut responses = Vec::with_capacity(requests.len());

    for batch in requests.chunks(MAX_CONCURRENT_REQUESTS) {
        std::thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|req| {
                    std::thread::Builder::new()
                        .name(format!("deposit-{}", req.requesting_client))
                        .spawn_scoped(scope, move || bank.deposit(req))
                })
                .collect();

            for handle in handles {
                let resp = match handle {
                    Ok(handle) => handle.join().unwrap_or_else(|_| {
                        error!("deposit worker panicked");
                        failed_response()
                    }),
                    Err(e) => {
                        error!("could not spawn deposit worker: {e}");
                        failed_response()
                    }
                };
                responses.push(resp);
            }
        });
    }

    responses
}

fn failed_response() -> DepositResponse {
    DepositResponse {
        return_status: DepositStatus::Error,
        amount: None,
    }
}

fn row_to_request(row: InputRow) -> AppResult<DepositRequest> {
    let amount = Amount::from_str(&row.amount).map_err(|_| AppErrors::InvalidInput("bad amount"))?;
    Ok(DepositRequest {
        requesting_client: row.sender,
        client_id: row.receiver,
        amount,
    })
}
