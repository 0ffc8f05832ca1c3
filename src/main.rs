use crate::cli::Cli;
use crate::clock::{Clock, SystemClock};
use crate::config::RateLimitConfig;
use crate::errors::{AppErrors, AppResult};
use crate::models::api_models::{ReturnStatus, SetNumberOfClientsRequest};
use crate::models::csv_models::client_rows::OutputRow;
use crate::services::bank_service::BankService;
use crate::services::csv_service::run_from_csv_path;
use crate::services::traits::client_store_trait::ClientStore;
use crate::state::InMemoryClientStore;
use clap::Parser;
use csv::WriterBuilder;
use log::info;
use std::io;

mod cli;
mod clock;
mod config;
mod consts;
mod errors;
mod models;
mod services;
mod state;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();
    let config = RateLimitConfig::new(args.max_reservations, args.reservation_secs)?;

    let bank = BankService::new(InMemoryClientStore::default(), SystemClock, &config);
    info!("Bank status: {:?}", bank.is_alive().return_status);

    let pool = bank.set_number_of_clients(&SetNumberOfClientsRequest {
        number_of_clients: args.clients,
    });
    if pool.return_status != ReturnStatus::Success {
        return Err(AppErrors::Store(format!(
            "could not initialize {} clients",
            args.clients
        )));
    }

    run_from_csv_path(&args.input, &bank, args.concurrent)?;
    emit_clients_to_stdout(&bank)?;

    Ok(())
}

pub fn emit_clients_to_stdout<S: ClientStore, C: Clock>(bank: &BankService<S, C>) -> AppResult<()> {
    let out = io::stdout();
    let handle = out.lock();
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(handle);

    for client in bank.get_all_clients()? {
        wtr.serialize(OutputRow::from(&client))
            .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}
