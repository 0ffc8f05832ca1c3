use crate::consts::{
    DEFAULT_MAX_ACTIVE_RESERVATIONS, DEFAULT_POOL_SIZE, DEFAULT_RESERVATION_LIFETIME_SECS,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with deposit requests (sender,receiver,amount)
    pub input: String,

    /// Number of clients to create before replaying the requests
    #[arg(long, default_value_t = DEFAULT_POOL_SIZE)]
    pub clients: u32,

    /// Unexpired sends a client may have before being throttled
    #[arg(long, default_value_t = DEFAULT_MAX_ACTIVE_RESERVATIONS)]
    pub max_reservations: usize,

    /// Seconds before a send stops counting against its client
    #[arg(long, default_value_t = DEFAULT_RESERVATION_LIFETIME_SECS)]
    pub reservation_secs: u64,

    /// Submit every request from its own thread
    #[arg(long)]
    pub concurrent: bool,
}
