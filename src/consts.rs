/// Represents the scaling factor used for precise calculations.
/// The scale is set to 10,000 to allow for fixed-point arithmetic with four decimal places.
pub const SCALE: i64 = 10_000;

/// How many unexpired reservations a client may hold before further deposits are throttled.
pub const DEFAULT_MAX_ACTIVE_RESERVATIONS: usize = 5;

/// How long a single reservation stays active, in seconds.
pub const DEFAULT_RESERVATION_LIFETIME_SECS: u64 = 5;

/// Upper bound accepted for the reservation lifetime: one day.
pub const MAX_RESERVATION_LIFETIME_SECS: u64 = 86_400;

/// Most deposit worker threads alive at once when replaying concurrently.
pub const MAX_CONCURRENT_REQUESTS: usize = 64;

/// Pool size used when the CLI is not told otherwise.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Separator between timestamps in the persisted activity log.
pub const ACTIVITY_LOG_DELIMITER: &str = ";";
