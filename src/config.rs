use crate::consts::{
    DEFAULT_MAX_ACTIVE_RESERVATIONS, DEFAULT_RESERVATION_LIFETIME_SECS,
    MAX_RESERVATION_LIFETIME_SECS,
};
use crate::errors::{AppErrors, AppResult};
use chrono::TimeDelta;

/// Tunables of the per-client admission window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// A client may hold at most this many unexpired reservations.
    pub max_active_reservations: usize,
    /// Time between a successful send and the moment its slot frees up.
    pub reservation_lifetime: TimeDelta,
}

impl RateLimitConfig {
    /// Validates raw settings, e.g. as given on the command line.
    pub fn new(max_active_reservations: usize, reservation_lifetime_secs: u64) -> AppResult<Self> {
        if max_active_reservations == 0 {
            return Err(AppErrors::InvalidConfig("max reservations must be at least 1"));
        }
        if reservation_lifetime_secs == 0 {
            return Err(AppErrors::InvalidConfig("reservation lifetime must be positive"));
        }
        if reservation_lifetime_secs > MAX_RESERVATION_LIFETIME_SECS {
            return Err(AppErrors::InvalidConfig("reservation lifetime is longer than a day"));
        }
        let reservation_lifetime = i64::try_from(reservation_lifetime_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or(AppErrors::InvalidConfig("reservation lifetime out of range"))?;

        Ok(Self {
            max_active_reservations,
            reservation_lifetime,
        })
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_active_reservations: DEFAULT_MAX_ACTIVE_RESERVATIONS,
            reservation_lifetime: TimeDelta::seconds(DEFAULT_RESERVATION_LIFETIME_SECS as i64),
        }
    }
}
