//! Text form of a client's activity log.
//!
//! Stores keep the log as one field: RFC 3339 timestamps joined by `;`.
//! Formatting is canonical (UTC, `Z` suffix, shortest exact sub-second digits)
//! so that a decoded log re-encodes to the same text.

use crate::consts::ACTIVITY_LOG_DELIMITER;
use crate::errors::{AppErrors, AppResult};
use crate::models::domain_state::ActivityLog;
use chrono::{DateTime, SecondsFormat, Utc};

/// Parses a delimited log. Empty segments are skipped.
pub fn decode(text: &str) -> AppResult<ActivityLog> {
    text.split(ACTIVITY_LOG_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            DateTime::parse_from_rfc3339(segment)
                .map(|stamp| stamp.with_timezone(&Utc))
                .map_err(|_| AppErrors::MalformedLog(segment.to_string()))
        })
        .collect()
}

/// Joins timestamps with the delimiter; an empty log encodes to `""`.
pub fn encode(log: &[DateTime<Utc>]) -> String {
    log.iter()
        .map(|stamp| stamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .collect::<Vec<_>>()
        .join(ACTIVITY_LOG_DELIMITER)
}
