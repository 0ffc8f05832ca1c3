use crate::models::amount::Amount;
use crate::models::identifiers::ClientId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AppErrors {
    #[error("client {0} not found")]
    ClientNotFound(ClientId),
    #[error("malformed activity log segment: {0:?}")]
    MalformedLog(String),
    #[error("store failure: {0}")]
    Store(String),
    #[error("deposit amount must be positive, got {0}")]
    InvalidAmount(Amount),
    #[error("balance overflow")]
    Overflow,
    #[error("reservation expiry is past the representable time range")]
    ReservationOutOfRange,
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("io: {0}")]
    Io(String),
    #[error(transparent)]
    AmountParseError(#[from] AmountParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,
    #[error("malformed integer part")]
    MalformedInt,
    #[error("malformed fractional part")]
    MalformedFrac,
    #[error("overflow")]
    Overflow,
}

pub type AppResult<T> = Result<T, AppErrors>;
