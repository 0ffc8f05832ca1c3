use crate::config::RateLimitConfig;
use crate::errors::{AppErrors, AppResult};
use crate::models::amount::Amount;
use crate::models::deposit_command::DepositCommand;
use crate::models::identifiers::ClientId;
use crate::services::traits::client_store_trait::ClientStore;
use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, error};

/// Applies one already-admitted deposit.
#[derive(Debug, Clone)]
pub struct DepositTransactor {
    reservation_lifetime: TimeDelta,
}

impl DepositTransactor {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            reservation_lifetime: config.reservation_lifetime,
        }
    }

    /// Credits the receiver, then records a reservation against the sender.
    ///
    /// The credit is committed before the reservation is attempted and is not
    /// rolled back: if the sender cannot be loaded or saved the failure is
    /// logged and the deposit still counts as applied.
    ///
    /// # Returns
    /// * The receiver's new balance.
    ///
    /// # Errors
    /// * `AppErrors::InvalidAmount` for zero or negative amounts; nothing is written.
    /// * `AppErrors::ClientNotFound` if the receiver does not exist.
    /// * `AppErrors::Overflow` if the credit would overflow the balance.
    /// * `AppErrors::ReservationOutOfRange` if `now` plus the lifetime is not a
    ///   representable instant; nothing is written.
    /// * Any store error raised while crediting.
    pub fn apply<S: ClientStore + ?Sized>(
        &self,
        store: &S,
        cmd: &DepositCommand,
        now: DateTime<Utc>,
    ) -> AppResult<Amount> {
        if !cmd.amount.is_positive() {
            return Err(AppErrors::InvalidAmount(cmd.amount));
        }

        let expiry = now
            .checked_add_signed(self.reservation_lifetime)
            .ok_or(AppErrors::ReservationOutOfRange)?;

        let new_balance = credit(store, cmd.receiver, cmd.amount)?;

        if let Err(e) = reserve(store, cmd.sender, expiry) {
            error!(
                "deposit to client {} applied but sender {} reservation was not recorded: {e}",
                cmd.receiver, cmd.sender
            );
        }

        Ok(new_balance)
    }

}

fn reserve<S: ClientStore + ?Sized>(
    store: &S,
    sender: ClientId,
    expiry: DateTime<Utc>,
) -> AppResult<()> {
    let mut client = store
        .find_client(sender)?
        .ok_or(AppErrors::ClientNotFound(sender))?;

    client.activity_log.push(expiry);
    store.upsert_client(&client)?;

    debug!("client {sender} reserved a send slot until {expiry}");
    Ok(())
}

fn credit<S: ClientStore + ?Sized>(
    store: &S,
    receiver: ClientId,
    amount: Amount,
) -> AppResult<Amount> {
    let mut client = store
        .find_client(receiver)?
        .ok_or(AppErrors::ClientNotFound(receiver))?;

    client.balance = client
        .balance
        .checked_add(amount)
        .ok_or(AppErrors::Overflow)?;
    store.upsert_client(&client)?;

    Ok(client.balance)
}
