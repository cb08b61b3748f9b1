//! Profit streaming engine.
//!
//! Profit reported by a harvest is not handed to shareholders at once.
//! Instead the vault mints itself new shares worth the profit ("locked
//! shares"). Locked shares count towards the external supply, so the
//! price per share does not move at the harvest instant. They are then
//! released linearly until `full_profit_unlock_date`; released shares drop
//! out of the external supply, which raises the price per share smoothly.
//!
//! Released shares are burned lazily by [`ShareState::realize`], which
//! every mutating entry point calls before doing any exchange-rate math.
//! The amount released is always derived from the stream anchor
//! (`last_profit_update`) rather than from the previous realisation, so
//! the cumulative result does not depend on how often realisation runs.
//!
//! A new harvest arriving while a stream is still running merges both
//! streams: the new unlock period is the share-weighted average of the
//! time remaining on the old stream and the full window for the new one.

use soroban_sdk::contracttype;

use crate::error::VaultError;

/// Fixed-point scale of `profit_unlocking_rate`.
pub const UNLOCK_SCALE: i128 = 1_000_000_000_000;

/// Longest streaming window accepted at initialisation (one year).
pub const MAX_PROFIT_UNLOCK_TIME: u64 = 31_556_952;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShareState {
    /// All minted minus burned shares, the vault's own included
    pub raw_total_supply: i128,
    /// Shares held by the vault itself: locked plus released but not yet burned
    pub raw_vault_balance: i128,
    /// Shares released per second, scaled by `UNLOCK_SCALE`
    pub profit_unlocking_rate: i128,
    /// When the current stream is fully released
    pub full_profit_unlock_date: u64,
    /// When the current stream was anchored
    pub last_profit_update: u64,
    /// Shares of the current stream burned since it was anchored
    pub unlocked_since_update: i128,
    /// Timestamp of the latest successful harvest, 0 before the first
    pub last_harvest: u64,
}

impl ShareState {
    /// Shares of the vault balance already released at `now` but not yet burned.
    pub fn unlocked_shares(&self, now: u64) -> i128 {
        if self.full_profit_unlock_date > now {
            let elapsed = now.saturating_sub(self.last_profit_update) as i128;
            let streamed = self.profit_unlocking_rate.saturating_mul(elapsed) / UNLOCK_SCALE;
            streamed
                .saturating_sub(self.unlocked_since_update)
                .clamp(0, self.raw_vault_balance)
        } else if self.full_profit_unlock_date != 0 {
            self.raw_vault_balance
        } else {
            0
        }
    }

    pub fn locked_shares(&self, now: u64) -> i128 {
        self.raw_vault_balance - self.unlocked_shares(now)
    }

    /// Supply used for share/asset conversion: everything except shares
    /// that have already been released.
    pub fn external_total_supply(&self, now: u64) -> i128 {
        self.raw_total_supply - self.unlocked_shares(now)
    }

    /// Burns the shares released up to `now` and returns how many were
    /// burned. Drops back to idle once the stream has fully run out.
    pub fn realize(&mut self, now: u64) -> i128 {
        let unlocked = self.unlocked_shares(now);
        if unlocked > 0 {
            self.raw_vault_balance -= unlocked;
            self.raw_total_supply -= unlocked;
            self.unlocked_since_update += unlocked;
        }
        if now >= self.full_profit_unlock_date && self.is_streaming() {
            self.profit_unlocking_rate = 0;
        }
        unlocked
    }

    /// Mints `new_shares` to the vault and re-anchors the stream at `now`.
    ///
    /// Must run right after [`realize`](Self::realize) at the same `now`,
    /// so the vault balance is exactly the still-locked amount. Does
    /// nothing when streaming is disabled or there is nothing to lock.
    pub fn lock_profit(
        &mut self,
        now: u64,
        new_shares: i128,
        profit_max_unlock_time: u64,
    ) -> Result<(), VaultError> {
        if profit_max_unlock_time == 0 || new_shares <= 0 {
            return Ok(());
        }

        let existing = self.raw_vault_balance;
        let remaining = self.full_profit_unlock_date.saturating_sub(now) as i128;
        let total_locked = existing.checked_add(new_shares).ok_or(VaultError::MathOverflow)?;

        let previously_locked_time = existing
            .checked_mul(remaining)
            .ok_or(VaultError::MathOverflow)?;
        let new_locked_time = new_shares
            .checked_mul(profit_max_unlock_time as i128)
            .ok_or(VaultError::MathOverflow)?;
        let new_period = previously_locked_time
            .checked_add(new_locked_time)
            .ok_or(VaultError::MathOverflow)?
            / total_locked;
        // a tiny lock can average down to zero seconds
        let new_period = new_period.max(1);

        self.profit_unlocking_rate = total_locked
            .checked_mul(UNLOCK_SCALE)
            .ok_or(VaultError::MathOverflow)?
            / new_period;
        self.full_profit_unlock_date = now
            .checked_add(new_period as u64)
            .ok_or(VaultError::MathOverflow)?;
        self.last_profit_update = now;
        self.unlocked_since_update = 0;

        self.raw_vault_balance = total_locked;
        self.raw_total_supply = self
            .raw_total_supply
            .checked_add(new_shares)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    pub fn is_streaming(&self) -> bool {
        self.profit_unlocking_rate > 0
    }
}
