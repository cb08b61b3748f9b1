//! Share ledger.
//!
//! Holder balances live in persistent storage; totals live in
//! [`ShareState`]. Conversions always round in the vault's favour and
//! fall back to 1:1 while no shares exist.

use soroban_sdk::{Address, Env};

use crate::error::VaultError;
use crate::math::{mul_div, Rounding};
use crate::storage;
use crate::streaming::ShareState;

/// Smallest non-zero share supply. Keeps the first depositor from
/// inflating the share price with a dust mint followed by a donation.
pub const MIN_SHARES: i128 = 1_000_000;

pub fn convert_to_shares(
    assets: i128,
    total_assets: i128,
    supply: i128,
    rounding: Rounding,
) -> Result<i128, VaultError> {
    if assets == 0 {
        return Ok(0);
    }
    if supply == 0 {
        return Ok(assets);
    }
    if total_assets == 0 {
        return Ok(0);
    }
    mul_div(assets, supply, total_assets, rounding)
}

pub fn convert_to_assets(
    shares: i128,
    total_assets: i128,
    supply: i128,
    rounding: Rounding,
) -> Result<i128, VaultError> {
    if shares == 0 {
        return Ok(0);
    }
    if supply == 0 {
        return Ok(shares);
    }
    mul_div(shares, total_assets, supply, rounding)
}

/// Both the raw supply and the holders' part of it must be 0 or at least
/// `MIN_SHARES`. The vault's own shares are burned as they unlock, so a
/// holder supply in the dust band would eventually become the raw supply.
pub fn check_supply_floor(state: &ShareState) -> Result<(), VaultError> {
    let holder_supply = state.raw_total_supply - state.raw_vault_balance;
    for supply in [state.raw_total_supply, holder_supply] {
        if supply != 0 && supply < MIN_SHARES {
            return Err(VaultError::DustSupplyViolation);
        }
    }
    Ok(())
}

pub fn mint(
    env: &Env,
    state: &mut ShareState,
    to: &Address,
    shares: i128,
) -> Result<(), VaultError> {
    let balance = storage::read_balance(env, to)
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    state.raw_total_supply = state
        .raw_total_supply
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    storage::write_balance(env, to, balance);
    Ok(())
}

pub fn burn(
    env: &Env,
    state: &mut ShareState,
    from: &Address,
    shares: i128,
) -> Result<(), VaultError> {
    let balance = storage::read_balance(env, from);
    if balance < shares {
        return Err(VaultError::InsufficientShares);
    }
    state.raw_total_supply -= shares;
    storage::write_balance(env, from, balance - shares);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, shares: i128) -> Result<(), VaultError> {
    let from_balance = storage::read_balance(env, from);
    if from_balance < shares {
        return Err(VaultError::InsufficientShares);
    }
    storage::write_balance(env, from, from_balance - shares);
    let to_balance = storage::read_balance(env, to)
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    storage::write_balance(env, to, to_balance);
    Ok(())
}
