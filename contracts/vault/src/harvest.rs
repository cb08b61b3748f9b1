//! Harvest orchestration.
//!
//! One harvest is a single atomic settlement: realise released shares,
//! let the strategy claim and convert rewards (fees are paid downstream),
//! measure how much the strategy's total assets grew, and lock that growth
//! into the profit stream. Any failure downstream, slippage included,
//! aborts the whole invocation.

use soroban_sdk::{log, Address, Bytes, Env, Vec};
use vault_common::StrategyClient;

use crate::error::VaultError;
use crate::events::{self, HarvestEvent};
use crate::ledger;
use crate::math::Rounding;
use crate::storage;

pub struct HarvestRequest {
    /// Receives the caller fee
    pub caller: Address,
    /// Minimum asset the harvester must deliver
    pub min_amount_out: i128,
    pub extra_reward_tokens: Vec<Address>,
    pub reward_hook_calldata: Bytes,
    pub target_hook_calldata: Bytes,
    pub harvester_calldata: Bytes,
}

/// Runs a harvest and returns the observed profit in assets.
pub fn settle(env: &Env, request: HarvestRequest) -> Result<i128, VaultError> {
    let config = storage::read_config(env)?;
    let now = env.ledger().timestamp();

    let mut state = storage::read_state(env);
    let realized_shares = state.realize(now);
    if state.raw_total_supply == 0 {
        return Err(VaultError::InsufficientSupply);
    }

    let strategy = StrategyClient::new(env, &config.strategy);
    let total_before = strategy.total_assets();
    let settlement = strategy.harvest(
        &request.caller,
        &request.min_amount_out,
        &request.extra_reward_tokens,
        &request.reward_hook_calldata,
        &request.target_hook_calldata,
        &request.harvester_calldata,
    );
    let total_after = strategy.total_assets();

    // the strategy's own figure is informational; only observed growth is streamed
    let profit = total_after
        .checked_sub(total_before)
        .ok_or(VaultError::MathOverflow)?
        .max(0);

    let locked_shares = if config.profit_max_unlock_time == 0 {
        0
    } else {
        ledger::convert_to_shares(
            profit,
            total_before,
            state.external_total_supply(now),
            Rounding::Down,
        )?
    };
    state.lock_profit(now, locked_shares, config.profit_max_unlock_time)?;
    state.last_harvest = now;
    ledger::check_supply_floor(&state)?;
    storage::write_state(env, &state);

    log!(
        env,
        "harvest settled: profit, locked shares, unlock date",
        profit,
        locked_shares,
        state.full_profit_unlock_date
    );

    events::harvest(
        env,
        HarvestEvent {
            caller: request.caller,
            gross: settlement.gross,
            platform_fee: settlement.platform_fee,
            caller_fee: settlement.caller_fee,
            net: settlement.net,
            profit,
            locked_shares,
            realized_shares,
            full_profit_unlock_date: state.full_profit_unlock_date,
        },
    );

    Ok(profit)
}
