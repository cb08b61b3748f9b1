use soroban_sdk::{contracttype, Address, Env, Vec};
use vault_common::FeeConfig;

use crate::error::StrategyError;

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// All strategy state lives in instance storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Vault allowed to drive the strategy, set once
    Vault,
    Asset,
    Booster,
    PoolId,
    Harvester,
    /// Base reward tokens the booster pays out
    RewardTokens,
    /// Treasury and fee rates handed to the harvester
    Fees,
}

pub fn bump(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Asset)
}

pub fn get<V>(env: &Env, key: &DataKey) -> Result<V, StrategyError>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .instance()
        .get(key)
        .ok_or(StrategyError::NotInitialized)
}

pub fn vault(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Vault)
}

pub fn asset(env: &Env) -> Result<Address, StrategyError> {
    get(env, &DataKey::Asset)
}

pub fn booster(env: &Env) -> Result<(Address, u32), StrategyError> {
    Ok((get(env, &DataKey::Booster)?, get(env, &DataKey::PoolId)?))
}

pub fn set_booster(env: &Env, booster: &Address, pool_id: u32) {
    env.storage().instance().set(&DataKey::Booster, booster);
    env.storage().instance().set(&DataKey::PoolId, &pool_id);
}

pub fn harvester(env: &Env) -> Result<Address, StrategyError> {
    get(env, &DataKey::Harvester)
}

pub fn reward_tokens(env: &Env) -> Result<Vec<Address>, StrategyError> {
    get(env, &DataKey::RewardTokens)
}

pub fn fees(env: &Env) -> Result<FeeConfig, StrategyError> {
    get(env, &DataKey::Fees)
}

pub fn set_fees(env: &Env, fees: &FeeConfig) {
    env.storage().instance().set(&DataKey::Fees, fees);
}
