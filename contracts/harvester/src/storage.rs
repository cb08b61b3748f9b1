use soroban_sdk::{contracttype, Address, Env};
use vault_common::HookConfig;

use crate::error::HarvesterError;

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Strategy served by this harvester, set once
    Strategy,
    /// Vault asset delivered back to the strategy
    Asset,
    /// Token rewards are swapped into and fees are paid in
    FeeToken,
    Router,
    TargetHook,
    ExtraRewardHook,
}

pub fn bump(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_address(env: &Env, key: &DataKey) -> Result<Address, HarvesterError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(HarvesterError::NotInitialized)
}

pub fn strategy(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Strategy)
}

pub fn hooks(env: &Env) -> HookConfig {
    HookConfig {
        target_hook: env.storage().instance().get(&DataKey::TargetHook),
        extra_reward_hook: env.storage().instance().get(&DataKey::ExtraRewardHook),
    }
}

fn write_hook(env: &Env, key: DataKey, hook: &Option<Address>) {
    match hook {
        Some(hook) => env.storage().instance().set(&key, hook),
        None => env.storage().instance().remove(&key),
    }
}

pub fn set_target_hook(env: &Env, hook: &Option<Address>) {
    write_hook(env, DataKey::TargetHook, hook);
}

pub fn set_extra_reward_hook(env: &Env, hook: &Option<Address>) {
    write_hook(env, DataKey::ExtraRewardHook, hook);
}
