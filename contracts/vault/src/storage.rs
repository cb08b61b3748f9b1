//! Storage layout.
//!
//! ### Instance storage
//! - `Config`: immutable [`VaultConfig`] written by `initialize`
//! - `State`: the mutable [`ShareState`] ledger and stream anchor
//! - `Version`: contract version for upgrade tracking
//!
//! ### Persistent storage
//! - `Balance(holder)`: share balance of each holder (the vault's own
//!   balance lives in `ShareState::raw_vault_balance`)
//! - `Role(role, account)`: access-control assignments

use soroban_sdk::{contracttype, Address, Env, String};

use crate::access::Role;
use crate::error::VaultError;
use crate::streaming::ShareState;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const CONTRACT_VERSION: u32 = 1;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Immutable vault configuration
    Config,
    /// Share ledger totals and the profit stream anchor
    State,
    /// Share balance of a holder
    Balance(Address),
    /// Whether `Address` holds `Role`
    Role(Role, Address),
    Version,
}

/// Settings fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Token accepted for deposits and paid out on withdrawals
    pub asset: Address,
    /// Strategy holding every asset of the vault
    pub strategy: Address,
    /// Streaming window in seconds; 0 disables streaming
    pub profit_max_unlock_time: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<VaultConfig, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VaultError::NotInitialized)
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::Version, &CONTRACT_VERSION);
}

pub fn read_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Version)
        .unwrap_or(CONTRACT_VERSION)
}

pub fn read_state(env: &Env) -> ShareState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn write_state(env: &Env, state: &ShareState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
