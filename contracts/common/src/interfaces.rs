//! Cross-contract interfaces.
//!
//! Soroban does not allow a contract to be re-entered while it is on the
//! call stack, so every seam here is push-based: tokens are transferred to
//! the callee first and the callee is then told what to do with them.

use soroban_sdk::{contractclient, Address, Bytes, Env, Vec};

use crate::types::{FeeConfig, HarvestSettlement, HookConfig};

/// Asset custody and yield generation unit behind a vault.
#[contractclient(name = "StrategyClient")]
pub trait StrategyInterface {
    /// Assets under management: staked plus idle.
    fn total_assets(env: Env) -> i128;

    /// Stakes `amount` of asset the vault has already transferred in.
    fn deposit(env: Env, amount: i128);

    /// Pays `amount` of asset to `recipient`. Returns the amount paid.
    fn withdraw(env: Env, amount: i128, recipient: Address) -> i128;

    /// Claims rewards, runs them through the harvester and re-stakes the
    /// net asset. `caller` receives the caller fee.
    fn harvest(
        env: Env,
        caller: Address,
        min_amount_out: i128,
        extra_reward_tokens: Vec<Address>,
        reward_hook_calldata: Bytes,
        target_hook_calldata: Bytes,
        harvester_calldata: Bytes,
    ) -> HarvestSettlement;

    fn set_vault(env: Env, vault: Address);
    fn set_platform_fee(env: Env, fee_bps: u32);
    fn set_caller_fee(env: Env, fee_bps: u32);
    fn set_treasury(env: Env, treasury: Address);
    fn set_extra_reward_hook(env: Env, hook: Option<Address>);
    fn set_target_hook(env: Env, hook: Option<Address>);
    fn update_harvester(env: Env, new_harvester: Address, migration_tokens: Vec<Address>);
    fn migrate_booster(env: Env, new_booster: Address, new_pool_id: u32);
    fn forward_tokens(env: Env, tokens: Vec<Address>, recipient: Address);
}

/// Converts reward tokens into the vault asset and settles fees.
#[contractclient(name = "HarvesterClient")]
pub trait HarvesterInterface {
    fn harvest(
        env: Env,
        caller: Address,
        reward_tokens: Vec<Address>,
        extra_reward_tokens: Vec<Address>,
        min_amount_out: i128,
        fees: FeeConfig,
        reward_hook_calldata: Bytes,
        target_hook_calldata: Bytes,
        harvester_calldata: Bytes,
    ) -> HarvestSettlement;

    fn set_strategy(env: Env, strategy: Address);
    fn strategy(env: Env) -> Option<Address>;
    fn hooks(env: Env) -> HookConfig;
    fn set_target_hook(env: Env, hook: Option<Address>);
    fn set_extra_reward_hook(env: Env, hook: Option<Address>);
    fn install_hooks(env: Env, hooks: HookConfig);

    /// Sends the listed token balances to `new_harvester` and returns the
    /// hook configuration for it to adopt.
    fn migrate(env: Env, new_harvester: Address, tokens: Vec<Address>) -> HookConfig;
}

/// External staking venue (Convex-style booster).
#[contractclient(name = "BoosterClient")]
pub trait BoosterInterface {
    /// Credits `amount` already transferred in by `from` to its stake in `pool_id`.
    fn deposit(env: Env, pool_id: u32, from: Address, amount: i128);
    fn withdraw(env: Env, pool_id: u32, from: Address, amount: i128, recipient: Address);
    fn staked_balance(env: Env, pool_id: u32, account: Address) -> i128;
    /// Sends every accrued reward token for `account` to `account`.
    fn claim_rewards(env: Env, pool_id: u32, account: Address);
    fn is_shutdown(env: Env, pool_id: u32) -> bool;
}

#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Swaps `amount_in` of `token_in` already held by the router and pays
    /// the proceeds to `recipient`. `route` is router specific.
    fn swap(
        env: Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        recipient: Address,
        route: Bytes,
    ) -> i128;
}

/// Pluggable conversion step. The harvester transfers tokens to the hook
/// and then invokes it; the hook returns its proceeds to `caller`.
#[contractclient(name = "HookClient")]
pub trait HookInterface {
    fn execute(env: Env, caller: Address, calldata: Bytes) -> bool;
}
