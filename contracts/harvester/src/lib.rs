//! # Direct Harvester Contract
//!
//! Turns a strategy's reward tokens into the vault asset and settles the
//! harvest fees on the way.
//!
//! ## Harvest Flow
//!
//! ```text
//! extra reward tokens ─▶ extra reward hook ─┐
//! base reward tokens  ─▶ swap router ───────┴─▶ fee token (gross)
//!                                               │
//!                      platform fee ─▶ treasury ┤
//!                      caller fee   ─▶ caller   ┤
//!                                               ▼
//!                                    net ─▶ target hook ─▶ asset ─▶ strategy
//! ```
//!
//! Every conversion step is push-based: tokens are transferred to the
//! router or hook first, which then sends its proceeds back here. Soroban
//! does not allow a contract to be re-entered while on the call stack, so
//! a hook can never pull funds from the harvester itself.
//!
//! ## Storage Layout
//!
//! Instance storage only: `Strategy`, `Asset`, `FeeToken`, `Router`,
//! `TargetHook`, `ExtraRewardHook`.

#![no_std]

mod error;
mod storage;

use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, token, Address, Bytes, Env, Vec,
};
use vault_common::{
    split_harvest, FeeConfig, HarvestSettlement, HookClient, HookConfig, SwapRouterClient,
};

pub use error::HarvesterError;
pub use storage::DataKey;

/// # Topics
/// - `SymbolShort("harvest")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvesterSettledEvent {
    pub caller: Address,
    pub treasury: Address,
    pub settlement: HarvestSettlement,
}

/// # Topics
/// - `SymbolShort("migrate")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvesterMigratedEvent {
    pub new_harvester: Address,
    pub tokens: Vec<Address>,
}


// ============================================================================
// CONTRACT
// ============================================================================

#[contract]
pub struct DirectHarvester;

#[contractimpl]
impl DirectHarvester {

    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `asset` - Vault asset delivered to the strategy
    /// * `fee_token` - Token rewards are swapped into and fees are paid in;
    ///   may equal `asset`, in which case no target hook is needed
    /// * `router` - Swap router for base reward tokens
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called twice
    pub fn initialize(
        env: Env,
        asset: Address,
        fee_token: Address,
        router: Address,
    ) -> Result<(), HarvesterError> {
        if env.storage().instance().has(&DataKey::Asset) {
            return Err(HarvesterError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Asset, &asset);
        env.storage().instance().set(&DataKey::FeeToken, &fee_token);
        env.storage().instance().set(&DataKey::Router, &router);
        storage::bump(&env);
        Ok(())
    }

    /// Binds the strategy. Succeeds once and needs the strategy's own
    /// authorisation.
    pub fn set_strategy(env: Env, strategy: Address) -> Result<(), HarvesterError> {
        strategy.require_auth();
        if storage::strategy(&env).is_some() {
            return Err(HarvesterError::StrategyAlreadySet);
        }
        env.storage().instance().set(&DataKey::Strategy, &strategy);
        Ok(())
    }


    // ==========================================================================
    // HARVEST
    // ==========================================================================

    /// Converts the reward balances held here into the asset, pays the
    /// fees and sends the net asset to the strategy.
    ///
    /// The strategy transfers the reward tokens in before calling.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `caller` - Receives the caller fee
    /// * `reward_tokens` - Base reward tokens, swapped through the router
    /// * `extra_reward_tokens` - Converted by the extra reward hook, if one is set
    /// * `min_amount_out` - Least asset that must reach the strategy
    /// * `fees` - Fee rates and treasury
    /// * `reward_hook_calldata` / `target_hook_calldata` - Hook payloads
    /// * `harvester_calldata` - Route payload for the swap router
    ///
    /// # Returns
    /// `gross` and fees in the fee token, `net` in the asset.
    ///
    /// # Errors
    /// - `SlippageExceeded` if less than `min_amount_out` is delivered
    /// - `NoHookSet` if the net needs converting and no target hook exists
    /// - `HookFailed` if a hook returns `false`
    /// - `InvalidFeeConfig` if the fee rates exceed 100%
    pub fn harvest(
        env: Env,
        caller: Address,
        reward_tokens: Vec<Address>,
        extra_reward_tokens: Vec<Address>,
        min_amount_out: i128,
        fees: FeeConfig,
        reward_hook_calldata: Bytes,
        target_hook_calldata: Bytes,
        harvester_calldata: Bytes,
    ) -> Result<HarvestSettlement, HarvesterError> {
        let strategy = Self::require_strategy(&env)?;
        storage::bump(&env);

        let this = env.current_contract_address();
        let asset = storage::read_address(&env, &DataKey::Asset)?;
        let fee_token = storage::read_address(&env, &DataKey::FeeToken)?;
        let hooks = storage::hooks(&env);

        if let Some(hook) = hooks.extra_reward_hook {
            let mut sent = false;
            for token_id in extra_reward_tokens.iter() {
                sent |= Self::push_balance(&env, &token_id, &hook) > 0;
            }
            if sent && !HookClient::new(&env, &hook).execute(&this, &reward_hook_calldata) {
                return Err(HarvesterError::HookFailed);
            }
        }

        let router = storage::read_address(&env, &DataKey::Router)?;
        let router_client = SwapRouterClient::new(&env, &router);
        for token_id in reward_tokens.iter() {
            if token_id == fee_token {
                continue;
            }
            let amount = Self::push_balance(&env, &token_id, &router);
            if amount > 0 {
                router_client.swap(&token_id, &fee_token, &amount, &this, &harvester_calldata);
            }
        }

        let fee_client = token::Client::new(&env, &fee_token);
        let gross = fee_client.balance(&this);
        let split = split_harvest(gross, fees.platform_fee_bps, fees.caller_fee_bps)
            .ok_or(HarvesterError::InvalidFeeConfig)?;
        if split.platform_fee > 0 {
            fee_client.transfer(&this, &fees.treasury, &split.platform_fee);
        }
        if split.caller_fee > 0 {
            fee_client.transfer(&this, &caller, &split.caller_fee);
        }

        if fee_token != asset && split.net > 0 {
            let hook = hooks.target_hook.ok_or(HarvesterError::NoHookSet)?;
            fee_client.transfer(&this, &hook, &split.net);
            if !HookClient::new(&env, &hook).execute(&this, &target_hook_calldata) {
                return Err(HarvesterError::HookFailed);
            }
        }

        let asset_client = token::Client::new(&env, &asset);
        let delivered = asset_client.balance(&this);
        if delivered < min_amount_out {
            return Err(HarvesterError::SlippageExceeded);
        }
        if delivered > 0 {
            asset_client.transfer(&this, &strategy, &delivered);
        }

        let settlement = HarvestSettlement {
            gross,
            platform_fee: split.platform_fee,
            caller_fee: split.caller_fee,
            net: delivered,
        };
        log!(&env, "harvester settled: gross, net", gross, delivered);
        env.events().publish(
            (symbol_short!("harvest"),),
            HarvesterSettledEvent {
                caller,
                treasury: fees.treasury,
                settlement: settlement.clone(),
            },
        );
        Ok(settlement)
    }


    // ==========================================================================
    // CONFIGURATION (STRATEGY ONLY)
    // ==========================================================================

    pub fn set_target_hook(env: Env, hook: Option<Address>) -> Result<(), HarvesterError> {
        Self::require_strategy(&env)?;
        storage::set_target_hook(&env, &hook);
        Ok(())
    }

    pub fn set_extra_reward_hook(env: Env, hook: Option<Address>) -> Result<(), HarvesterError> {
        Self::require_strategy(&env)?;
        storage::set_extra_reward_hook(&env, &hook);
        Ok(())
    }

    /// Adopts the hook configuration handed over by a predecessor.
    pub fn install_hooks(env: Env, hooks: HookConfig) -> Result<(), HarvesterError> {
        Self::require_strategy(&env)?;
        storage::set_target_hook(&env, &hooks.target_hook);
        storage::set_extra_reward_hook(&env, &hooks.extra_reward_hook);
        Ok(())
    }

    /// Sends the full balance of each of `tokens` to `new_harvester`,
    /// clears this harvester's hooks and returns them for the successor.
    pub fn migrate(
        env: Env,
        new_harvester: Address,
        tokens: Vec<Address>,
    ) -> Result<HookConfig, HarvesterError> {
        Self::require_strategy(&env)?;

        for token_id in tokens.iter() {
            Self::push_balance(&env, &token_id, &new_harvester);
        }

        let hooks = storage::hooks(&env);
        storage::set_target_hook(&env, &None);
        storage::set_extra_reward_hook(&env, &None);

        env.events().publish(
            (symbol_short!("migrate"),),
            HarvesterMigratedEvent { new_harvester, tokens },
        );
        Ok(hooks)
    }


    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    pub fn strategy(env: Env) -> Option<Address> {
        storage::strategy(&env)
    }

    pub fn hooks(env: Env) -> HookConfig {
        storage::hooks(&env)
    }

    pub fn asset(env: Env) -> Result<Address, HarvesterError> {
        storage::read_address(&env, &DataKey::Asset)
    }

    pub fn fee_token(env: Env) -> Result<Address, HarvesterError> {
        storage::read_address(&env, &DataKey::FeeToken)
    }

    pub fn router(env: Env) -> Result<Address, HarvesterError> {
        storage::read_address(&env, &DataKey::Router)
    }
}

impl DirectHarvester {
    fn require_strategy(env: &Env) -> Result<Address, HarvesterError> {
        let strategy = storage::strategy(env).ok_or(HarvesterError::StrategyNotSet)?;
        strategy.require_auth();
        Ok(strategy)
    }

    /// Transfers this contract's whole balance of `token_id` to `to` and
    /// returns the amount moved.
    fn push_balance(env: &Env, token_id: &Address, to: &Address) -> i128 {
        let this = env.current_contract_address();
        let client = token::Client::new(env, token_id);
        let balance = client.balance(&this);
        if balance > 0 {
            client.transfer(&this, to, &balance);
        }
        balance
    }
}

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test;
