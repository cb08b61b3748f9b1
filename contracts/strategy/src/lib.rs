//! # Booster Strategy Contract
//!
//! Asset custody and yield generation for one stream vault.
//!
//! The strategy stakes every asset it receives into a Convex-style booster
//! pool. On harvest it claims the booster rewards, pushes them to its
//! harvester together with the fee configuration, and re-stakes whatever
//! asset the harvester sends back. To the vault it is opaque: the vault
//! only sees `total_assets`, `deposit`, `withdraw` and `harvest`.
//!
//! ## Binding
//!
//! ```text
//! Strategy.initialize() → Harvester.set_strategy(strategy)   (once)
//! Vault.initialize()    → Strategy.set_vault(vault)          (once)
//! ```
//!
//! Both bindings rely on Soroban authorising a contract for the calls it
//! makes directly, so nobody else can claim the slot.
//!
//! ## Storage Layout
//!
//! Instance storage only: `Vault`, `Asset`, `Booster`, `PoolId`,
//! `Harvester`, `RewardTokens`, `Fees`.

#![no_std]

mod error;
mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Vec};
use vault_common::{
    BoosterClient, FeeConfig, HarvestSettlement, HarvesterClient, HookConfig, MAX_CALLER_FEE_BPS,
    MAX_PLATFORM_FEE_BPS,
};

pub use error::StrategyError;
pub use events::{
    BoosterMigratedEvent, FeesUpdatedEvent, HarvesterUpdatedEvent, StrategyHarvestEvent,
};
pub use storage::DataKey;


// ============================================================================
// CONTRACT
// ============================================================================

#[contract]
pub struct BoosterStrategy;

#[contractimpl]
impl BoosterStrategy {

    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// Configures the strategy and binds it to `harvester`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `asset` - Vault asset (the booster's deposit token)
    /// * `booster` - Booster contract the asset is staked in
    /// * `pool_id` - Booster pool for `asset`
    /// * `harvester` - Harvester converting rewards back into `asset`
    /// * `reward_tokens` - Tokens the booster pays as base rewards
    /// * `fees` - Treasury and fee rates
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called twice
    /// - `FeeTooHigh` if a fee exceeds its cap
    pub fn initialize(
        env: Env,
        asset: Address,
        booster: Address,
        pool_id: u32,
        harvester: Address,
        reward_tokens: Vec<Address>,
        fees: FeeConfig,
    ) -> Result<(), StrategyError> {
        if storage::is_initialized(&env) {
            return Err(StrategyError::AlreadyInitialized);
        }
        Self::require_valid_fees(fees.platform_fee_bps, fees.caller_fee_bps)?;

        env.storage().instance().set(&DataKey::Asset, &asset);
        env.storage().instance().set(&DataKey::Harvester, &harvester);
        env.storage().instance().set(&DataKey::RewardTokens, &reward_tokens);
        storage::set_booster(&env, &booster, pool_id);
        storage::set_fees(&env, &fees);

        HarvesterClient::new(&env, &harvester).set_strategy(&env.current_contract_address());
        storage::bump(&env);
        Ok(())
    }

    /// Binds the vault. Succeeds once; the vault calls it from its own
    /// `initialize`.
    pub fn set_vault(env: Env, vault: Address) -> Result<(), StrategyError> {
        vault.require_auth();
        if storage::vault(&env).is_some() {
            return Err(StrategyError::VaultAlreadySet);
        }
        env.storage().instance().set(&DataKey::Vault, &vault);
        Ok(())
    }


    // ==========================================================================
    // VAULT INTERFACE
    // ==========================================================================

    /// Staked plus idle asset.
    pub fn total_assets(env: Env) -> Result<i128, StrategyError> {
        let (booster, pool_id) = storage::booster(&env)?;
        let this = env.current_contract_address();
        let staked = BoosterClient::new(&env, &booster).staked_balance(&pool_id, &this);
        Ok(staked + Self::idle(&env)?)
    }

    /// Stakes `amount` the vault has transferred in.
    pub fn deposit(env: Env, amount: i128) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        Self::require_positive(amount)?;
        Self::stake(&env, amount)
    }

    /// Pays `amount` of asset to `recipient`, drawing on idle balance first
    /// and unstaking only the shortfall.
    ///
    /// # Errors
    /// - `InsufficientAssets` if staked plus idle cannot cover `amount`
    pub fn withdraw(env: Env, amount: i128, recipient: Address) -> Result<i128, StrategyError> {
        Self::require_vault(&env)?;
        Self::require_positive(amount)?;

        let this = env.current_contract_address();
        let idle = Self::idle(&env)?;
        if idle < amount {
            let shortfall = amount - idle;
            let (booster, pool_id) = storage::booster(&env)?;
            let booster = BoosterClient::new(&env, &booster);
            if booster.staked_balance(&pool_id, &this) < shortfall {
                return Err(StrategyError::InsufficientAssets);
            }
            booster.withdraw(&pool_id, &this, &shortfall, &this);
        }

        token::Client::new(&env, &storage::asset(&env)?).transfer(&this, &recipient, &amount);
        Ok(amount)
    }

    /// Claims booster rewards, runs them through the harvester and re-stakes
    /// the asset it returns.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `caller` - Receives the caller fee
    /// * `min_amount_out` - Least asset the harvester must return
    /// * `extra_reward_tokens` - Non-base reward tokens to send along
    /// * `reward_hook_calldata` / `target_hook_calldata` / `harvester_calldata` -
    ///   Opaque payloads passed through to the harvester
    ///
    /// # Returns
    /// The harvester's settlement.
    ///
    /// # Events
    /// Emits `StrategyHarvestEvent`
    pub fn harvest(
        env: Env,
        caller: Address,
        min_amount_out: i128,
        extra_reward_tokens: Vec<Address>,
        reward_hook_calldata: Bytes,
        target_hook_calldata: Bytes,
        harvester_calldata: Bytes,
    ) -> Result<HarvestSettlement, StrategyError> {
        Self::require_vault(&env)?;
        storage::bump(&env);

        let this = env.current_contract_address();
        let asset = storage::asset(&env)?;
        let (booster, pool_id) = storage::booster(&env)?;
        BoosterClient::new(&env, &booster).claim_rewards(&pool_id, &this);

        let harvester = storage::harvester(&env)?;
        let reward_tokens = storage::reward_tokens(&env)?;
        for token_id in reward_tokens.iter().chain(extra_reward_tokens.iter()) {
            if token_id == asset {
                continue;
            }
            let reward = token::Client::new(&env, &token_id);
            let balance = reward.balance(&this);
            if balance > 0 {
                reward.transfer(&this, &harvester, &balance);
            }
        }

        let settlement = HarvesterClient::new(&env, &harvester).harvest(
            &caller,
            &reward_tokens,
            &extra_reward_tokens,
            &min_amount_out,
            &storage::fees(&env)?,
            &reward_hook_calldata,
            &target_hook_calldata,
            &harvester_calldata,
        );

        let restaked = Self::idle(&env)?;
        if restaked > 0 {
            Self::stake(&env, restaked)?;
        }

        log!(&env, "strategy harvest: net, restaked", settlement.net, restaked);
        events::harvested(&env, settlement.clone(), restaked);
        Ok(settlement)
    }


    // ==========================================================================
    // CONFIGURATION (VAULT ONLY)
    // ==========================================================================

    /// # Errors
    /// - `FeeTooHigh` above `MAX_PLATFORM_FEE_BPS`
    pub fn set_platform_fee(env: Env, fee_bps: u32) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        let mut fees = storage::fees(&env)?;
        Self::require_valid_fees(fee_bps, fees.caller_fee_bps)?;
        fees.platform_fee_bps = fee_bps;
        Self::store_fees(&env, fees);
        Ok(())
    }

    /// # Errors
    /// - `FeeTooHigh` above `MAX_CALLER_FEE_BPS`
    pub fn set_caller_fee(env: Env, fee_bps: u32) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        let mut fees = storage::fees(&env)?;
        Self::require_valid_fees(fees.platform_fee_bps, fee_bps)?;
        fees.caller_fee_bps = fee_bps;
        Self::store_fees(&env, fees);
        Ok(())
    }

    pub fn set_treasury(env: Env, treasury: Address) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        let mut fees = storage::fees(&env)?;
        fees.treasury = treasury;
        Self::store_fees(&env, fees);
        Ok(())
    }

    pub fn set_extra_reward_hook(env: Env, hook: Option<Address>) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        HarvesterClient::new(&env, &storage::harvester(&env)?).set_extra_reward_hook(&hook);
        Ok(())
    }

    pub fn set_target_hook(env: Env, hook: Option<Address>) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;
        HarvesterClient::new(&env, &storage::harvester(&env)?).set_target_hook(&hook);
        Ok(())
    }

    /// Replaces the harvester.
    ///
    /// An unbound `new_harvester` is bound to this strategy first. The old
    /// harvester sends its balances of `migration_tokens` to the new one and
    /// hands over its hook configuration.
    ///
    /// # Errors
    /// - `HarvesterNotBound` if `new_harvester` serves another strategy
    ///
    /// # Events
    /// Emits `HarvesterUpdatedEvent`
    pub fn update_harvester(
        env: Env,
        new_harvester: Address,
        migration_tokens: Vec<Address>,
    ) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;

        let this = env.current_contract_address();
        let old_harvester = storage::harvester(&env)?;
        let new_client = HarvesterClient::new(&env, &new_harvester);
        match new_client.strategy() {
            None => new_client.set_strategy(&this),
            Some(strategy) if strategy == this => {}
            Some(_) => return Err(StrategyError::HarvesterNotBound),
        }

        let hooks: HookConfig =
            HarvesterClient::new(&env, &old_harvester).migrate(&new_harvester, &migration_tokens);
        new_client.install_hooks(&hooks);

        env.storage().instance().set(&DataKey::Harvester, &new_harvester);
        log!(&env, "harvester migrated", old_harvester, new_harvester);
        events::harvester_updated(&env, old_harvester, new_harvester);
        Ok(())
    }

    /// Moves the whole stake to `new_pool_id` on `new_booster`.
    ///
    /// # Errors
    /// - `BoosterPoolActive` unless the current pool has been shut down
    ///
    /// # Events
    /// Emits `BoosterMigratedEvent`
    pub fn migrate_booster(
        env: Env,
        new_booster: Address,
        new_pool_id: u32,
    ) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;

        let this = env.current_contract_address();
        let (old_booster, old_pool_id) = storage::booster(&env)?;
        let old_client = BoosterClient::new(&env, &old_booster);
        if !old_client.is_shutdown(&old_pool_id) {
            return Err(StrategyError::BoosterPoolActive);
        }

        let staked = old_client.staked_balance(&old_pool_id, &this);
        if staked > 0 {
            old_client.withdraw(&old_pool_id, &this, &staked, &this);
        }

        storage::set_booster(&env, &new_booster, new_pool_id);
        let amount = Self::idle(&env)?;
        if amount > 0 {
            Self::stake(&env, amount)?;
        }

        events::booster_migrated(
            &env,
            BoosterMigratedEvent { old_booster, old_pool_id, new_booster, new_pool_id, amount },
        );
        Ok(())
    }

    /// Sends the full balance of each listed token to `recipient`.
    ///
    /// # Errors
    /// - `ProtectedToken` if the list contains the vault asset
    pub fn forward_tokens(
        env: Env,
        tokens: Vec<Address>,
        recipient: Address,
    ) -> Result<(), StrategyError> {
        Self::require_vault(&env)?;

        let this = env.current_contract_address();
        let asset = storage::asset(&env)?;
        for token_id in tokens.iter() {
            if token_id == asset {
                return Err(StrategyError::ProtectedToken);
            }
            let client = token::Client::new(&env, &token_id);
            let balance = client.balance(&this);
            if balance > 0 {
                client.transfer(&this, &recipient, &balance);
            }
        }
        Ok(())
    }


    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    pub fn vault(env: Env) -> Option<Address> {
        storage::vault(&env)
    }

    pub fn asset(env: Env) -> Result<Address, StrategyError> {
        storage::asset(&env)
    }

    pub fn booster(env: Env) -> Result<Address, StrategyError> {
        Ok(storage::booster(&env)?.0)
    }

    pub fn pool_id(env: Env) -> Result<u32, StrategyError> {
        Ok(storage::booster(&env)?.1)
    }

    pub fn harvester(env: Env) -> Result<Address, StrategyError> {
        storage::harvester(&env)
    }

    pub fn reward_tokens(env: Env) -> Result<Vec<Address>, StrategyError> {
        storage::reward_tokens(&env)
    }

    pub fn platform_fee(env: Env) -> Result<u32, StrategyError> {
        Ok(storage::fees(&env)?.platform_fee_bps)
    }

    pub fn caller_fee(env: Env) -> Result<u32, StrategyError> {
        Ok(storage::fees(&env)?.caller_fee_bps)
    }

    pub fn treasury(env: Env) -> Result<Address, StrategyError> {
        Ok(storage::fees(&env)?.treasury)
    }
}


// ============================================================================
// INTERNAL HELPERS
// ============================================================================

impl BoosterStrategy {
    fn require_vault(env: &Env) -> Result<(), StrategyError> {
        let vault = storage::vault(env).ok_or(StrategyError::VaultNotSet)?;
        vault.require_auth();
        Ok(())
    }

    #[inline]
    fn require_positive(amount: i128) -> Result<(), StrategyError> {
        if amount <= 0 {
            return Err(StrategyError::ZeroAmount);
        }
        Ok(())
    }

    fn require_valid_fees(platform_fee_bps: u32, caller_fee_bps: u32) -> Result<(), StrategyError> {
        if platform_fee_bps > MAX_PLATFORM_FEE_BPS || caller_fee_bps > MAX_CALLER_FEE_BPS {
            return Err(StrategyError::FeeTooHigh);
        }
        Ok(())
    }

    fn store_fees(env: &Env, fees: FeeConfig) {
        storage::set_fees(env, &fees);
        events::fees_updated(env, fees.platform_fee_bps, fees.caller_fee_bps, fees.treasury);
    }

    fn idle(env: &Env) -> Result<i128, StrategyError> {
        let asset = storage::asset(env)?;
        Ok(token::Client::new(env, &asset).balance(&env.current_contract_address()))
    }

    /// Pushes `amount` of idle asset into the current booster pool.
    fn stake(env: &Env, amount: i128) -> Result<(), StrategyError> {
        let this = env.current_contract_address();
        let (booster, pool_id) = storage::booster(env)?;
        token::Client::new(env, &storage::asset(env)?).transfer(&this, &booster, &amount);
        BoosterClient::new(env, &booster).deposit(&pool_id, &this, &amount);
        Ok(())
    }
}


// ============================================================================
// TESTS
// ============================================================================

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
