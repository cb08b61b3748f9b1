//! # Stream Vault Contract
//!
//! An ERC-4626 style share vault whose harvested profit is streamed to
//! shareholders over time instead of being credited at once.
//!
//! ## Architecture Overview
//!
//! The vault itself never holds the asset. Deposits go straight to a
//! single, immutable strategy contract, which stakes them into an external
//! booster and periodically harvests rewards through a harvester. The
//! vault keeps the share ledger and decides how harvested profit reaches
//! shareholders.
//!
//! ## Share Accounting Model
//!
//! - `shares = assets * external_supply / total_assets`
//! - `assets = shares * total_assets / external_supply`
//! - rounding always favours the vault (deposit and redeem round down,
//!   mint and withdraw round up)
//! - with no shares outstanding the rate is 1:1
//! - supply is either zero or at least [`MIN_SHARES`]
//!
//! ## Profit Streaming
//!
//! A harvest mints the vault new "locked" shares worth the observed
//! profit. Locked shares count towards the external supply, so the price
//! per share is flat at the harvest instant, and they unlock linearly over
//! `profit_max_unlock_time`. Unlocked shares are burned lazily at the start
//! of every mutating call, which is when the price per share rises.
//! See [`streaming`] for the weighted-average merge of overlapping streams.
//!
//! ## Asset Flow
//!
//! ```text
//! Deposit:  User → [asset] → Strategy.deposit() → Booster
//!           shares minted to receiver, DepositEvent
//!
//! Harvest:  HarvestManager → Vault.harvest()
//!             → Strategy.harvest() → Booster.claim_rewards()
//!             → Harvester.harvest() → router / hooks → fees paid
//!             → net asset back to Strategy → re-staked
//!           locked shares minted to the vault, HarvestEvent
//!
//! Withdraw: User → Vault.withdraw() → Strategy.withdraw() → [asset] → receiver
//!           shares burned, WithdrawEvent
//! ```
//!
//! ## Access Control
//!
//! - `Admin`: grants/revokes roles, unwinds stranded reward tokens
//! - `HarvestManager`: triggers harvests
//! - `StrategyManager`: fees, hooks, harvester and booster migration
//!
//! # Examples
//!
//! ```ignore
//! let shares = vault_client.deposit(&user, &1_000_0000000, &user);
//! vault_client.harvest(&keeper, &keeper, &min_out, &extra, &calldata, &calldata, &calldata);
//! let assets = vault_client.redeem(&user, &shares, &user);
//! ```

#![no_std]

mod access;
mod error;
mod events;
mod harvest;
mod ledger;
mod math;
mod storage;
mod streaming;

use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, Bytes, Env, String, Vec,
};
use vault_common::StrategyClient;

pub use access::Role;
pub use error::VaultError;
pub use events::{
    DepositEvent, HarvestEvent, RoleEvent, StrategyConfigEvent, TransferEvent, WithdrawEvent,
};
pub use ledger::MIN_SHARES;
pub use storage::{DataKey, VaultConfig};
pub use streaming::{ShareState, MAX_PROFIT_UNLOCK_TIME, UNLOCK_SCALE};

use harvest::HarvestRequest;
use math::Rounding;

/// Ledger totals at the current timestamp together with the strategy's
/// reported assets.
struct Snapshot {
    config: VaultConfig,
    state: ShareState,
    now: u64,
    total_assets: i128,
}

impl Snapshot {
    fn supply(&self) -> i128 {
        self.state.external_total_supply(self.now)
    }

    fn to_shares(&self, assets: i128, rounding: Rounding) -> Result<i128, VaultError> {
        ledger::convert_to_shares(assets, self.total_assets, self.supply(), rounding)
    }

    fn to_assets(&self, shares: i128, rounding: Rounding) -> Result<i128, VaultError> {
        ledger::convert_to_assets(shares, self.total_assets, self.supply(), rounding)
    }
}


// ============================================================================
// CONTRACT
// ============================================================================

/// Stream Vault - ERC-4626 share vault with streamed harvest profit.
///
/// # Security Model
///
/// - Holders act on their own shares only (`require_auth()` on the owner)
/// - Only `HarvestManager` accounts can harvest
/// - Strategy configuration is gated by `StrategyManager`
/// - Supply can never sit between zero and `MIN_SHARES`, which keeps
///   first-depositor inflation attacks uneconomic
/// - The strategy is fixed at initialisation
#[contract]
pub struct StreamVault;

#[contractimpl]
impl StreamVault {
    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// Initializes the vault and binds it to its strategy.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `admin` - Receives every role; can grant roles to others
    /// * `asset` - Token accepted for deposits
    /// * `strategy` - Strategy contract that will custody all assets
    /// * `profit_max_unlock_time` - Streaming window in seconds (0 disables streaming)
    /// * `name` / `symbol` - Share token metadata
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called twice
    /// - `InvalidUnlockTime` if the window exceeds one year
    ///
    /// # Security
    /// - The strategy accepts exactly one `set_vault` call, made here, so a
    ///   strategy can never serve two vaults
    pub fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        strategy: Address,
        profit_max_unlock_time: u64,
        name: String,
        symbol: String,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        admin.require_auth();
        if profit_max_unlock_time > MAX_PROFIT_UNLOCK_TIME {
            return Err(VaultError::InvalidUnlockTime);
        }

        let decimals = token::Client::new(&env, &asset).decimals();
        storage::write_config(
            &env,
            &VaultConfig {
                asset,
                strategy: strategy.clone(),
                profit_max_unlock_time,
                name,
                symbol,
                decimals,
            },
        );
        storage::write_state(&env, &ShareState::default());

        for role in [Role::Admin, Role::HarvestManager, Role::StrategyManager] {
            access::grant(&env, role, &admin);
        }

        StrategyClient::new(&env, &strategy).set_vault(&env.current_contract_address());
        storage::bump_instance(&env);
        Ok(())
    }


    // ==========================================================================
    // CORE LIFECYCLE - DEPOSIT / MINT
    // ==========================================================================

    /// Deposits exactly `assets` and mints the resulting shares to `receiver`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `from` - Account paying the assets (must authorize)
    /// * `assets` - Amount of asset to deposit
    /// * `receiver` - Account credited with the shares
    ///
    /// # Returns
    /// Shares minted, rounded down.
    ///
    /// # Errors
    /// - `ZeroAmount` if `assets` is not positive or buys no shares
    /// - `DustSupplyViolation` if supply would end up below `MIN_SHARES`
    ///
    /// # Events
    /// Emits `DepositEvent`
    pub fn deposit(
        env: Env,
        from: Address,
        assets: i128,
        receiver: Address,
    ) -> Result<i128, VaultError> {
        from.require_auth();
        Self::require_positive(assets)?;

        let mut snapshot = Self::checkpoint(&env)?;
        let shares = snapshot.to_shares(assets, Rounding::Down)?;
        Self::require_positive(shares)?;

        Self::settle_deposit(&env, &mut snapshot, from, receiver, assets, shares)?;
        Ok(shares)
    }

    /// Mints exactly `shares` to `receiver`, charging `from` the required assets.
    ///
    /// # Returns
    /// Assets charged, rounded up.
    ///
    /// # Errors
    /// Same as [`deposit`](Self::deposit).
    pub fn mint(
        env: Env,
        from: Address,
        shares: i128,
        receiver: Address,
    ) -> Result<i128, VaultError> {
        from.require_auth();
        Self::require_positive(shares)?;

        let mut snapshot = Self::checkpoint(&env)?;
        let assets = snapshot.to_assets(shares, Rounding::Up)?;
        Self::require_positive(assets)?;

        Self::settle_deposit(&env, &mut snapshot, from, receiver, assets, shares)?;
        Ok(assets)
    }


    // ==========================================================================
    // CORE LIFECYCLE - WITHDRAW / REDEEM
    // ==========================================================================

    /// Pays exactly `assets` to `receiver`, burning the owner's shares.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `owner` - Share owner (must authorize)
    /// * `assets` - Amount of asset to withdraw
    /// * `receiver` - Account paid by the strategy
    ///
    /// # Returns
    /// Shares burned, rounded up.
    ///
    /// # Errors
    /// - `ZeroAmount` if `assets` is not positive
    /// - `InsufficientShares` if the owner cannot cover the burn
    /// - `DustSupplyViolation` if supply would end up below `MIN_SHARES`
    ///
    /// # Events
    /// Emits `WithdrawEvent`
    pub fn withdraw(
        env: Env,
        owner: Address,
        assets: i128,
        receiver: Address,
    ) -> Result<i128, VaultError> {
        owner.require_auth();
        Self::require_positive(assets)?;

        let mut snapshot = Self::checkpoint(&env)?;
        let shares = snapshot.to_shares(assets, Rounding::Up)?;
        Self::require_positive(shares)?;

        Self::settle_withdraw(&env, &mut snapshot, owner, receiver, assets, shares)?;
        Ok(shares)
    }

    /// Burns exactly `shares` of `owner` and pays the assets to `receiver`.
    ///
    /// # Returns
    /// Assets paid, rounded down.
    ///
    /// # Errors
    /// Same as [`withdraw`](Self::withdraw), plus `ZeroAmount` when the
    /// shares are worth nothing.
    pub fn redeem(
        env: Env,
        owner: Address,
        shares: i128,
        receiver: Address,
    ) -> Result<i128, VaultError> {
        owner.require_auth();
        Self::require_positive(shares)?;

        let mut snapshot = Self::checkpoint(&env)?;
        let assets = snapshot.to_assets(shares, Rounding::Down)?;
        Self::require_positive(assets)?;

        Self::settle_withdraw(&env, &mut snapshot, owner, receiver, assets, shares)?;
        Ok(assets)
    }

    /// Moves shares between holders. Burns released shares first, like every
    /// other ledger mutation.
    pub fn transfer(env: Env, from: Address, to: Address, shares: i128) -> Result<(), VaultError> {
        from.require_auth();
        Self::require_positive(shares)?;

        let mut state = storage::read_state(&env);
        state.realize(env.ledger().timestamp());
        storage::write_state(&env, &state);
        storage::bump_instance(&env);

        ledger::transfer(&env, &from, &to, shares)?;
        events::transfer(&env, from, to, shares);
        Ok(())
    }

    // ==========================================================================
    // CORE LIFECYCLE - HARVEST
    // ==========================================================================

    /// Harvests the strategy and streams the observed profit.
    ///
    /// The strategy claims booster rewards and hands them to its harvester,
    /// which converts them, pays the platform fee to the treasury and the
    /// caller fee to `caller`, and returns the net asset to the strategy.
    /// The vault then locks the growth of `total_assets` as new shares.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `operator` - Account holding `HarvestManager` (must authorize)
    /// * `caller` - Receives the caller fee
    /// * `min_amount_out` - Least asset the harvester must deliver
    /// * `extra_reward_tokens` - Non-base reward tokens to route through the extra reward hook
    /// * `reward_hook_calldata` - Opaque payload for the extra reward hook
    /// * `target_hook_calldata` - Opaque payload for the target hook
    /// * `harvester_calldata` - Opaque payload for the harvester's router
    ///
    /// # Returns
    /// Observed profit in assets.
    ///
    /// # Errors
    /// - `Unauthorized` if `operator` is not a harvest manager
    /// - `InsufficientSupply` if no shares exist
    /// - Harvester errors such as `SlippageExceeded` abort with their own code
    ///
    /// # Events
    /// Emits `HarvestEvent`
    pub fn harvest(
        env: Env,
        operator: Address,
        caller: Address,
        min_amount_out: i128,
        extra_reward_tokens: Vec<Address>,
        reward_hook_calldata: Bytes,
        target_hook_calldata: Bytes,
        harvester_calldata: Bytes,
    ) -> Result<i128, VaultError> {
        access::require_role(&env, Role::HarvestManager, &operator)?;
        storage::bump_instance(&env);

        harvest::settle(
            &env,
            HarvestRequest {
                caller,
                min_amount_out,
                extra_reward_tokens,
                reward_hook_calldata,
                target_hook_calldata,
                harvester_calldata,
            },
        )
    }


    // ==========================================================================
    // ADMINISTRATIVE - ROLES
    // ==========================================================================

    /// Grants `role` to `account`. Only callable by an `Admin`.
    ///
    /// # Events
    /// Emits `RoleEvent` with `granted: true`
    pub fn grant_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VaultError> {
        access::require_role(&env, Role::Admin, &admin)?;
        access::grant(&env, role, &account);
        events::role(&env, role, account, true);
        Ok(())
    }

    /// Revokes `role` from `account`. Only callable by an `Admin`.
    pub fn revoke_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VaultError> {
        access::require_role(&env, Role::Admin, &admin)?;
        access::revoke(&env, role, &account);
        events::role(&env, role, account, false);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }


    // ==========================================================================
    // ADMINISTRATIVE - STRATEGY CONFIGURATION
    // ==========================================================================

    /// Sets the platform fee charged on harvests, in basis points.
    ///
    /// # Errors
    /// - `Unauthorized` unless `operator` is a strategy manager
    /// - the strategy rejects fees above its cap
    pub fn set_platform_fee(env: Env, operator: Address, fee_bps: u32) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.set_platform_fee(&fee_bps);
        events::strategy_config(&env, symbol_short!("plat_fee"), operator);
        Ok(())
    }

    /// Sets the caller fee paid to whoever triggers a harvest, in basis points.
    pub fn set_caller_fee(env: Env, operator: Address, fee_bps: u32) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.set_caller_fee(&fee_bps);
        events::strategy_config(&env, symbol_short!("caller_fe"), operator);
        Ok(())
    }

    pub fn set_treasury(env: Env, operator: Address, treasury: Address) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.set_treasury(&treasury);
        events::strategy_config(&env, symbol_short!("treasury"), operator);
        Ok(())
    }

    /// Sets (or clears) the hook converting extra reward tokens.
    pub fn set_extra_reward_hook(
        env: Env,
        operator: Address,
        hook: Option<Address>,
    ) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.set_extra_reward_hook(&hook);
        events::strategy_config(&env, symbol_short!("xtra_hook"), operator);
        Ok(())
    }

    /// Sets (or clears) the hook converting the fee token into the asset.
    pub fn set_target_hook(
        env: Env,
        operator: Address,
        hook: Option<Address>,
    ) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.set_target_hook(&hook);
        events::strategy_config(&env, symbol_short!("tgt_hook"), operator);
        Ok(())
    }

    /// Swaps the strategy's harvester for `new_harvester`.
    ///
    /// Balances of `migration_tokens` held by the old harvester are moved
    /// to the new one, and its hook configuration carries over. An unbound
    /// harvester is bound to this vault's strategy on the way; one serving
    /// another strategy is rejected.
    pub fn update_harvester(
        env: Env,
        operator: Address,
        new_harvester: Address,
        migration_tokens: Vec<Address>,
    ) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.update_harvester(&new_harvester, &migration_tokens);
        log!(&env, "harvester updated", new_harvester);
        events::strategy_config(&env, symbol_short!("harvester"), operator);
        Ok(())
    }

    /// Moves the strategy's stake to `new_pool_id` on `new_booster`.
    ///
    /// Only possible once the current booster pool has been shut down.
    /// Total assets are unchanged by the move.
    pub fn migrate_booster(
        env: Env,
        operator: Address,
        new_booster: Address,
        new_pool_id: u32,
    ) -> Result<(), VaultError> {
        let strategy = Self::strategy_for(&env, &operator)?;
        strategy.migrate_booster(&new_booster, &new_pool_id);
        log!(&env, "booster migrated", new_booster, new_pool_id);
        events::strategy_config(&env, symbol_short!("booster"), operator);
        Ok(())
    }

    /// Sends stranded reward tokens held by the strategy to `recipient`.
    /// The vault asset itself can never be forwarded.
    ///
    /// # Errors
    /// - `Unauthorized` unless `operator` is an `Admin`
    pub fn admin_unwind_rewards(
        env: Env,
        operator: Address,
        recipient: Address,
        tokens: Vec<Address>,
    ) -> Result<(), VaultError> {
        access::require_role(&env, Role::Admin, &operator)?;
        let config = storage::read_config(&env)?;
        StrategyClient::new(&env, &config.strategy).forward_tokens(&tokens, &recipient);
        events::strategy_config(&env, symbol_short!("unwind"), operator);
        Ok(())
    }


    // ==========================================================================
    // READ FUNCTIONS - ERC-4626
    // ==========================================================================

    pub fn asset(env: Env) -> Result<Address, VaultError> {
        Ok(storage::read_config(&env)?.asset)
    }

    pub fn strategy(env: Env) -> Result<Address, VaultError> {
        Ok(storage::read_config(&env)?.strategy)
    }

    /// Assets managed by the strategy.
    pub fn total_assets(env: Env) -> Result<i128, VaultError> {
        Ok(Self::snapshot(&env)?.total_assets)
    }

    /// External share supply: every share except those already unlocked.
    pub fn total_supply(env: Env) -> Result<i128, VaultError> {
        let state = storage::read_state(&env);
        Ok(state.external_total_supply(env.ledger().timestamp()))
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn convert_to_shares(env: Env, assets: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_shares(assets, Rounding::Down)
    }

    pub fn convert_to_assets(env: Env, shares: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_assets(shares, Rounding::Down)
    }

    pub fn preview_deposit(env: Env, assets: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_shares(assets, Rounding::Down)
    }

    pub fn preview_mint(env: Env, shares: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_assets(shares, Rounding::Up)
    }

    pub fn preview_withdraw(env: Env, assets: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_shares(assets, Rounding::Up)
    }

    pub fn preview_redeem(env: Env, shares: i128) -> Result<i128, VaultError> {
        Self::snapshot(&env)?.to_assets(shares, Rounding::Down)
    }

    pub fn max_deposit(_env: Env, _receiver: Address) -> i128 {
        i128::MAX
    }

    pub fn max_mint(_env: Env, _receiver: Address) -> i128 {
        i128::MAX
    }

    /// Assets `owner` could withdraw right now: their whole balance, redeemed.
    pub fn max_withdraw(env: Env, owner: Address) -> Result<i128, VaultError> {
        let shares = storage::read_balance(&env, &owner);
        Self::snapshot(&env)?.to_assets(shares, Rounding::Down)
    }

    pub fn max_redeem(env: Env, owner: Address) -> i128 {
        storage::read_balance(&env, &owner)
    }

    /// Assets backing one whole share (`10^decimals` units).
    pub fn price_per_share(env: Env) -> Result<i128, VaultError> {
        let snapshot = Self::snapshot(&env)?;
        let one_share = 10_i128
            .checked_pow(snapshot.config.decimals)
            .ok_or(VaultError::MathOverflow)?;
        snapshot.to_assets(one_share, Rounding::Down)
    }


    // ==========================================================================
    // READ FUNCTIONS - STREAMING
    // ==========================================================================

    pub fn unlocked_shares(env: Env) -> i128 {
        storage::read_state(&env).unlocked_shares(env.ledger().timestamp())
    }

    pub fn locked_shares(env: Env) -> i128 {
        storage::read_state(&env).locked_shares(env.ledger().timestamp())
    }

    pub fn full_profit_unlock_date(env: Env) -> u64 {
        storage::read_state(&env).full_profit_unlock_date
    }

    pub fn profit_unlocking_rate(env: Env) -> i128 {
        storage::read_state(&env).profit_unlocking_rate
    }

    pub fn last_profit_update(env: Env) -> u64 {
        storage::read_state(&env).last_profit_update
    }

    /// Timestamp of the latest successful harvest, 0 before the first.
    pub fn last_harvest(env: Env) -> u64 {
        storage::read_state(&env).last_harvest
    }

    pub fn profit_max_unlock_time(env: Env) -> Result<u64, VaultError> {
        Ok(storage::read_config(&env)?.profit_max_unlock_time)
    }

    pub fn unlock_scale(_env: Env) -> i128 {
        UNLOCK_SCALE
    }

    /// Stored supply including shares unlocked but not yet burned.
    pub fn raw_total_supply(env: Env) -> i128 {
        storage::read_state(&env).raw_total_supply
    }

    /// Shares held by the vault itself.
    pub fn raw_vault_balance(env: Env) -> i128 {
        storage::read_state(&env).raw_vault_balance
    }


    // ==========================================================================
    // READ FUNCTIONS - METADATA
    // ==========================================================================

    pub fn name(env: Env) -> Result<String, VaultError> {
        Ok(storage::read_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, VaultError> {
        Ok(storage::read_config(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, VaultError> {
        Ok(storage::read_config(&env)?.decimals)
    }

    pub fn version(env: Env) -> u32 {
        storage::read_version(&env)
    }
}


// ============================================================================
// INTERNAL HELPERS
// ============================================================================

impl StreamVault {
    /// Loads the ledger as of now without modifying it.
    fn snapshot(env: &Env) -> Result<Snapshot, VaultError> {
        let config = storage::read_config(env)?;
        let total_assets = StrategyClient::new(env, &config.strategy).total_assets();
        Ok(Snapshot {
            config,
            state: storage::read_state(env),
            now: env.ledger().timestamp(),
            total_assets,
        })
    }

    /// Like [`snapshot`](Self::snapshot), but burns released shares first.
    /// Every mutating ledger operation starts here.
    fn checkpoint(env: &Env) -> Result<Snapshot, VaultError> {
        let mut snapshot = Self::snapshot(env)?;
        snapshot.state.realize(snapshot.now);
        storage::bump_instance(env);
        Ok(snapshot)
    }

    fn settle_deposit(
        env: &Env,
        snapshot: &mut Snapshot,
        from: Address,
        receiver: Address,
        assets: i128,
        shares: i128,
    ) -> Result<(), VaultError> {
        ledger::mint(env, &mut snapshot.state, &receiver, shares)?;
        ledger::check_supply_floor(&snapshot.state)?;
        storage::write_state(env, &snapshot.state);

        let strategy = &snapshot.config.strategy;
        token::Client::new(env, &snapshot.config.asset).transfer(&from, strategy, &assets);
        StrategyClient::new(env, strategy).deposit(&assets);

        events::deposit(env, from, receiver, assets, shares);
        Ok(())
    }

    fn settle_withdraw(
        env: &Env,
        snapshot: &mut Snapshot,
        owner: Address,
        receiver: Address,
        assets: i128,
        shares: i128,
    ) -> Result<(), VaultError> {
        ledger::burn(env, &mut snapshot.state, &owner, shares)?;
        ledger::check_supply_floor(&snapshot.state)?;
        storage::write_state(env, &snapshot.state);

        StrategyClient::new(env, &snapshot.config.strategy).withdraw(&assets, &receiver);

        events::withdraw(env, owner, receiver, assets, shares);
        Ok(())
    }

    /// Checks the strategy-manager role and returns a client for the strategy.
    fn strategy_for<'a>(
        env: &'a Env,
        operator: &Address,
    ) -> Result<StrategyClient<'a>, VaultError> {
        access::require_role(env, Role::StrategyManager, operator)?;
        let config = storage::read_config(env)?;
        Ok(StrategyClient::new(env, &config.strategy))
    }

    #[inline]
    fn require_positive(amount: i128) -> Result<(), VaultError> {
        if amount <= 0 {
            return Err(VaultError::ZeroAmount);
        }
        Ok(())
    }
}


// ============================================================================
// TESTS
// ============================================================================
