//! Vault events.
//!
//! Every state-changing entry point publishes one event under a short
//! symbol topic with a `#[contracttype]` payload.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::access::Role;

/// # Topics
/// - `SymbolShort("deposit")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    /// Account the assets were taken from
    pub sender: Address,
    /// Account credited with the shares
    pub owner: Address,
    pub assets: i128,
    pub shares: i128,
}

/// # Topics
/// - `SymbolShort("withdraw")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    /// Account whose shares were burned
    pub owner: Address,
    /// Account the assets were paid to
    pub receiver: Address,
    pub assets: i128,
    pub shares: i128,
}

/// # Topics
/// - `SymbolShort("transfer")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub shares: i128,
}

/// Settlement record of one harvest.
///
/// `gross`, `platform_fee`, `caller_fee` and `net` come from the
/// strategy's settlement; `profit` is what the vault actually observed as
/// the increase of its total assets and is what gets streamed.
///
/// # Topics
/// - `SymbolShort("harvest")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestEvent {
    pub caller: Address,
    pub gross: i128,
    pub platform_fee: i128,
    pub caller_fee: i128,
    pub net: i128,
    pub profit: i128,
    /// Shares minted to the vault for streaming
    pub locked_shares: i128,
    /// Shares released and burned before the new profit was locked
    pub realized_shares: i128,
    pub full_profit_unlock_date: u64,
}

/// # Topics
/// - `SymbolShort("role")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleEvent {
    pub role: Role,
    pub account: Address,
    pub granted: bool,
}

/// Emitted when a strategy setting is changed through the vault.
///
/// # Topics
/// - `SymbolShort("strat_cfg")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfigEvent {
    /// Name of the forwarded setting, e.g. `platform_fee`
    pub action: Symbol,
    pub operator: Address,
}

pub fn deposit(env: &Env, sender: Address, owner: Address, assets: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("deposit"),),
        DepositEvent { sender, owner, assets, shares },
    );
}

pub fn withdraw(env: &Env, owner: Address, receiver: Address, assets: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("withdraw"),),
        WithdrawEvent { owner, receiver, assets, shares },
    );
}

pub fn transfer(env: &Env, from: Address, to: Address, shares: i128) {
    env.events().publish(
        (symbol_short!("transfer"),),
        TransferEvent { from, to, shares },
    );
}

pub fn harvest(env: &Env, event: HarvestEvent) {
    env.events().publish((symbol_short!("harvest"),), event);
}

pub fn role(env: &Env, role: Role, account: Address, granted: bool) {
    env.events().publish(
        (symbol_short!("role"),),
        RoleEvent { role, account, granted },
    );
}

pub fn strategy_config(env: &Env, action: Symbol, operator: Address) {
    env.events().publish(
        (symbol_short!("strat_cfg"),),
        StrategyConfigEvent { action, operator },
    );
}
