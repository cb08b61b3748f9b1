use soroban_sdk::{contracttype, symbol_short, Address, Env};
use vault_common::HarvestSettlement;

/// # Topics
/// - `SymbolShort("harvest")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyHarvestEvent {
    pub settlement: HarvestSettlement,
    /// Idle asset re-staked after the harvest
    pub restaked: i128,
}

/// # Topics
/// - `SymbolShort("harvester")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvesterUpdatedEvent {
    pub old_harvester: Address,
    pub new_harvester: Address,
}

/// # Topics
/// - `SymbolShort("booster")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoosterMigratedEvent {
    pub old_booster: Address,
    pub old_pool_id: u32,
    pub new_booster: Address,
    pub new_pool_id: u32,
    /// Asset moved from the old pool to the new one
    pub amount: i128,
}

/// # Topics
/// - `SymbolShort("fees")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesUpdatedEvent {
    pub platform_fee_bps: u32,
    pub caller_fee_bps: u32,
    pub treasury: Address,
}

pub fn harvested(env: &Env, settlement: HarvestSettlement, restaked: i128) {
    env.events().publish(
        (symbol_short!("harvest"),),
        StrategyHarvestEvent { settlement, restaked },
    );
}

pub fn harvester_updated(env: &Env, old_harvester: Address, new_harvester: Address) {
    env.events().publish(
        (symbol_short!("harvester"),),
        HarvesterUpdatedEvent { old_harvester, new_harvester },
    );
}

pub fn booster_migrated(env: &Env, event: BoosterMigratedEvent) {
    env.events().publish((symbol_short!("booster"),), event);
}

pub fn fees_updated(env: &Env, platform_fee_bps: u32, caller_fee_bps: u32, treasury: Address) {
    env.events().publish(
        (symbol_short!("fees"),),
        FeesUpdatedEvent { platform_fee_bps, caller_fee_bps, treasury },
    );
}
