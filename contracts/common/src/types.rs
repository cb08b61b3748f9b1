use soroban_sdk::{contracttype, Address};

/// Outcome of one harvest as reported by the harvester, denominated in
/// the fee token for `gross`/fees and in the vault asset for `net`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HarvestSettlement {
    /// Total converted rewards before fees
    pub gross: i128,
    /// Paid to the treasury
    pub platform_fee: i128,
    /// Paid to whoever triggered the harvest
    pub caller_fee: i128,
    /// Asset delivered back to the strategy
    pub net: i128,
}

/// Fee parameters the strategy hands to its harvester on every harvest.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub platform_fee_bps: u32,
    pub caller_fee_bps: u32,
    pub treasury: Address,
}

/// Hook addresses a harvester is configured with. Moved as a unit when a
/// harvester is migrated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookConfig {
    /// Converts the net fee token into the vault asset
    pub target_hook: Option<Address>,
    /// Converts extra (non-base) reward tokens into the fee token
    pub extra_reward_hook: Option<Address>,
}
