use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    /// `set_vault` may only succeed once
    VaultAlreadySet = 102,
    /// No vault bound yet, so nothing may call vault-only entry points
    VaultNotSet = 103,
    FeeTooHigh = 104,
    /// New harvester is bound to a different strategy
    HarvesterNotBound = 105,
    /// Booster migration while the current pool is still live
    BoosterPoolActive = 106,
    ZeroAmount = 107,
    InsufficientAssets = 108,
    /// The vault asset cannot be forwarded out of the strategy
    ProtectedToken = 109,
}
