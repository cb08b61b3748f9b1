use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HarvesterError {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    StrategyAlreadySet = 202,
    /// Strategy-only entry point called before a strategy was bound
    StrategyNotSet = 203,
    /// Net proceeds need converting but no target hook is configured
    NoHookSet = 204,
    /// A hook reported failure
    HookFailed = 205,
    /// Delivered asset is below the caller's minimum
    SlippageExceeded = 206,
    /// Fee rates add up to more than 100%
    InvalidFeeConfig = 207,
}
