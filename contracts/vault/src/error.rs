use soroban_sdk::contracterror;

/// Failure codes returned by the vault.
///
/// Errors raised by the strategy (100..) or harvester (200..) during a
/// harvest or withdrawal are not remapped; they abort the invocation with
/// their original code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller lacks the role the entry point requires
    Unauthorized = 3,
    /// Zero amount, or an amount that converts to zero
    ZeroAmount = 4,
    InsufficientShares = 5,
    /// Harvest attempted while no shares exist
    InsufficientSupply = 6,
    /// Supply would end up strictly between zero and `MIN_SHARES`
    DustSupplyViolation = 7,
    MathOverflow = 8,
    InvalidUnlockTime = 9,
}
