//! # Vault Common
//!
//! Shared building blocks for the streaming vault contracts.
//!
//! - [`interfaces`]: `#[contractclient]` traits for every cross-contract
//!   seam (strategy, harvester, booster, swap router, hooks).
//! - [`types`]: `#[contracttype]` records passed across those seams.
//! - [`fees`]: the basis-point fee settlement calculator.
//!
//! Each contract crate depends on this one so that a client generated from
//! a trait here always agrees with the contract implementing it.

#![no_std]

pub mod fees;
pub mod interfaces;
pub mod types;

pub use fees::{split_harvest, FeeSplit, BPS_DENOMINATOR, MAX_CALLER_FEE_BPS, MAX_PLATFORM_FEE_BPS};
pub use interfaces::{
    BoosterClient, BoosterInterface, HarvesterClient, HarvesterInterface, HookClient,
    HookInterface, StrategyClient, StrategyInterface, SwapRouterClient, SwapRouterInterface,
};
pub use types::{FeeConfig, HarvestSettlement, HookConfig};
