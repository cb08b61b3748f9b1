//! Role-based access control.
//!
//! Roles are stored per `(role, account)` in persistent storage. Gated
//! entry points take the acting account as an argument, require its
//! authorisation and then check the role.

use soroban_sdk::{contracttype, Address, Env};

use crate::error::VaultError;
use crate::storage::{DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Grants and revokes roles, unwinds stranded rewards
    Admin,
    /// Triggers harvests
    HarvestManager,
    /// Configures fees, hooks, harvester and booster of the strategy
    StrategyManager,
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

pub fn grant(env: &Env, role: Role, account: &Address) {
    let key = DataKey::Role(role, account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn revoke(env: &Env, role: Role, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Role(role, account.clone()));
}

/// Requires `account` to have signed the invocation and to hold `role`.
pub fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), VaultError> {
    account.require_auth();
    if !has_role(env, role, account) {
        return Err(VaultError::Unauthorized);
    }
    Ok(())
}
