//! Booster double for strategy and vault tests.

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, Vec};

#[contracttype]
pub enum BoosterKey {
    LpToken(u32),
    Staked(u32, Address),
    Rewards(u32, Address),
    Shutdown(u32),
}

/// Booster that books stakes per pool and pays queued rewards from its own
/// pre-funded balances.
#[contract]
pub struct MockBooster;

#[contractimpl]
impl MockBooster {
    pub fn add_pool(env: Env, pool_id: u32, lp_token: Address) {
        env.storage().instance().set(&BoosterKey::LpToken(pool_id), &lp_token);
    }

    pub fn deposit(env: Env, pool_id: u32, from: Address, amount: i128) {
        from.require_auth();
        let staked = Self::staked_balance(env.clone(), pool_id, from.clone());
        env.storage()
            .instance()
            .set(&BoosterKey::Staked(pool_id, from), &(staked + amount));
    }

    pub fn withdraw(env: Env, pool_id: u32, from: Address, amount: i128, recipient: Address) {
        from.require_auth();
        let staked = Self::staked_balance(env.clone(), pool_id, from.clone());
        assert!(staked >= amount, "insufficient stake");
        env.storage()
            .instance()
            .set(&BoosterKey::Staked(pool_id, from), &(staked - amount));

        let lp_token: Address = env
            .storage()
            .instance()
            .get(&BoosterKey::LpToken(pool_id))
            .unwrap();
        token::Client::new(&env, &lp_token).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );
    }

    pub fn staked_balance(env: Env, pool_id: u32, account: Address) -> i128 {
        env.storage()
            .instance()
            .get(&BoosterKey::Staked(pool_id, account))
            .unwrap_or(0)
    }

    /// Adds `amount` of `token_id` to what `account` receives on its next claim.
    pub fn queue_reward(env: Env, pool_id: u32, account: Address, token_id: Address, amount: i128) {
        let key = BoosterKey::Rewards(pool_id, account);
        let mut rewards: Vec<(Address, i128)> =
            env.storage().instance().get(&key).unwrap_or(Vec::new(&env));
        rewards.push_back((token_id, amount));
        env.storage().instance().set(&key, &rewards);
    }

    pub fn claim_rewards(env: Env, pool_id: u32, account: Address) {
        let key = BoosterKey::Rewards(pool_id, account.clone());
        let rewards: Vec<(Address, i128)> =
            env.storage().instance().get(&key).unwrap_or(Vec::new(&env));
        let this = env.current_contract_address();
        for (token_id, amount) in rewards.iter() {
            token::Client::new(&env, &token_id).transfer(&this, &account, &amount);
        }
        env.storage().instance().remove(&key);
    }

    pub fn shutdown(env: Env, pool_id: u32) {
        env.storage().instance().set(&BoosterKey::Shutdown(pool_id), &true);
    }

    pub fn is_shutdown(env: Env, pool_id: u32) -> bool {
        env.storage()
            .instance()
            .get(&BoosterKey::Shutdown(pool_id))
            .unwrap_or(false)
    }
}
