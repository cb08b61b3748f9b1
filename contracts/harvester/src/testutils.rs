//! Test doubles for the harvester's collaborators, shared with the
//! strategy and vault test suites through the `testutils` feature.

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Bytes, Env};

const FULL_RATE_BPS: i128 = 10_000;

#[contracttype]
pub enum RouterKey {
    Rate(Address, Address),
}

/// Swap router paying `amount_in * rate / 10_000` of `token_out` from its
/// own, pre-funded balance.
#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    pub fn set_rate(env: Env, token_in: Address, token_out: Address, rate_bps: i128) {
        env.storage()
            .instance()
            .set(&RouterKey::Rate(token_in, token_out), &rate_bps);
    }

    pub fn swap(
        env: Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        recipient: Address,
        _route: Bytes,
    ) -> i128 {
        let rate: i128 = env
            .storage()
            .instance()
            .get(&RouterKey::Rate(token_in, token_out.clone()))
            .unwrap_or(FULL_RATE_BPS);
        let amount_out = amount_in * rate / FULL_RATE_BPS;
        token::Client::new(&env, &token_out).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount_out,
        );
        amount_out
    }
}

#[contracttype]
pub enum HookKey {
    Input,
    Output,
    RateBps,
    Succeed,
    /// Input already converted by earlier executions
    Consumed,
    Executions,
}

/// Hook converting whatever `input` it has received since its last run into
/// `output` at a fixed rate, paid from its own pre-funded balance.
#[contract]
pub struct MockHook;

#[contractimpl]
impl MockHook {
    pub fn init(env: Env, input: Address, output: Address, rate_bps: i128) {
        env.storage().instance().set(&HookKey::Input, &input);
        env.storage().instance().set(&HookKey::Output, &output);
        env.storage().instance().set(&HookKey::RateBps, &rate_bps);
        env.storage().instance().set(&HookKey::Succeed, &true);
    }

    pub fn set_succeed(env: Env, succeed: bool) {
        env.storage().instance().set(&HookKey::Succeed, &succeed);
    }

    pub fn executions(env: Env) -> u32 {
        env.storage().instance().get(&HookKey::Executions).unwrap_or(0)
    }

    pub fn execute(env: Env, caller: Address, _calldata: Bytes) -> bool {
        let succeed: bool = env.storage().instance().get(&HookKey::Succeed).unwrap_or(false);
        if !succeed {
            return false;
        }

        let this = env.current_contract_address();
        let input: Address = env.storage().instance().get(&HookKey::Input).unwrap();
        let output: Address = env.storage().instance().get(&HookKey::Output).unwrap();
        let rate: i128 = env.storage().instance().get(&HookKey::RateBps).unwrap();
        let consumed: i128 = env.storage().instance().get(&HookKey::Consumed).unwrap_or(0);

        let received = token::Client::new(&env, &input).balance(&this);
        let amount_out = (received - consumed) * rate / FULL_RATE_BPS;
        env.storage().instance().set(&HookKey::Consumed, &received);
        if amount_out > 0 {
            token::Client::new(&env, &output).transfer(&this, &caller, &amount_out);
        }

        let executions = Self::executions(env.clone()) + 1;
        env.storage().instance().set(&HookKey::Executions, &executions);
        true
    }
}
