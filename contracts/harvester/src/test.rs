#![cfg(test)]

use super::testutils::{MockHook, MockHookClient, MockSwapRouter, MockSwapRouterClient};
use super::*;
use soroban_sdk::{testutils::Address as _, token, Address, Bytes, Env, Vec};

const UNIT: i128 = 10_000_000;

struct HarvesterTest<'a> {
    env: Env,
    strategy: Address,
    treasury: Address,
    caller: Address,
    harvester: DirectHarvesterClient<'a>,
    asset: token::Client<'a>,
    fee_token: token::Client<'a>,
    reward: token::Client<'a>,
    extra: token::Client<'a>,
    target_hook: MockHookClient<'a>,
}

fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let id = env.register_stellar_asset_contract(admin.clone());
    (token::Client::new(env, &id), token::StellarAssetClient::new(env, &id))
}

impl<'a> HarvesterTest<'a> {
    /// Harvester whose router swaps rewards 1:1 into a separate fee token
    /// and whose target hook converts the fee token 1:1 into the asset.
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let (asset, asset_admin) = create_token(&env, &admin);
        let (fee_token, fee_admin) = create_token(&env, &admin);
        let (reward, _) = create_token(&env, &admin);
        let (extra, _) = create_token(&env, &admin);

        let router = MockSwapRouterClient::new(&env, &env.register_contract(None, MockSwapRouter));
        fee_admin.mint(&router.address, &(1_000_000 * UNIT));

        let target_hook = MockHookClient::new(&env, &env.register_contract(None, MockHook));
        target_hook.init(&fee_token.address, &asset.address, &10_000);
        asset_admin.mint(&target_hook.address, &(1_000_000 * UNIT));

        let harvester =
            DirectHarvesterClient::new(&env, &env.register_contract(None, DirectHarvester));
        harvester.initialize(&asset.address, &fee_token.address, &router.address);

        let strategy = Address::generate(&env);
        harvester.set_strategy(&strategy);
        harvester.set_target_hook(&Some(target_hook.address.clone()));

        HarvesterTest {
            treasury: Address::generate(&env),
            caller: Address::generate(&env),
            env,
            strategy,
            harvester,
            asset,
            fee_token,
            reward,
            extra,
            target_hook,
        }
    }

    fn fees(&self, platform_fee_bps: u32, caller_fee_bps: u32) -> FeeConfig {
        FeeConfig { platform_fee_bps, caller_fee_bps, treasury: self.treasury.clone() }
    }

    fn fund_rewards(&self, amount: i128) {
        token::StellarAssetClient::new(&self.env, &self.reward.address)
            .mint(&self.harvester.address, &amount);
    }

    fn rewards(&self) -> Vec<Address> {
        Vec::from_array(&self.env, [self.reward.address.clone()])
    }

    fn try_harvest(
        &self,
        extra: &Vec<Address>,
        min_amount_out: i128,
        fees: &FeeConfig,
    ) -> Result<HarvestSettlement, HarvesterError> {
        match self.harvester.try_harvest(
            &self.caller,
            &self.rewards(),
            extra,
            &min_amount_out,
            fees,
            &Bytes::new(&self.env),
            &Bytes::new(&self.env),
            &Bytes::new(&self.env),
        ) {
            Ok(Ok(settlement)) => Ok(settlement),
            Err(Ok(err)) => Err(err),
            _ => panic!("harvest failed outside the contract"),
        }
    }
}

#[test]
fn test_harvest_pays_fees_and_delivers_net_asset() {
    let t = HarvesterTest::new();
    t.fund_rewards(1_000 * UNIT);

    let settlement = t
        .try_harvest(&Vec::new(&t.env), 0, &t.fees(1_000, 200))
        .unwrap();

    assert_eq!(settlement.gross, 1_000 * UNIT);
    assert_eq!(settlement.platform_fee, 100 * UNIT);
    assert_eq!(settlement.caller_fee, 20 * UNIT);
    assert_eq!(settlement.net, 880 * UNIT);

    assert_eq!(t.fee_token.balance(&t.treasury), 100 * UNIT);
    assert_eq!(t.fee_token.balance(&t.caller), 20 * UNIT);
    assert_eq!(t.asset.balance(&t.strategy), 880 * UNIT);
    assert_eq!(t.reward.balance(&t.harvester.address), 0);
    assert_eq!(t.fee_token.balance(&t.harvester.address), 0);
    assert_eq!(t.asset.balance(&t.harvester.address), 0);
    assert_eq!(t.target_hook.executions(), 1);
}

#[test]
fn test_slippage_reverts_everything() {
    let t = HarvesterTest::new();
    t.fund_rewards(1_000 * UNIT);

    let result = t.try_harvest(&Vec::new(&t.env), 880 * UNIT + 1, &t.fees(1_000, 200));

    assert_eq!(result, Err(HarvesterError::SlippageExceeded));
    assert_eq!(t.reward.balance(&t.harvester.address), 1_000 * UNIT);
    assert_eq!(t.fee_token.balance(&t.treasury), 0);
    assert_eq!(t.fee_token.balance(&t.caller), 0);
    assert_eq!(t.asset.balance(&t.strategy), 0);
}

#[test]
fn test_exact_minimum_is_accepted() {
    let t = HarvesterTest::new();
    t.fund_rewards(1_000 * UNIT);

    let result = t.try_harvest(&Vec::new(&t.env), 880 * UNIT, &t.fees(1_000, 200));
    assert!(result.is_ok());
}

#[test]
fn test_missing_target_hook_fails() {
    let t = HarvesterTest::new();
    t.harvester.set_target_hook(&None);
    t.fund_rewards(10 * UNIT);

    let result = t.try_harvest(&Vec::new(&t.env), 0, &t.fees(0, 0));
    assert_eq!(result, Err(HarvesterError::NoHookSet));
}

#[test]
fn test_failing_hook_aborts_harvest() {
    let t = HarvesterTest::new();
    t.target_hook.set_succeed(&false);
    t.fund_rewards(10 * UNIT);

    let result = t.try_harvest(&Vec::new(&t.env), 0, &t.fees(0, 0));
    assert_eq!(result, Err(HarvesterError::HookFailed));
}

#[test]
fn test_fee_rates_above_one_hundred_percent_are_rejected() {
    let t = HarvesterTest::new();
    t.fund_rewards(10 * UNIT);

    let result = t.try_harvest(&Vec::new(&t.env), 0, &t.fees(9_000, 1_001));
    assert_eq!(result, Err(HarvesterError::InvalidFeeConfig));
}

#[test]
fn test_extra_rewards_go_through_extra_reward_hook() {
    let t = HarvesterTest::new();

    let extra_hook = MockHookClient::new(&t.env, &t.env.register_contract(None, MockHook));
    extra_hook.init(&t.extra.address, &t.fee_token.address, &5_000);
    token::StellarAssetClient::new(&t.env, &t.fee_token.address)
        .mint(&extra_hook.address, &(1_000 * UNIT));
    t.harvester.set_extra_reward_hook(&Some(extra_hook.address.clone()));

    token::StellarAssetClient::new(&t.env, &t.extra.address)
        .mint(&t.harvester.address, &(200 * UNIT));
    let extra = Vec::from_array(&t.env, [t.extra.address.clone()]);

    let settlement = t.try_harvest(&extra, 0, &t.fees(0, 0)).unwrap();

    // 200 extra at 50%, no base rewards
    assert_eq!(settlement.gross, 100 * UNIT);
    assert_eq!(settlement.net, 100 * UNIT);
    assert_eq!(t.extra.balance(&extra_hook.address), 200 * UNIT);
    assert_eq!(extra_hook.executions(), 1);
    assert_eq!(t.asset.balance(&t.strategy), 100 * UNIT);
}

#[test]
fn test_extra_rewards_stay_put_without_hook() {
    let t = HarvesterTest::new();
    token::StellarAssetClient::new(&t.env, &t.extra.address)
        .mint(&t.harvester.address, &(5 * UNIT));
    let extra = Vec::from_array(&t.env, [t.extra.address.clone()]);

    let settlement = t.try_harvest(&extra, 0, &t.fees(0, 0)).unwrap();

    assert_eq!(settlement, HarvestSettlement::default());
    assert_eq!(t.extra.balance(&t.harvester.address), 5 * UNIT);
}

#[test]
fn test_fee_token_equal_to_asset_needs_no_target_hook() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let (asset, asset_admin) = create_token(&env, &admin);
    let (reward, reward_admin) = create_token(&env, &admin);

    let router = MockSwapRouterClient::new(&env, &env.register_contract(None, MockSwapRouter));
    router.set_rate(&reward.address, &asset.address, &20_000);
    asset_admin.mint(&router.address, &(1_000 * UNIT));

    let harvester = DirectHarvesterClient::new(&env, &env.register_contract(None, DirectHarvester));
    harvester.initialize(&asset.address, &asset.address, &router.address);
    let strategy = Address::generate(&env);
    harvester.set_strategy(&strategy);

    reward_admin.mint(&harvester.address, &(10 * UNIT));
    let treasury = Address::generate(&env);
    let settlement = harvester.harvest(
        &strategy,
        &Vec::from_array(&env, [reward.address.clone()]),
        &Vec::new(&env),
        &0,
        &FeeConfig { platform_fee_bps: 1_500, caller_fee_bps: 0, treasury: treasury.clone() },
        &Bytes::new(&env),
        &Bytes::new(&env),
        &Bytes::new(&env),
    );

    assert_eq!(settlement.gross, 20 * UNIT);
    assert_eq!(settlement.platform_fee, 3 * UNIT);
    assert_eq!(settlement.net, 17 * UNIT);
    assert_eq!(asset.balance(&treasury), 3 * UNIT);
    assert_eq!(asset.balance(&strategy), 17 * UNIT);
    assert_eq!(harvester.hooks().target_hook, None);
}

#[test]
fn test_strategy_binds_once() {
    let t = HarvesterTest::new();
    let other = Address::generate(&t.env);

    assert_eq!(t.harvester.strategy(), Some(t.strategy.clone()));
    assert_eq!(
        t.harvester.try_set_strategy(&other),
        Err(Ok(HarvesterError::StrategyAlreadySet))
    );
}

#[test]
fn test_unbound_harvester_rejects_strategy_calls() {
    let env = Env::default();
    env.mock_all_auths();
    let harvester = DirectHarvesterClient::new(&env, &env.register_contract(None, DirectHarvester));
    let hook = Address::generate(&env);

    assert_eq!(
        harvester.try_set_target_hook(&Some(hook)),
        Err(Ok(HarvesterError::StrategyNotSet))
    );
}

#[test]
fn test_migrate_moves_balances_and_hands_over_hooks() {
    let t = HarvesterTest::new();
    let extra_hook = Address::generate(&t.env);
    t.harvester.set_extra_reward_hook(&Some(extra_hook.clone()));
    t.fund_rewards(7 * UNIT);
    token::StellarAssetClient::new(&t.env, &t.extra.address)
        .mint(&t.harvester.address, &(3 * UNIT));

    let successor = Address::generate(&t.env);
    let tokens = Vec::from_array(&t.env, [t.reward.address.clone(), t.extra.address.clone()]);
    let hooks = t.harvester.migrate(&successor, &tokens);

    assert_eq!(hooks.target_hook, Some(t.target_hook.address.clone()));
    assert_eq!(hooks.extra_reward_hook, Some(extra_hook));
    assert_eq!(t.reward.balance(&successor), 7 * UNIT);
    assert_eq!(t.extra.balance(&successor), 3 * UNIT);
    assert_eq!(t.reward.balance(&t.harvester.address), 0);
    assert_eq!(
        t.harvester.hooks(),
        HookConfig { target_hook: None, extra_reward_hook: None }
    );
}

#[test]
fn test_install_hooks_adopts_configuration() {
    let t = HarvesterTest::new();
    let hooks = HookConfig {
        target_hook: None,
        extra_reward_hook: Some(Address::generate(&t.env)),
    };
    t.harvester.install_hooks(&hooks);
    assert_eq!(t.harvester.hooks(), hooks);
}
