#![cfg(test)]

extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env,
};

use nft_registry::{NftRegistry, NftRegistryClient};

use crate::{ContractError, NftStakingContract, NftStakingContractClient};

fn setup_staked() -> (
    Env,
    NftStakingContractClient<'static>,
    NftRegistryClient<'static>,
    Address, // admin
    Address, // alice, with token 1 staked and token 2 in hand
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(100);

    let registry_id = env.register(NftRegistry, ());
    let registry = NftRegistryClient::new(&env, &registry_id);

    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token_id = reward_token.address();

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &registry_id, &reward_token_id, &10, &0, &0);

    StellarAssetClient::new(&env, &reward_token_id)
        .mock_all_auths()
        .mint(&contract_id, &1_000_000_000i128);

    let alice = Address::generate(&env);
    registry.mint(&alice); // token 1
    registry.mint(&alice); // token 2
    client.stake(&alice, &vec![&env, 1u64]);

    (env, client, registry, admin, alice)
}

#[test]
fn test_pause_blocks_every_user_mutation() {
    let (env, client, _registry, admin, alice) = setup_staked();

    client.pause(&admin);
    assert!(client.is_paused());

    // All four user-facing mutations fail while paused, even though their
    // other preconditions are met.
    env.ledger().set_sequence_number(110);

    let result = client.try_stake(&alice, &vec![&env, 2u64]);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }

    let result = client.try_unstake(&alice, &vec![&env, 1u64]);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }

    let result = client.try_withdraw(&alice, &vec![&env, 1u64]);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }

    let result = client.try_claim_rewards(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
}

#[test]
fn test_admin_operations_survive_pause() {
    let (_env, client, _registry, admin, _alice) = setup_staked();

    client.pause(&admin);

    // Parameter updates and unpause remain available to the admin.
    client.set_reward_per_block(&admin, &42);
    assert_eq!(client.get_reward_per_block(), 42);
    client.set_delay_period(&admin, &3);
    client.set_unbonding_period(&admin, &9);

    client.unpause(&admin);
    assert!(!client.is_paused());
}

#[test]
fn test_unpause_restores_operation() {
    let (env, client, _registry, admin, alice) = setup_staked();

    client.pause(&admin);
    client.unpause(&admin);

    env.ledger().set_sequence_number(101);
    assert_eq!(client.claim_rewards(&alice), 10);
}

#[test]
fn test_pause_by_non_admin_fails() {
    let (env, client, _registry, _admin, _alice) = setup_staked();

    let intruder = Address::generate(&env);

    let result = client.try_pause(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    let result = client.try_unpause(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}
