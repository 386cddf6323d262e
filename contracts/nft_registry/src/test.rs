extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{NftRegistry, NftRegistryClient, RegistryError};

fn setup() -> (Env, NftRegistryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NftRegistry, ());
    let client = NftRegistryClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&alice), 1);
    assert_eq!(client.mint(&alice), 2);
    assert_eq!(client.mint(&bob), 3);

    assert_eq!(client.total_supply(), 3);
    assert_eq!(client.owner_of(&1), alice);
    assert_eq!(client.owner_of(&2), alice);
    assert_eq!(client.owner_of(&3), bob);
}

#[test]
fn test_transfer_moves_ownership() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_id = client.mint(&alice);
    client.transfer(&alice, &bob, &token_id);

    assert_eq!(client.owner_of(&token_id), bob);
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_id = client.mint(&alice);

    let result = client.try_transfer(&bob, &bob, &token_id);
    match result {
        Err(Ok(e)) => assert_eq!(e, RegistryError::NotTokenOwner),
        _ => unreachable!("Expected NotTokenOwner error"),
    }
}

#[test]
fn test_owner_of_unknown_token_fails() {
    let (_env, client) = setup();

    let result = client.try_owner_of(&42);
    match result {
        Err(Ok(e)) => assert_eq!(e, RegistryError::TokenNotFound),
        _ => unreachable!("Expected TokenNotFound error"),
    }
}
