#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{vec, Address, Env};

use nft_registry::{NftRegistry, NftRegistryClient};
use nft_staking::{NftStakingContract, NftStakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Mint { user: u8 },
    Stake { user: u8, token_id: u8 },
    Unstake { user: u8, token_id: u8 },
    Withdraw { user: u8, token_id: u8 },
    ClaimRewards { user: u8 },
    AdvanceBlocks { blocks: u8 },
    SetUnbondingPeriod { period: u8 },
    Pause,
    Unpause,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(100);

    let registry_id = env.register(NftRegistry, ());
    let registry = NftRegistryClient::new(&env, &registry_id);

    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &registry_id, &reward_token.address(), &10, &0, &5);

    let mut users = Vec::new();
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }

    // Drive random interleavings across several callers. We are looking for
    // unhandled panics (overflow, missing bounds checks) and violations of
    // the one-record-per-token invariant; individual call failures are fine.
    let mut sequence: u32 = 100;
    for action in actions {
        match action {
            FuzzAction::Mint { user } => {
                let caller = &users[user as usize % users.len()];
                let _ = registry.try_mint(caller);
            }
            FuzzAction::Stake { user, token_id } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_stake(caller, &vec![&env, token_id as u64]);
            }
            FuzzAction::Unstake { user, token_id } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_unstake(caller, &vec![&env, token_id as u64]);
            }
            FuzzAction::Withdraw { user, token_id } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_withdraw(caller, &vec![&env, token_id as u64]);
            }
            FuzzAction::ClaimRewards { user } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_claim_rewards(caller);
            }
            FuzzAction::AdvanceBlocks { blocks } => {
                sequence = sequence.saturating_add(blocks as u32);
                env.ledger().set_sequence_number(sequence);
            }
            FuzzAction::SetUnbondingPeriod { period } => {
                let _ = client.try_set_unbonding_period(&admin, &(period as u32));
            }
            FuzzAction::Pause => {
                let _ = client.try_pause(&admin);
            }
            FuzzAction::Unpause => {
                let _ = client.try_unpause(&admin);
            }
        }
    }

    // Every token is recorded for at most one owner.
    let supply = registry.total_supply();
    for token_id in 1..=supply {
        let mut holders = 0u32;
        for user in users.iter() {
            let stakes = client.get_stakes(user);
            for record in stakes.iter() {
                if record.token_id == token_id {
                    holders += 1;
                }
            }
        }
        assert!(holders <= 1, "token {token_id} recorded for multiple owners");
    }
});
