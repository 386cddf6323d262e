use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub nft_contract: Address,
    pub reward_token: Address,
    pub reward_per_block: i128,
    pub delay_period: u32,
    pub unbonding_period: u32,
    pub timestamp: u64,
}

/// Fired for each token deposited into custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub owner: Address,
    pub token_id: u64,
    pub staked_at_block: u32,
    pub timestamp: u64,
}

/// Fired for each token that enters its unbonding window.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub owner: Address,
    pub token_id: u64,
    pub unbonding_start_block: u32,
    pub timestamp: u64,
}

/// Fired for each token returned to its owner after unbonding.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub token_id: u64,
    pub timestamp: u64,
}

/// Fired when an owner claims accrued rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the per-block reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPerBlockSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the claim delay period.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DelayPeriodSetEvent {
    pub new_period: u32,
    pub timestamp: u64,
}

/// Fired when the admin changes the unbonding period.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnbondingPeriodSetEvent {
    pub new_period: u32,
    pub timestamp: u64,
}

/// Fired when the admin flips the pause switch.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    nft_contract: Address,
    reward_token: Address,
    reward_per_block: i128,
    delay_period: u32,
    unbonding_period: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            nft_contract,
            reward_token,
            reward_per_block,
            delay_period,
            unbonding_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, owner: Address, token_id: u64, staked_at_block: u32) {
    env.events().publish(
        (symbol_short!("STAKED"), owner.clone()),
        StakedEvent {
            owner,
            token_id,
            staked_at_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, owner: Address, token_id: u64, unbonding_start_block: u32) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), owner.clone()),
        UnstakedEvent {
            owner,
            token_id,
            unbonding_start_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, owner: Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), owner.clone()),
        WithdrawnEvent {
            owner,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), owner.clone()),
        RewardClaimedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_per_block_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_SET"),),
        RewardPerBlockSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_delay_period_set(env: &Env, new_period: u32) {
    env.events().publish(
        (symbol_short!("DLY_SET"),),
        DelayPeriodSetEvent {
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unbonding_period_set(env: &Env, new_period: u32) {
    env.events().publish(
        (symbol_short!("UNBND_SET"),),
        UnbondingPeriodSetEvent {
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pause_set(env: &Env, admin: Address, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSE_SET"), admin.clone()),
        PausedEvent {
            admin,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
