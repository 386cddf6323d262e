//! Stake ledger: one record per deposited token plus a per-owner index.
//!
//! Records live in a global table keyed by token id, so a token can carry at
//! most one record at a time. Each owner additionally keeps an ordered list
//! of their token ids; withdrawals splice the id out of that list, preserving
//! insertion order for the remaining entries. The owner's reward reference
//! point (`last_action_block`) is stored here as well.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

// Per-token: (STK, token_id) → Stake
const STAKE: Symbol = symbol_short!("STK");

// Per-owner: (OWNED, owner) → Vec<token_id>, insertion order preserved
const OWNED: Symbol = symbol_short!("OWNED");

// Per-owner: (LAST_ACT, owner) → block of last stake-in or reward claim
const LAST_ACTION: Symbol = symbol_short!("LAST_ACT");

// ── Types ────────────────────────────────────────────────────────────────────

/// One staked token. `unbonding_start_block == 0` means the stake is still
/// Active; once unbonding starts the field holds the block of the unstake
/// call and is never cleared while the record exists.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub token_id: u64,
    pub owner: Address,
    pub staked_at_block: u32,
    pub unbonding_start_block: u32,
}

impl Stake {
    pub fn is_active(&self) -> bool {
        self.unbonding_start_block == 0
    }
}

// ── Record operations ────────────────────────────────────────────────────────

/// Look up the record for `token_id`, if any.
pub fn get(env: &Env, token_id: u64) -> Option<Stake> {
    env.storage().persistent().get(&(STAKE, token_id))
}

/// Insert a new Active record for `(owner, token_id)` at `block`.
/// Fails if the token already carries a record.
pub fn add(env: &Env, owner: &Address, token_id: u64, block: u32) -> Result<(), ContractError> {
    let key = (STAKE, token_id);
    if env.storage().persistent().has(&key) {
        return Err(ContractError::TokenAlreadyStaked);
    }

    let record = Stake {
        token_id,
        owner: owner.clone(),
        staked_at_block: block,
        unbonding_start_block: 0,
    };
    env.storage().persistent().set(&key, &record);

    let owned_key = (OWNED, owner.clone());
    let mut owned: Vec<u64> = env
        .storage()
        .persistent()
        .get(&owned_key)
        .unwrap_or_else(|| Vec::new(env));
    owned.push_back(token_id);
    env.storage().persistent().set(&owned_key, &owned);

    Ok(())
}

/// Transition the Active record for `(owner, token_id)` into Unbonding,
/// recording `block` as the start of the unbonding window.
pub fn mark_unbonding(
    env: &Env,
    owner: &Address,
    token_id: u64,
    block: u32,
) -> Result<(), ContractError> {
    let key = (STAKE, token_id);
    let mut record: Stake = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotStakeOwner)?;

    if record.owner != *owner {
        return Err(ContractError::NotStakeOwner);
    }
    if !record.is_active() {
        return Err(ContractError::AlreadyUnbonding);
    }

    record.unbonding_start_block = block;
    env.storage().persistent().set(&key, &record);

    Ok(())
}

/// Delete the record for `(owner, token_id)` and drop the id from the
/// owner's index. Eligibility (unbonding window elapsed) is the caller's
/// responsibility; this only checks that the record exists.
pub fn remove(env: &Env, owner: &Address, token_id: u64) -> Result<Stake, ContractError> {
    let key = (STAKE, token_id);
    let record: Stake = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotWithdrawable)?;
    env.storage().persistent().remove(&key);

    let owned_key = (OWNED, owner.clone());
    let mut owned: Vec<u64> = env
        .storage()
        .persistent()
        .get(&owned_key)
        .unwrap_or_else(|| Vec::new(env));
    if let Some(index) = owned.first_index_of(token_id) {
        let _ = owned.remove(index);
    }
    if owned.is_empty() {
        env.storage().persistent().remove(&owned_key);
    } else {
        env.storage().persistent().set(&owned_key, &owned);
    }

    Ok(record)
}

/// All of `owner`'s current records, in insertion order.
pub fn list_for(env: &Env, owner: &Address) -> Vec<Stake> {
    let owned: Vec<u64> = env
        .storage()
        .persistent()
        .get(&(OWNED, owner.clone()))
        .unwrap_or_else(|| Vec::new(env));

    let mut stakes = Vec::new(env);
    for token_id in owned.iter() {
        if let Some(record) = get(env, token_id) {
            stakes.push_back(record);
        }
    }
    stakes
}

/// Whether `owner` currently holds at least one Active stake.
pub fn has_active(env: &Env, owner: &Address) -> bool {
    let owned: Vec<u64> = env
        .storage()
        .persistent()
        .get(&(OWNED, owner.clone()))
        .unwrap_or_else(|| Vec::new(env));

    for token_id in owned.iter() {
        if let Some(record) = get(env, token_id) {
            if record.is_active() {
                return true;
            }
        }
    }
    false
}

// ── Reward reference point ───────────────────────────────────────────────────

/// Block of the owner's last stake-in or successful claim, if any.
pub fn last_action_block(env: &Env, owner: &Address) -> Option<u32> {
    env.storage().persistent().get(&(LAST_ACTION, owner.clone()))
}

/// Record the owner's first staking action. Later stakes leave the
/// reference point where it is; only claims advance it.
pub fn init_last_action(env: &Env, owner: &Address, block: u32) {
    let key = (LAST_ACTION, owner.clone());
    if !env.storage().persistent().has(&key) {
        env.storage().persistent().set(&key, &block);
    }
}

/// Advance the reward reference point after a successful claim.
pub fn set_last_action(env: &Env, owner: &Address, block: u32) {
    env.storage()
        .persistent()
        .set(&(LAST_ACTION, owner.clone()), &block);
}
