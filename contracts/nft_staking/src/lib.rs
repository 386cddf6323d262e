//! Time-locked NFT staking with linear reward accrual.
//!
//! Owners deposit NFTs into the contract's custody and accrue a flat
//! per-block reward while they hold at least one active stake. Leaving is a
//! two-phase exit: `unstake` starts a per-token unbonding window, and only
//! after `unbonding_period` blocks may `withdraw` return the token. Rewards
//! are claimed per owner, gated by a configurable claim delay. A single
//! admin tunes the rates and periods and controls an emergency pause.
//!
//! Block height is the ledger sequence number; the contract only reads it.

#![no_std]

pub mod custody;
pub mod events;
pub mod ledger;
pub mod pause;
pub mod rewards;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol, Vec};

use custody::AssetCustodyClient;
use ledger::Stake;

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const NFT_CONTRACT: Symbol = symbol_short!("NFT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const REWARD_PER_BLOCK: Symbol = symbol_short!("RWD_BLK");
const DELAY_PERIOD: Symbol = symbol_short!("DLY_PER");
const UNBONDING_PERIOD: Symbol = symbol_short!("UNBND_PER");
const STATE_VERSION_KEY: Symbol = symbol_short!("STATE_VER");

/// Layout version of the stored state. Bumped together with a new arm in
/// `migrate` whenever the storage schema changes.
const STATE_VERSION: u32 = 1;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    Paused = 4,
    InvalidInput = 5,
    NoTokenIds = 6,
    NotTokenOwner = 7,
    TokenAlreadyStaked = 8,
    NotStakeOwner = 9,
    AlreadyUnbonding = 10,
    NotWithdrawable = 11,
    DelayNotPassed = 12,
    NoRewardsAvailable = 13,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct NftStakingContract;

#[contractimpl]
impl NftStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `nft_contract` – address of the NFT contract holding token custody.
    /// * `reward_token` – SAC address of the token paid out as rewards.
    /// * `reward_per_block` – reward units accrued per elapsed block.
    /// * `delay_period` – blocks that must pass since an owner's last
    ///   stake-in or claim before the next claim.
    /// * `unbonding_period` – blocks between `unstake` and `withdraw`.
    pub fn initialize(
        env: Env,
        admin: Address,
        nft_contract: Address,
        reward_token: Address,
        reward_per_block: i128,
        delay_period: u32,
        unbonding_period: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_per_block < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&NFT_CONTRACT, &nft_contract);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&REWARD_PER_BLOCK, &reward_per_block);
        env.storage().instance().set(&DELAY_PERIOD, &delay_period);
        env.storage().instance().set(&UNBONDING_PERIOD, &unbonding_period);
        env.storage().instance().set(&STATE_VERSION_KEY, &STATE_VERSION);

        events::publish_initialized(
            &env,
            admin,
            nft_contract,
            reward_token,
            reward_per_block,
            delay_period,
            unbonding_period,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit the given tokens into custody, creating one Active stake
    /// record per id at the current block.
    ///
    /// The whole call aborts (leaving no record and moving no token) if any
    /// id is not owned by the caller or is already staked. The owner's
    /// reward reference point is initialised on their first stake only.
    pub fn stake(env: Env, owner: Address, token_ids: Vec<u64>) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        pause::require_not_paused(&env)?;

        if token_ids.is_empty() {
            return Err(ContractError::NoTokenIds);
        }

        let nft_contract: Address = env
            .storage()
            .instance()
            .get(&NFT_CONTRACT)
            .ok_or(ContractError::NotInitialized)?;
        let nft = AssetCustodyClient::new(&env, &nft_contract);
        let block = env.ledger().sequence();

        for token_id in token_ids.iter() {
            if nft.owner_of(&token_id) != owner {
                return Err(ContractError::NotTokenOwner);
            }
            ledger::add(&env, &owner, token_id, block)?;
            nft.transfer(&owner, &env.current_contract_address(), &token_id);
            events::publish_staked(&env, owner.clone(), token_id, block);
        }

        ledger::init_last_action(&env, &owner, block);

        Ok(())
    }

    /// Start the unbonding window for the given tokens.
    ///
    /// Each id must be an Active stake of the caller. The records stay in
    /// the ledger (and the tokens in custody) until `withdraw`; unbonding
    /// never reverses back to Active.
    pub fn unstake(env: Env, owner: Address, token_ids: Vec<u64>) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        pause::require_not_paused(&env)?;

        if token_ids.is_empty() {
            return Err(ContractError::NoTokenIds);
        }

        let block = env.ledger().sequence();

        for token_id in token_ids.iter() {
            ledger::mark_unbonding(&env, &owner, token_id, block)?;
            events::publish_unstaked(&env, owner.clone(), token_id, block);
        }

        Ok(())
    }

    /// Return the given tokens to the caller and delete their records.
    ///
    /// Each id must be an Unbonding stake of the caller whose window has
    /// fully elapsed; anything else (no record, still Active, window open)
    /// fails with `NotWithdrawable`.
    pub fn withdraw(env: Env, owner: Address, token_ids: Vec<u64>) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        pause::require_not_paused(&env)?;

        if token_ids.is_empty() {
            return Err(ContractError::NoTokenIds);
        }

        let nft_contract: Address = env
            .storage()
            .instance()
            .get(&NFT_CONTRACT)
            .ok_or(ContractError::NotInitialized)?;
        let nft = AssetCustodyClient::new(&env, &nft_contract);
        let block = env.ledger().sequence();
        let unbonding_period: u32 = env
            .storage()
            .instance()
            .get(&UNBONDING_PERIOD)
            .unwrap_or(0);

        for token_id in token_ids.iter() {
            let record = ledger::get(&env, token_id).ok_or(ContractError::NotWithdrawable)?;
            if record.owner != owner {
                return Err(ContractError::NotStakeOwner);
            }
            if record.is_active() {
                return Err(ContractError::NotWithdrawable);
            }
            if block.saturating_sub(record.unbonding_start_block) < unbonding_period {
                return Err(ContractError::NotWithdrawable);
            }

            ledger::remove(&env, &owner, token_id)?;
            nft.transfer(&env.current_contract_address(), &owner, &token_id);
            events::publish_withdrawn(&env, owner.clone(), token_id);
        }

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim everything accrued since the caller's last stake-in or claim.
    ///
    /// The amount is `reward_per_block × elapsed blocks`, flat per owner
    /// regardless of how many tokens are staked, and requires the owner to
    /// currently hold at least one Active stake. With a zero delay period
    /// the delay check cannot fail; zero elapsed time is reported as
    /// `NoRewardsAvailable`.
    pub fn claim_rewards(env: Env, owner: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        pause::require_not_paused(&env)?;

        let last_action = ledger::last_action_block(&env, &owner)
            .ok_or(ContractError::NoRewardsAvailable)?;
        if !ledger::has_active(&env, &owner) {
            return Err(ContractError::NoRewardsAvailable);
        }

        let block = env.ledger().sequence();
        let elapsed = rewards::elapsed_blocks(block, last_action);

        let delay_period: u32 = env.storage().instance().get(&DELAY_PERIOD).unwrap_or(0);
        if elapsed < delay_period {
            return Err(ContractError::DelayNotPassed);
        }

        let reward_per_block: i128 = env
            .storage()
            .instance()
            .get(&REWARD_PER_BLOCK)
            .unwrap_or(0);
        let amount = rewards::accrued(reward_per_block, elapsed);
        if amount == 0 {
            return Err(ContractError::NoRewardsAvailable);
        }

        // Settle from the contract's reward-token balance, then advance the
        // reference point so the same blocks cannot be claimed twice.
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::Client::new(&env, &reward_token).transfer(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        ledger::set_last_action(&env, &owner, block);

        events::publish_reward_claimed(&env, owner, amount);

        Ok(amount)
    }

    // ── View functions ──────────────────────────────────────────────────────

    /// All of `owner`'s current stake records, in insertion order.
    pub fn get_stakes(env: Env, owner: Address) -> Vec<Stake> {
        ledger::list_for(&env, &owner)
    }

    /// The record for a single token, if one exists.
    pub fn get_stake(env: Env, token_id: u64) -> Option<Stake> {
        ledger::get(&env, token_id)
    }

    pub fn get_reward_per_block(env: Env) -> i128 {
        env.storage().instance().get(&REWARD_PER_BLOCK).unwrap_or(0)
    }

    pub fn get_delay_period(env: Env) -> u32 {
        env.storage().instance().get(&DELAY_PERIOD).unwrap_or(0)
    }

    pub fn get_unbonding_period(env: Env) -> u32 {
        env.storage().instance().get(&UNBONDING_PERIOD).unwrap_or(0)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Admin functions ─────────────────────────────────────────────────────

    /// Update the per-block reward rate. Prospective only: claims already
    /// settled are untouched, and the next claim prices its whole elapsed
    /// window at the new rate.
    pub fn set_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&REWARD_PER_BLOCK, &new_rate);

        events::publish_reward_per_block_set(&env, new_rate);

        Ok(())
    }

    /// Update the claim delay period (affects only checks made after the
    /// call).
    pub fn set_delay_period(
        env: Env,
        caller: Address,
        new_period: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&DELAY_PERIOD, &new_period);

        events::publish_delay_period_set(&env, new_period);

        Ok(())
    }

    /// Update the unbonding period (affects only checks made after the
    /// call, including withdrawals of already-unbonding stakes).
    pub fn set_unbonding_period(
        env: Env,
        caller: Address,
        new_period: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&UNBONDING_PERIOD, &new_period);

        events::publish_unbonding_period_set(&env, new_period);

        Ok(())
    }

    /// Halt all user-facing mutations. Admin operations stay available.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        pause::set_paused(&env, true);

        events::publish_pause_set(&env, caller, true);

        Ok(())
    }

    /// Resume normal operation.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        pause::set_paused(&env, false);

        events::publish_pause_set(&env, caller, false);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept a pending admin transfer. Only the proposed new admin can
    /// call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;

        env.storage().instance().set(&ADMIN, &new_admin);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call
    /// this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    /// Get the pending admin address, if any.
    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Versioning & migration ──────────────────────────────────────────────

    /// Contract version.
    pub fn version() -> u32 {
        1
    }

    /// Layout version of the stored state.
    pub fn state_version(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&STATE_VERSION_KEY)
            .unwrap_or(STATE_VERSION)
    }

    /// Opt-in state migration, invoked by the host after a code upgrade.
    ///
    /// Version 1 is the first layout; future layouts add a match arm per
    /// predecessor version here. Running on an already-current state is a
    /// no-op. Returns the resulting state version.
    pub fn migrate(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let stored: u32 = env
            .storage()
            .instance()
            .get(&STATE_VERSION_KEY)
            .unwrap_or(1);
        if stored < STATE_VERSION {
            env.storage().instance().set(&STATE_VERSION_KEY, &STATE_VERSION);
        }

        Ok(STATE_VERSION)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_pause;
