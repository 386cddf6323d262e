//! Minimal NFT registry used as the custody collaborator of the staking
//! contract: sequential minting, ownership lookup, and owner-authorised
//! transfers. Metadata and mint randomisation are deliberately absent.

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const SUPPLY: Symbol = symbol_short!("SUPPLY");

// Per-token storage uses tuple keys: (OWNER, token_id)
const OWNER: Symbol = symbol_short!("OWNER");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    TokenNotFound = 1,
    NotTokenOwner = 2,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct NftRegistry;

#[contractimpl]
impl NftRegistry {
    /// Mint the next token to `to` and return its id. Ids are sequential,
    /// starting at 1.
    pub fn mint(env: Env, to: Address) -> u64 {
        to.require_auth();

        let supply: u64 = env.storage().instance().get(&SUPPLY).unwrap_or(0);
        let token_id = supply.saturating_add(1);

        env.storage().instance().set(&SUPPLY, &token_id);
        env.storage().persistent().set(&(OWNER, token_id), &to);

        env.events().publish(
            (symbol_short!("MINTED"), to.clone()),
            (token_id, env.ledger().timestamp()),
        );

        token_id
    }

    /// Return the current owner of `token_id`.
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, RegistryError> {
        env.storage()
            .persistent()
            .get(&(OWNER, token_id))
            .ok_or(RegistryError::TokenNotFound)
    }

    /// Move `token_id` from `from` to `to`. Requires `from`'s authorisation
    /// and fails unless `from` currently owns the token.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        from.require_auth();

        let key = (OWNER, token_id);
        let owner: Address = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(RegistryError::TokenNotFound)?;
        if owner != from {
            return Err(RegistryError::NotTokenOwner);
        }

        env.storage().persistent().set(&key, &to);

        env.events().publish(
            (symbol_short!("XFER"), from, to),
            (token_id, env.ledger().timestamp()),
        );

        Ok(())
    }

    /// Number of tokens minted so far (ids run from 1 to this value).
    pub fn total_supply(env: Env) -> u64 {
        env.storage().instance().get(&SUPPLY).unwrap_or(0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test;
