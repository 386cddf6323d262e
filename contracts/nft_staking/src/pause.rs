//! Global pause switch.
//!
//! Every user-facing mutation consults this gate before touching state.
//! Admin operations (parameter updates, pause/unpause itself) bypass it, so
//! the contract can always be reconfigured and resumed.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Revert with `Paused` while the switch is engaged.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&PAUSED, &paused);
}
