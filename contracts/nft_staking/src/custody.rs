//! Client interface to the external NFT contract that actually owns mint and
//! transfer semantics. The staking contract only ever asks it two things:
//! who owns a token, and to move a token. Any failure on the custody side
//! aborts the enclosing invocation, so a stake or withdraw either fully
//! commits or leaves no trace.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "AssetCustodyClient")]
pub trait AssetCustody {
    /// Current owner of `token_id`.
    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Move `token_id` from `from` to `to`; requires `from`'s authorisation.
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}
