use soroban_sdk::{contractclient, Address, Env};

/// Interface a collection contract must expose for its units to be taken
/// into rental custody.
///
/// The rental contract never inspects ownership directly: it delegates the
/// move to `transfer` and treats any failure as authoritative proof that
/// `from` did not own the unit. `owner_of` exists for off-chain callers and
/// test assertions only.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    /// Move one unit from `from` to `to`. Must fail (without partial effect)
    /// if `from` does not currently own the unit or the unit does not exist.
    fn transfer(env: Env, token_id: u64, from: Address, to: Address);

    /// Current owner of the unit, if it has been minted.
    fn owner_of(env: Env, token_id: u64) -> Option<Address>;
}
