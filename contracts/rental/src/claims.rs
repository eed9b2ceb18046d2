//! Rental claim issuance.
//!
//! A claim is the protocol-local token representing the right to hold and
//! return a rented asset. Claims share the underlying token-id key space:
//! at most one claim is live per token id, and it exists iff the registry
//! records a renter for that id.

use soroban_sdk::{symbol_short, Address, Env};

use rental_lib::{PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

use crate::storage::DataKey;
use crate::Error;

pub fn holder_of(env: &Env, asset_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Claim(asset_id))
}

/// Mint the claim for `asset_id` to `to`. A live claim here means the
/// registry and the claim ledger have drifted, which the rent preconditions
/// rule out.
pub fn mint(env: &Env, asset_id: u64, to: &Address) -> Result<(), Error> {
    let key = DataKey::Claim(asset_id);
    if env.storage().persistent().has(&key) {
        return Err(Error::Internal);
    }
    env.storage().persistent().set(&key, to);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);

    env.events().publish((symbol_short!("mint"),), (asset_id, to.clone()));

    Ok(())
}

/// Burn the claim for `asset_id` held by `holder`. Fails if no claim is live
/// or it is held by someone else.
pub fn burn(env: &Env, asset_id: u64, holder: &Address) -> Result<(), Error> {
    let key = DataKey::Claim(asset_id);
    let current: Address = match env.storage().persistent().get(&key) {
        Some(current) => current,
        None => return Err(Error::BurnFailure),
    };
    if current != *holder {
        return Err(Error::BurnFailure);
    }
    env.storage().persistent().remove(&key);

    env.events().publish((symbol_short!("burn"),), (asset_id, holder.clone()));

    Ok(())
}
