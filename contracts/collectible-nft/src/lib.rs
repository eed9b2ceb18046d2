#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env,
};

use rental_lib::{FIRST_TOKEN_ID, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotOwner = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenCounter,
    /// Current owner of a minted unit.
    Owner(u64),
}

#[contract]
pub struct CollectibleNft;

#[contractimpl]
impl CollectibleNft {
    /// Initialize contract with admin (one-time setup)
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::TokenCounter, &(FIRST_TOKEN_ID - 1));

        Ok(())
    }

    /// Free-claim mint: anyone may claim the next token id for themselves.
    pub fn claim(env: Env, caller: Address) -> Result<u64, Error> {
        caller.require_auth();

        let counter: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(FIRST_TOKEN_ID - 1);
        let token_id = counter + 1;

        let key = DataKey::Owner(token_id);
        env.storage().persistent().set(&key, &caller);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
        env.storage().instance().set(&DataKey::TokenCounter, &token_id);

        env.events().publish((symbol_short!("claim"),), (token_id, caller));

        Ok(token_id)
    }

    /// Move one unit between accounts. This is the custody interface the
    /// rental contract drives; it must fail without partial effect when
    /// `from` does not own the unit.
    pub fn transfer(env: Env, token_id: u64, from: Address, to: Address) -> Result<(), Error> {
        from.require_auth();

        let key = DataKey::Owner(token_id);
        let owner: Address = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        env.storage().persistent().set(&key, &to);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);

        env.events().publish((symbol_short!("transfer"),), (token_id, from, to));

        Ok(())
    }

    /// Current owner of a unit, if it has been minted
    pub fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner(token_id))
    }

    /// Number of units minted so far
    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(FIRST_TOKEN_ID - 1)
    }
}
