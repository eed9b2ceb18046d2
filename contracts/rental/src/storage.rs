use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{RentalItem, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PaymentToken,
    /// Registry entry for one custodied unit, keyed (collection, token id).
    RentalItem(Address, u64),
    /// Live rental claim, keyed by the underlying token id.
    Claim(u64),
}

/* ---------------- ADMIN ---------------- */

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Contract not initialized")
}

/* ---------------- PAYMENT TOKEN ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .expect("Payment token not set")
}

/* ---------------- RENTAL REGISTRY ---------------- */

pub fn get_rental_item(env: &Env, asset_class: &Address, asset_id: u64) -> Option<RentalItem> {
    env.storage()
        .persistent()
        .get(&DataKey::RentalItem(asset_class.clone(), asset_id))
}

pub fn set_rental_item(env: &Env, asset_class: &Address, asset_id: u64, item: &RentalItem) {
    let key = DataKey::RentalItem(asset_class.clone(), asset_id);
    env.storage().persistent().set(&key, item);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn remove_rental_item(env: &Env, asset_class: &Address, asset_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::RentalItem(asset_class.clone(), asset_id));
}
