#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env,
};

use rental_lib::{AssetClient, RentalItem};

mod claims;
mod storage;

use storage::*;

/// Rejected transitions and collaborator failures, surfaced to the caller.
/// Codes 100-108 are precondition/collaborator rejections; 200 is reserved
/// for invariant violations the precondition checks should make unreachable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Custody transfer of the underlying asset failed; the collection is
    /// the authority on ownership, so this doubles as "caller does not own
    /// the unit".
    NftTransferFailed = 100,
    /// No rental record exists for the (collection, token id) pair.
    NftNotFound = 101,
    /// The listing expired: the current ledger is past its end height.
    NftNotRentable = 102,
    /// The unit is already rented out (or, on delist, still rented).
    NftAlreadyRented = 103,
    /// Offered rent is below the listed price floor.
    PriceTooLow = 104,
    /// A rental record already exists for the (collection, token id) pair.
    ItemExists = 105,
    /// The rental claim could not be burned (missing or held by someone
    /// other than the recorded renter).
    BurnFailure = 106,
    /// Caller is not the depositor of the asset.
    Forbidden = 107,
    /// Requested rental length does not match the listed terms.
    MismatchedRentalLength = 108,
    /// Registry and claim ledger disagree; should be unreachable.
    Internal = 200,
}

#[contract]
pub struct Rental;

#[contractimpl]
impl Rental {
    /// Initialize contract with admin and the token rents are paid in
    pub fn initialize(env: Env, admin: Address, payment_token: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("Contract already initialized");
        }

        admin.require_auth();
        set_admin(&env, &admin);
        set_payment_token(&env, &payment_token);

        env.events().publish((symbol_short!("init"),), (admin, payment_token));
    }

    /// Swap the payment token (admin only)
    pub fn set_payment_token(env: Env, admin: Address, token: Address) {
        admin.require_auth();
        let current_admin = get_admin(&env);
        assert!(admin == current_admin, "Unauthorized");

        set_payment_token(&env, &token);
    }

    /// Deposit an asset into custody and publish its rental terms.
    ///
    /// The terms are fixed for the lifetime of the record: they are never
    /// updated in place, and a completed rental does not alter them.
    pub fn offer_nft(
        env: Env,
        asset_class: Address,
        asset_id: u64,
        end_height: u32,
        price: i128,
        rental_length: u32,
        owner: Address,
    ) -> Result<bool, Error> {
        owner.require_auth();

        if price < 0 {
            panic!("Price must be non-negative");
        }

        if get_rental_item(&env, &asset_class, asset_id).is_some() {
            return Err(Error::ItemExists);
        }

        // Pull the unit into custody. No separate ownership lookup: a failed
        // transfer is authoritative proof the depositor does not own it.
        let custody = AssetClient::new(&env, &asset_class);
        match custody.try_transfer(&asset_id, &owner, &env.current_contract_address()) {
            Ok(Ok(())) => {}
            _ => return Err(Error::NftTransferFailed),
        }

        let item = RentalItem {
            owner: owner.clone(),
            renter: None,
            end_height,
            price,
            rental_length,
        };
        set_rental_item(&env, &asset_class, asset_id, &item);

        env.events().publish(
            (symbol_short!("offered"),),
            (asset_class, asset_id, owner, price),
        );

        Ok(true)
    }

    /// Rent a listed asset, paying the offered amount to its depositor and
    /// receiving the rental claim for it. Returns the claim id, which equals
    /// the underlying token id.
    pub fn rent_nft(
        env: Env,
        asset_class: Address,
        asset_id: u64,
        offered_price: i128,
        offered_length: u32,
        renter: Address,
    ) -> Result<u64, Error> {
        renter.require_auth();

        let mut item =
            get_rental_item(&env, &asset_class, asset_id).ok_or(Error::NftNotFound)?;

        if item.renter.is_some() {
            return Err(Error::NftAlreadyRented);
        }
        if !item.is_rentable_at(env.ledger().sequence()) {
            return Err(Error::NftNotRentable);
        }
        if offered_price < item.price {
            return Err(Error::PriceTooLow);
        }
        if offered_length != item.rental_length {
            return Err(Error::MismatchedRentalLength);
        }

        // The full offered amount moves, not just the floor. An insufficient
        // balance traps in the token contract and unwinds the invocation.
        let payment = token::Client::new(&env, &get_payment_token(&env));
        payment.transfer(&renter, &item.owner, &offered_price);

        claims::mint(&env, asset_id, &renter)?;

        item.renter = Some(renter.clone());
        set_rental_item(&env, &asset_class, asset_id, &item);

        env.events().publish(
            (symbol_short!("rented"),),
            (asset_class, asset_id, renter, offered_price),
        );

        Ok(asset_id)
    }

    /// Withdraw an unrented asset from custody and delete its record.
    pub fn delist_nft(
        env: Env,
        asset_class: Address,
        asset_id: u64,
        owner: Address,
    ) -> Result<bool, Error> {
        owner.require_auth();

        let item = get_rental_item(&env, &asset_class, asset_id).ok_or(Error::NftNotFound)?;

        if item.owner != owner {
            return Err(Error::Forbidden);
        }
        if item.renter.is_some() {
            return Err(Error::NftAlreadyRented);
        }

        let custody = AssetClient::new(&env, &asset_class);
        match custody.try_transfer(&asset_id, &env.current_contract_address(), &owner) {
            Ok(Ok(())) => {}
            _ => return Err(Error::NftTransferFailed),
        }

        remove_rental_item(&env, &asset_class, asset_id);

        env.events().publish(
            (symbol_short!("delisted"),),
            (asset_class, asset_id, owner),
        );

        Ok(true)
    }

    /// Settle a rental: burn the recorded renter's claim and put the item
    /// back on the listing, unrented.
    ///
    /// Any authenticated account may settle, not just the renter; the asset
    /// stays in custody until the owner delists it. Returning an item that
    /// is not rented is a no-op.
    pub fn return_nft(
        env: Env,
        asset_class: Address,
        asset_id: u64,
        caller: Address,
    ) -> Result<bool, Error> {
        caller.require_auth();

        let mut item =
            get_rental_item(&env, &asset_class, asset_id).ok_or(Error::NftNotFound)?;

        let renter = match item.renter.clone() {
            Some(renter) => renter,
            None => return Ok(true),
        };

        claims::burn(&env, asset_id, &renter)?;

        item.renter = None;
        set_rental_item(&env, &asset_class, asset_id, &item);

        env.events().publish(
            (symbol_short!("returned"),),
            (asset_class, asset_id, renter, caller),
        );

        Ok(true)
    }

    /// Get the rental record for a custodied unit
    pub fn get_rental_item(env: Env, asset_class: Address, asset_id: u64) -> Option<RentalItem> {
        get_rental_item(&env, &asset_class, asset_id)
    }

    /// Get the current holder of the rental claim for a token id
    pub fn get_claim_holder(env: Env, asset_id: u64) -> Option<Address> {
        claims::holder_of(&env, asset_id)
    }
}


#[cfg(test)]
mod test_offer;
