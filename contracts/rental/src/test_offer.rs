#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::testutils::{claim_and_offer, setup, END_HEIGHT, PRICE, RENTAL_LENGTH};
use crate::Error;

#[test]
fn offer_deposits_asset_and_records_terms() {
    let env = Env::default();
    let f = setup(&env);
    let owner = Address::generate(&env);

    let token_id = f.collection.claim(&owner);
    assert_eq!(token_id, 1);

    let ok = f.rental.offer_nft(
        &f.collection.address,
        &token_id,
        &END_HEIGHT,
        &PRICE,
        &RENTAL_LENGTH,
        &owner,
    );
    assert!(ok);

    // The unit is now in custody of the rental contract.
    assert_eq!(
        f.collection.owner_of(&token_id),
        Some(f.rental.address.clone())
    );

    let item = f
        .rental
        .get_rental_item(&f.collection.address, &token_id)
        .unwrap();
    assert_eq!(item.owner, owner);
    assert_eq!(item.renter, None);
    assert_eq!(item.end_height, END_HEIGHT);
    assert_eq!(item.price, PRICE);
    assert_eq!(item.rental_length, RENTAL_LENGTH);
}

#[test]
fn offer_fails_when_caller_does_not_own_the_asset() {
    let env = Env::default();
    let f = setup(&env);
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);

    let token_id = f.collection.claim(&owner);

    let result = f.rental.try_offer_nft(
        &f.collection.address,
        &token_id,
        &END_HEIGHT,
        &PRICE,
        &RENTAL_LENGTH,
        &stranger,
    );
    match result {
        Err(Ok(Error::NftTransferFailed)) => {}
        _ => panic!("offer by non-owner should fail with NftTransferFailed"),
    }

    // Nothing changed: no custody move, no registry entry.
    assert_eq!(f.collection.owner_of(&token_id), Some(owner));
    assert_eq!(
        f.rental.get_rental_item(&f.collection.address, &token_id),
        None
    );
}

#[test]
fn offer_fails_for_unminted_token() {
    let env = Env::default();
    let f = setup(&env);
    let owner = Address::generate(&env);

    let result = f.rental.try_offer_nft(
        &f.collection.address,
        &7u64,
        &END_HEIGHT,
        &PRICE,
        &RENTAL_LENGTH,
        &owner,
    );
    match result {
        Err(Ok(Error::NftTransferFailed)) => {}
        _ => panic!("offer of an unminted token should fail with NftTransferFailed"),
    }
}

#[test]
fn offer_fails_when_item_already_listed() {
    let env = Env::default();
    let f = setup(&env);
    let owner = Address::generate(&env);

    let token_id = claim_and_offer(&f, &owner);

    let result = f.rental.try_offer_nft(
        &f.collection.address,
        &token_id,
        &200u32,
        &50i128,
        &5u32,
        &owner,
    );
    match result {
        Err(Ok(Error::ItemExists)) => {}
        _ => panic!("second offer for the same key should fail with ItemExists"),
    }

    // The original terms stand.
    let item = f
        .rental
        .get_rental_item(&f.collection.address, &token_id)
        .unwrap();
    assert_eq!(item.end_height, END_HEIGHT);
    assert_eq!(item.price, PRICE);
}

#[test]
fn query_returns_none_for_unknown_item() {
    let env = Env::default();
    let f = setup(&env);

    assert_eq!(f.rental.get_rental_item(&f.collection.address, &1u64), None);
    assert_eq!(f.rental.get_claim_holder(&1u64), None);
}
