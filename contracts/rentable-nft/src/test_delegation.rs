//! Rental lifecycle: granting, expiry on read, overwrite, revoke, and
//! invalidation on transfer and burn.

#![cfg(test)]

use std::vec::Vec as StdVec;

use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{Address, Env, String, Symbol, TryFromVal};

use rentable_lib::{ContractError, UserInfo, USER_UPDATED_TOPIC};

use crate::{RentableNft, RentableNftClient};

const START: u64 = 1_700_000_000;

fn setup(env: &Env) -> (RentableNftClient<'_>, Address, Address) {
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let contract_id = env.register(RentableNft, ());
    let client = RentableNftClient::new(env, &contract_id);
    let owner = Address::generate(env);
    let renter = Address::generate(env);

    client.init_contract(
        &owner,
        &String::from_str(env, "My Awesome Token"),
        &String::from_str(env, "MAT"),
        &10,
    );
    (client, owner, renter)
}

fn advance(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

/// The latest `user_upd` event, decoded. Call right after the invocation
/// under test.
fn last_user_update(env: &Env) -> Option<(u64, Option<Address>, u64)> {
    let updates: StdVec<(u64, Option<Address>, u64)> = env
        .events()
        .all()
        .iter()
        .filter_map(|(_, topics, data)| {
            let topic = Symbol::try_from_val(env, &topics.get(0)?).ok()?;
            if topic != USER_UPDATED_TOPIC {
                return None;
            }
            let token_id = u64::try_from_val(env, &topics.get(1)?).ok()?;
            let (user, expires) = <(Option<Address>, u64)>::try_from_val(env, &data).ok()?;
            Some((token_id, user, expires))
        })
        .collect();
    updates.last().cloned()
}

#[test]
fn test_never_rented_token_has_no_user() {
    let env = Env::default();
    let (client, _, _) = setup(&env);

    assert_eq!(client.user_of(&1), None);
    assert_eq!(client.user_expires(&1), 0);
    assert_eq!(client.user_info(&1), None);

    // unknown ids read the same way
    assert_eq!(client.user_of(&999), None);
    assert_eq!(client.user_expires(&999), 0);
}

#[test]
fn test_rent_and_check() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 10));
    assert_eq!(
        last_user_update(&env),
        Some((1u64, Some(renter.clone()), START + 10))
    );

    assert_eq!(client.user_of(&1), Some(renter));
    assert_eq!(client.user_expires(&1), START + 10);
}

#[test]
fn test_rent_and_expire() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 10));
    assert_eq!(client.user_of(&1), Some(renter.clone()));

    advance(&env, 9);
    assert_eq!(client.user_of(&1), Some(renter));

    // the deadline itself is already lapsed
    advance(&env, 1);
    assert_eq!(client.user_of(&1), None);

    advance(&env, 1);
    assert_eq!(client.user_of(&1), None);
    // the lapsed deadline stays readable
    assert_eq!(client.user_expires(&1), START + 10);
}

#[test]
fn test_rent_without_owner_fails() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let stranger = Address::generate(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 100));

    let result = client.try_set_user(&stranger, &1, &Some(stranger.clone()), &(START + 10));
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    // prior record untouched
    assert_eq!(client.user_of(&1), Some(renter.clone()));
    assert_eq!(
        client.user_info(&1),
        Some(UserInfo {
            user: Some(renter),
            expires: START + 100,
        })
    );
}

#[test]
fn test_rent_unknown_token_fails() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    let result = client.try_set_user(&owner, &42, &Some(renter), &(START + 10));
    assert_eq!(result, Err(Ok(ContractError::UnknownAsset)));
    assert_eq!(client.user_info(&42), None);
}

#[test]
fn test_approved_and_operator_cannot_rent() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let approved = Address::generate(&env);
    let operator = Address::generate(&env);

    client.approve(&owner, &Some(approved.clone()), &1);
    client.set_approval_for_all(&owner, &operator, &true);

    assert_eq!(
        client.try_set_user(&approved, &1, &Some(renter.clone()), &(START + 10)),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        client.try_set_user(&operator, &1, &Some(renter), &(START + 10)),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.user_of(&1), None);
}

#[test]
fn test_grant_is_idempotent() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 50));
    let once = client.user_info(&1);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 50));
    assert_eq!(client.user_info(&1), once);
    assert_eq!(client.user_of(&1), Some(renter));
}

#[test]
fn test_overwrite_replaces_previous_grant() {
    let env = Env::default();
    let (client, owner, first) = setup(&env);
    let second = Address::generate(&env);

    client.set_user(&owner, &1, &Some(first), &(START + 1000));
    client.set_user(&owner, &1, &Some(second.clone()), &(START + 5));

    assert_eq!(client.user_of(&1), Some(second));
    assert_eq!(client.user_expires(&1), START + 5);

    // the longer first grant has no residual effect
    advance(&env, 5);
    assert_eq!(client.user_of(&1), None);
}

#[test]
fn test_revoke_with_none_or_past_deadline() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 100));
    client.set_user(&owner, &1, &None, &0);
    assert_eq!(last_user_update(&env), Some((1u64, None, 0u64)));
    assert_eq!(client.user_of(&1), None);

    client.set_user(&owner, &2, &Some(renter.clone()), &(START + 100));
    client.set_user(&owner, &2, &Some(renter.clone()), &(START - 1));
    // a revoking grant is still announced
    assert_eq!(
        last_user_update(&env),
        Some((2u64, Some(renter), START - 1))
    );
    assert_eq!(client.user_of(&2), None);
    assert_eq!(client.user_expires(&2), START - 1);
}

#[test]
fn test_transfer_clears_active_rental() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let buyer = Address::generate(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 10));
    advance(&env, 5);
    assert_eq!(client.user_of(&1), Some(renter));

    client.transfer(&owner, &buyer, &1);
    assert_eq!(last_user_update(&env), Some((1u64, None, 0u64)));

    assert_eq!(client.user_of(&1), None);
    assert_eq!(client.user_expires(&1), 0);
    assert_eq!(client.user_info(&1), None);

    // the new owner can rent it out afresh
    let next = Address::generate(&env);
    client.set_user(&buyer, &1, &Some(next.clone()), &(START + 100));
    assert_eq!(client.user_of(&1), Some(next));

    // and the previous owner no longer can
    assert_eq!(
        client.try_set_user(&owner, &1, &None, &0),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn test_transfer_from_clears_rental() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let operator = Address::generate(&env);
    let buyer = Address::generate(&env);

    client.set_user(&owner, &3, &Some(renter), &u64::MAX);
    client.set_approval_for_all(&owner, &operator, &true);
    client.transfer_from(&operator, &owner, &buyer, &3);

    assert_eq!(client.user_of(&3), None);
    assert_eq!(client.user_expires(&3), 0);
}

#[test]
fn test_burn_clears_rental() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &4, &Some(renter), &(START + 10));
    client.burn(&owner, &4);
    assert_eq!(last_user_update(&env), Some((4u64, None, 0u64)));

    assert_eq!(client.user_of(&4), None);
    assert_eq!(client.user_expires(&4), 0);
}

#[test]
fn test_transfer_of_unrented_token_still_announces_clear() {
    let env = Env::default();
    let (client, owner, _) = setup(&env);
    let buyer = Address::generate(&env);

    client.transfer(&owner, &buyer, &5);
    assert_eq!(last_user_update(&env), Some((5u64, None, 0u64)));
}

#[test]
fn test_self_transfer_keeps_rental() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);

    client.set_user(&owner, &6, &Some(renter.clone()), &(START + 10));
    client.transfer(&owner, &owner, &6);
    assert_ne!(last_user_update(&env), Some((6u64, None, 0u64)));

    assert_eq!(client.owner_of(&6), owner);
    assert_eq!(client.user_of(&6), Some(renter));
}

#[test]
fn test_failed_transfer_keeps_rental() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let stranger = Address::generate(&env);

    client.set_user(&owner, &7, &Some(renter.clone()), &(START + 10));
    let result = client.try_transfer_from(&stranger, &owner, &stranger, &7);
    assert_eq!(result, Err(Ok(ContractError::NotApproved)));

    assert_eq!(client.user_of(&7), Some(renter));
}

#[test]
fn test_rentals_are_per_token() {
    let env = Env::default();
    let (client, owner, renter) = setup(&env);
    let buyer = Address::generate(&env);

    client.set_user(&owner, &1, &Some(renter.clone()), &(START + 10));
    client.set_user(&owner, &2, &Some(renter.clone()), &(START + 10));
    client.transfer(&owner, &buyer, &1);

    assert_eq!(client.user_of(&1), None);
    assert_eq!(client.user_of(&2), Some(renter));
}
