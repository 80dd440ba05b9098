//! Event publishing. Topics are `(name, subject)`; data carries the rest.

use soroban_sdk::{Address, Env};

use rentable_lib::{APPROVAL_ALL_TOPIC, APPROVAL_TOPIC, TRANSFER_TOPIC, USER_UPDATED_TOPIC};

/// Fired on every successful `set_user` and on every ownership change,
/// the latter with `(None, 0)`.
pub fn user_updated(env: &Env, token_id: u64, user: &Option<Address>, expires: u64) {
    env.events()
        .publish((USER_UPDATED_TOPIC, token_id), (user.clone(), expires));
}

/// `from == None` is a mint, `to == None` a burn.
pub fn transfer(env: &Env, token_id: u64, from: Option<Address>, to: Option<Address>) {
    env.events().publish((TRANSFER_TOPIC, token_id), (from, to));
}

pub fn approval(env: &Env, token_id: u64, owner: &Address, approved: &Option<Address>) {
    env.events()
        .publish((APPROVAL_TOPIC, token_id), (owner.clone(), approved.clone()));
}

pub fn approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events()
        .publish((APPROVAL_ALL_TOPIC, owner.clone()), (operator.clone(), approved));
}
