use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use rentable_lib::{
    ContractError, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, NAME_KEY, SYMBOL_KEY,
    TOKEN_COUNTER_KEY,
};

/// Persistent, per-entity keys. Collection-wide config lives in instance
/// storage under the `Symbol` keys from `rentable_lib`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner(u64),
    Balance(Address),
    Approved(u64),
    Operator(Address, Address),
    User(u64),
}

/* ---------------- METADATA ---------------- */

pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&Symbol::new(env, NAME_KEY), name);
}

pub fn get_name(env: &Env) -> Result<String, ContractError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, NAME_KEY))
        .ok_or(ContractError::NotInitialized)
}

pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, SYMBOL_KEY), symbol);
}

pub fn get_symbol(env: &Env) -> Result<String, ContractError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, SYMBOL_KEY))
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- COUNTER ---------------- */

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&Symbol::new(env, TOKEN_COUNTER_KEY))
        .unwrap_or(0)
}

pub fn set_token_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, TOKEN_COUNTER_KEY), &counter);
}

/* ---------------- TTL ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
