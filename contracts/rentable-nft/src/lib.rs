#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use rentable_lib::{
    admin,
    validation::{validate_initial_supply, validate_metadata},
    ContractError, UserInfo,
};

pub mod delegation;
pub mod events;
pub mod registry;
mod storage;

#[cfg(test)]
mod test_delegation;

use delegation::DelegationLedger;
use registry::{OwnerLookup, OwnershipRegistry};
use storage::*;

#[contract]
pub struct RentableNft;

fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !admin::has_admin(env) {
        return Err(ContractError::NotInitialized);
    }
    bump_instance(env);
    Ok(())
}

#[contractimpl]
impl RentableNft {
    /// Initialize the collection and mint ids `1..=initial_supply` to `admin`.
    pub fn init_contract(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        initial_supply: u64,
    ) -> Result<(), ContractError> {
        if admin::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        validate_metadata(&name)?;
        validate_metadata(&symbol)?;
        validate_initial_supply(initial_supply)?;

        admin::set_admin(&env, &admin);
        set_name(&env, &name);
        set_symbol(&env, &symbol);
        set_token_counter(&env, 0);
        bump_instance(&env);

        let registry = OwnershipRegistry::new(env.clone());
        for _ in 0..initial_supply {
            registry.mint(&admin)?;
        }

        log!(&env, "collection initialized", initial_supply);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Collection metadata and administration
    // ------------------------------------------------------------------

    pub fn name(env: Env) -> Result<String, ContractError> {
        get_name(&env)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        get_symbol(&env)
    }

    /// Number of token ids ever minted, burned ones included.
    pub fn total_minted(env: Env) -> u64 {
        get_token_counter(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env)
    }

    pub fn transfer_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        admin::transfer_admin(&env, &current_admin, &new_admin)
    }

    /// Mint the next token id to `to`. Admin only.
    pub fn mint(env: Env, admin: Address, to: Address) -> Result<u64, ContractError> {
        require_initialized(&env)?;
        admin.require_auth();
        admin::verify_admin(&env, &admin)?;

        OwnershipRegistry::new(env).mint(&to)
    }

    // ------------------------------------------------------------------
    // Ownership registry
    // ------------------------------------------------------------------

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, ContractError> {
        OwnershipRegistry::new(env).owner_of(token_id)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        OwnershipRegistry::new(env).balance_of(&owner)
    }

    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        OwnershipRegistry::new(env).get_approved(token_id)
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        OwnershipRegistry::new(env).is_approved_for_all(&owner, &operator)
    }

    pub fn approve(
        env: Env,
        caller: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        OwnershipRegistry::new(env).approve(&caller, approved, token_id)
    }

    pub fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        OwnershipRegistry::new(env).set_approval_for_all(&owner, &operator, approved);
        Ok(())
    }

    /// Move `token_id` from its owner `from` to `to`. Clears any user.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        let registry = OwnershipRegistry::new(env.clone());
        let ledger = DelegationLedger::new(env, &registry);
        registry.transfer(&from, &to, token_id, &ledger)
    }

    /// Move `token_id` on behalf of `from`. Clears any user.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        let registry = OwnershipRegistry::new(env.clone());
        let ledger = DelegationLedger::new(env, &registry);
        registry.transfer_from(&spender, &from, &to, token_id, &ledger)
    }

    pub fn burn(env: Env, owner: Address, token_id: u64) -> Result<(), ContractError> {
        require_initialized(&env)?;
        let registry = OwnershipRegistry::new(env.clone());
        let ledger = DelegationLedger::new(env, &registry);
        registry.burn(&owner, token_id, &ledger)
    }

    // ------------------------------------------------------------------
    // Rentals
    // ------------------------------------------------------------------

    /// Set the user of `token_id` until `expires` (ledger timestamp).
    ///
    /// `caller` must own the token. Pass `None` or a past `expires` to
    /// revoke.
    pub fn set_user(
        env: Env,
        caller: Address,
        token_id: u64,
        user: Option<Address>,
        expires: u64,
    ) -> Result<(), ContractError> {
        require_initialized(&env)?;
        let registry = OwnershipRegistry::new(env.clone());
        DelegationLedger::new(env, &registry).set_user(&caller, token_id, user, expires)
    }

    pub fn user_of(env: Env, token_id: u64) -> Option<Address> {
        let registry = OwnershipRegistry::new(env.clone());
        DelegationLedger::new(env, &registry).user_of(token_id)
    }

    pub fn user_expires(env: Env, token_id: u64) -> u64 {
        let registry = OwnershipRegistry::new(env.clone());
        DelegationLedger::new(env, &registry).user_expires(token_id)
    }

    pub fn user_info(env: Env, token_id: u64) -> Option<UserInfo> {
        let registry = OwnershipRegistry::new(env.clone());
        DelegationLedger::new(env, &registry).user_info(token_id)
    }
}
