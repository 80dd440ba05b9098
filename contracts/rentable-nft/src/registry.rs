use soroban_sdk::{log, Address, Env};

use rentable_lib::{ContractError, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

use crate::{
    events,
    storage::{get_token_counter, set_token_counter, DataKey},
};

/// Read access to the current owner of a token.
pub trait OwnerLookup {
    fn owner_of(&self, token_id: u64) -> Result<Address, ContractError>;
}

/// Called by the registry before ownership of a token changes.
///
/// `to == None` means the token is being burned. Implementations must not
/// fail: the registry has already validated the transfer.
pub trait TransferHook {
    fn before_transfer(&self, token_id: u64, from: &Address, to: Option<&Address>);
}

/// Token ownership, balances and transfer approvals.
///
/// Every ownership change goes through `move_token`, which invokes the
/// caller-supplied `TransferHook` before any owner entry is rewritten.
pub struct OwnershipRegistry {
    env: Env,
}

impl OwnershipRegistry {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn get_approved(&self, token_id: u64) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Approved(token_id))
    }

    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Operator(owner.clone(), operator.clone()))
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Minting
    // ------------------------------------------------------------------

    /// Mint the next token id to `to`. Ids start at 1.
    pub fn mint(&self, to: &Address) -> Result<u64, ContractError> {
        let token_id = get_token_counter(&self.env)
            .checked_add(1)
            .ok_or(ContractError::ArithmeticOverflow)?;

        self.add_balance(to)?;
        self.save_owner(token_id, to);
        set_token_counter(&self.env, token_id);

        events::transfer(&self.env, token_id, None, Some(to.clone()));
        Ok(token_id)
    }

    // ------------------------------------------------------------------
    // Approvals
    // ------------------------------------------------------------------

    /// Set (or clear, with `None`) the single-token approval. The caller
    /// must be the owner or one of the owner's operators.
    pub fn approve(
        &self,
        caller: &Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let owner = self.owner_of(token_id)?;
        if caller != &owner && !self.is_approved_for_all(&owner, caller) {
            return Err(ContractError::Unauthorized);
        }

        let key = DataKey::Approved(token_id);
        match &approved {
            Some(address) => {
                self.env.storage().persistent().set(&key, address);
                self.env.storage().persistent().extend_ttl(
                    &key,
                    PERSISTENT_TTL_THRESHOLD,
                    PERSISTENT_TTL_EXTEND,
                );
            }
            None => self.env.storage().persistent().remove(&key),
        }

        events::approval(&self.env, token_id, &owner, &approved);
        Ok(())
    }

    pub fn set_approval_for_all(&self, owner: &Address, operator: &Address, approved: bool) {
        owner.require_auth();

        let key = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            self.env.storage().persistent().set(&key, &true);
            self.env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_TTL_THRESHOLD,
                PERSISTENT_TTL_EXTEND,
            );
        } else {
            self.env.storage().persistent().remove(&key);
        }

        events::approval_for_all(&self.env, owner, operator, approved);
    }

    // ------------------------------------------------------------------
    // Ownership changes
    // ------------------------------------------------------------------

    /// Owner-initiated transfer.
    pub fn transfer(
        &self,
        from: &Address,
        to: &Address,
        token_id: u64,
        hook: &impl TransferHook,
    ) -> Result<(), ContractError> {
        from.require_auth();

        let owner = self.owner_of(token_id)?;
        if &owner != from {
            return Err(ContractError::Unauthorized);
        }

        self.move_token(token_id, from, Some(to), hook)
    }

    /// Transfer on behalf of `from` by its approved address or an operator.
    pub fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        token_id: u64,
        hook: &impl TransferHook,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        let owner = self.owner_of(token_id)?;
        if &owner != from {
            return Err(ContractError::Unauthorized);
        }
        if !self.is_approved_or_owner(spender, &owner, token_id) {
            return Err(ContractError::NotApproved);
        }

        self.move_token(token_id, from, Some(to), hook)
    }

    pub fn burn(
        &self,
        owner: &Address,
        token_id: u64,
        hook: &impl TransferHook,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        let current = self.owner_of(token_id)?;
        if &current != owner {
            return Err(ContractError::Unauthorized);
        }

        self.move_token(token_id, owner, None, hook)
    }

    fn is_approved_or_owner(&self, spender: &Address, owner: &Address, token_id: u64) -> bool {
        spender == owner
            || self.get_approved(token_id).as_ref() == Some(spender)
            || self.is_approved_for_all(owner, spender)
    }

    fn move_token(
        &self,
        token_id: u64,
        from: &Address,
        to: Option<&Address>,
        hook: &impl TransferHook,
    ) -> Result<(), ContractError> {
        if to != Some(from) {
            hook.before_transfer(token_id, from, to);
        }

        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Approved(token_id));

        match to {
            Some(to) if to == from => {}
            Some(to) => {
                self.sub_balance(from)?;
                self.add_balance(to)?;
                self.save_owner(token_id, to);
            }
            None => {
                self.sub_balance(from)?;
                self.env
                    .storage()
                    .persistent()
                    .remove(&DataKey::Owner(token_id));
            }
        }

        log!(&self.env, "token moved", token_id);
        events::transfer(&self.env, token_id, Some(from.clone()), to.cloned());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Storage helpers
    // ------------------------------------------------------------------

    fn save_owner(&self, token_id: u64, owner: &Address) {
        let key = DataKey::Owner(token_id);
        self.env.storage().persistent().set(&key, owner);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    }

    fn add_balance(&self, owner: &Address) -> Result<(), ContractError> {
        let next = self
            .balance_of(owner)
            .checked_add(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        self.save_balance(owner, next);
        Ok(())
    }

    fn sub_balance(&self, owner: &Address) -> Result<(), ContractError> {
        let next = self
            .balance_of(owner)
            .checked_sub(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        self.save_balance(owner, next);
        Ok(())
    }

    fn save_balance(&self, owner: &Address, balance: u64) {
        let key = DataKey::Balance(owner.clone());
        if balance == 0 {
            self.env.storage().persistent().remove(&key);
            return;
        }
        self.env.storage().persistent().set(&key, &balance);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    }
}

impl OwnerLookup for OwnershipRegistry {
    fn owner_of(&self, token_id: u64) -> Result<Address, ContractError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(ContractError::UnknownAsset)
    }
}
