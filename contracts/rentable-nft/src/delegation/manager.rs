use soroban_sdk::{log, Address, Env};

use rentable_lib::{ContractError, UserInfo};

use super::repository::DelegationRepository;
use crate::{
    events,
    registry::{OwnerLookup, TransferHook},
};

/// Business rules for the user role.
///
/// Borrows the ownership source it authorizes against, so the same ledger
/// value can be handed to the registry as its `TransferHook`.
pub struct DelegationLedger<'a, R: OwnerLookup> {
    repo: DelegationRepository,
    owners: &'a R,
    env: Env,
}

impl<'a, R: OwnerLookup> DelegationLedger<'a, R> {
    pub fn new(env: Env, owners: &'a R) -> Self {
        Self {
            repo: DelegationRepository::new(env.clone()),
            owners,
            env,
        }
    }

    /// Grant `user` the use of `token_id` until `expires`.
    ///
    /// Only the current owner may call this; approved addresses and
    /// operators may move the token but not rent it out. `user == None` or
    /// an `expires` at or before now clears the delegation. The previous
    /// record is replaced unconditionally.
    pub fn set_user(
        &self,
        caller: &Address,
        token_id: u64,
        user: Option<Address>,
        expires: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let owner = self.owners.owner_of(token_id)?;
        if &owner != caller {
            return Err(ContractError::Unauthorized);
        }

        let info = UserInfo { user, expires };
        self.repo.save(token_id, &info);

        log!(&self.env, "user set", token_id, expires);
        events::user_updated(&self.env, token_id, &info.user, info.expires);
        Ok(())
    }

    /// Current user, or `None` if never rented, cleared, or lapsed.
    pub fn user_of(&self, token_id: u64) -> Option<Address> {
        let now = self.env.ledger().timestamp();
        self.repo
            .load(token_id)
            .and_then(|info| info.active_user(now))
    }

    /// Stored deadline, whether or not it has passed. `0` when no record.
    pub fn user_expires(&self, token_id: u64) -> u64 {
        self.repo
            .load(token_id)
            .map(|info| info.expires)
            .unwrap_or(0)
    }

    pub fn user_info(&self, token_id: u64) -> Option<UserInfo> {
        self.repo.load(token_id)
    }

    /// Void any delegation on `token_id`, whatever its deadline.
    pub fn on_ownership_changed(&self, token_id: u64, from: &Address, _to: Option<&Address>) {
        self.repo.clear(token_id);

        let vacant = UserInfo::vacant();
        log!(&self.env, "user cleared on transfer", token_id, from.clone());
        events::user_updated(&self.env, token_id, &vacant.user, vacant.expires);
    }
}

impl<'a, R: OwnerLookup> TransferHook for DelegationLedger<'a, R> {
    fn before_transfer(&self, token_id: u64, from: &Address, to: Option<&Address>) {
        self.on_ownership_changed(token_id, from, to);
    }
}
