use soroban_sdk::{contracttype, Address};

/// Delegation record for one token: who may use it, and until when.
///
/// Stored per token id in persistent storage. `user == None` is the
/// "no delegate" state; `expires` is an absolute ledger timestamp in
/// seconds and is kept even after it has passed so callers can tell a
/// lapsed rental from a token that was never rented.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserInfo {
    pub user: Option<Address>,
    pub expires: u64,
}

impl UserInfo {
    /// The record written when a delegation is invalidated.
    pub fn vacant() -> Self {
        Self {
            user: None,
            expires: 0,
        }
    }

    /// Returns `true` while `now` is strictly before `expires` and a user
    /// is set. A deadline equal to `now` has already lapsed.
    pub fn is_active_at(&self, now: u64) -> bool {
        self.user.is_some() && now < self.expires
    }

    /// The delegate as seen at `now`, or `None` once lapsed.
    pub fn active_user(&self, now: u64) -> Option<Address> {
        if self.is_active_at(now) {
            self.user.clone()
        } else {
            None
        }
    }
}
