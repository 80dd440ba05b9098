use soroban_sdk::Env;

use rentable_lib::{UserInfo, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

use crate::storage::DataKey;

/// Handles all storage interactions for delegation records.
///
/// Records are kept in persistent storage so that a lapsed rental still
/// reports its last deadline through `user_expires`.
pub struct DelegationRepository {
    env: Env,
}

impl DelegationRepository {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    pub fn save(&self, token_id: u64, info: &UserInfo) {
        let key = DataKey::User(token_id);
        self.env.storage().persistent().set(&key, info);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    }

    pub fn load(&self, token_id: u64) -> Option<UserInfo> {
        self.env.storage().persistent().get(&DataKey::User(token_id))
    }

    /// Drop the record; absence reads as `UserInfo::vacant()`.
    pub fn clear(&self, token_id: u64) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::User(token_id));
    }
}
