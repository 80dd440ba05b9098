#![no_std]
pub mod admin;
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::ContractError;
pub use storage_keys::*;
pub use types::*;

/// Constants for input bounds
// Config
pub const ADMIN_KEY: &str = "admin";
pub const MAX_STRING_LENGTH: u32 = 64;
// Each mint costs persistent writes and an event; the whole batch has to fit
// in one invocation's CPU budget.
pub const MAX_INITIAL_SUPPLY: u64 = 100;

// Persistent entry TTLs, in ledgers (~5 s each).
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const PERSISTENT_TTL_EXTEND: u32 = 1_036_800; // ~60 days
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
pub const INSTANCE_TTL_EXTEND: u32 = 1_036_800;
