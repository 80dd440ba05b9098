use soroban_sdk::{symbol_short, Symbol};

pub const NAME_KEY: &str = "name";
pub const SYMBOL_KEY: &str = "symbol";
pub const TOKEN_COUNTER_KEY: &str = "token_counter";

// Event topics
pub const USER_UPDATED_TOPIC: Symbol = symbol_short!("user_upd");
pub const TRANSFER_TOPIC: Symbol = symbol_short!("transfer");
pub const APPROVAL_TOPIC: Symbol = symbol_short!("approval");
pub const APPROVAL_ALL_TOPIC: Symbol = symbol_short!("appr_all");
