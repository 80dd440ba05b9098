use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the token owner (or not the admin).
    Unauthorized = 3,
    /// Token id is not known to the registry.
    UnknownAsset = 4,
    /// Spender is neither owner, approved address nor operator.
    NotApproved = 5,
    InvalidInput = 6,
    ArithmeticOverflow = 7,
}
