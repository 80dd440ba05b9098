use soroban_sdk::String;

use crate::{errors::ContractError, MAX_INITIAL_SUPPLY, MAX_STRING_LENGTH};

pub fn validate_metadata(metadata: &String) -> Result<(), ContractError> {
    if metadata.len() == 0 || metadata.len() > MAX_STRING_LENGTH {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_initial_supply(supply: u64) -> Result<(), ContractError> {
    if supply > MAX_INITIAL_SUPPLY {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
