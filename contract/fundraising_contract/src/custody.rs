use soroban_sdk::{token, Address, Env};

use crate::storage::read_token;
use crate::storage_types::FundraisingError;

/// Move `amount` of the custody token from `from` into the contract.
pub fn take_into_custody(e: &Env, from: &Address, amount: i128) -> Result<(), FundraisingError> {
    let token_address = read_token(e)?;
    let token_client = token::TokenClient::new(e, &token_address);
    token_client.transfer(from, &e.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` out of the contract's custody to `to`.
pub fn release_from_custody(e: &Env, to: &Address, amount: i128) -> Result<(), FundraisingError> {
    if amount <= 0 {
        return Ok(());
    }

    let token_address = read_token(e)?;
    let token_client = token::TokenClient::new(e, &token_address);
    token_client.transfer(&e.current_contract_address(), to, &amount);
    Ok(())
}
