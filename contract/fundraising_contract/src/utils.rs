use soroban_sdk::Env;

use crate::storage_types::FundraisingError;

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if timestamp is in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

/// Absolute deadline for a campaign starting now
pub fn deadline_after(env: &Env, duration: u64) -> Result<u64, FundraisingError> {
    get_current_timestamp(env)
        .checked_add(duration)
        .ok_or(FundraisingError::ArithmeticOverflow)
}

/// Validate goal is positive
pub fn validate_goal(goal: i128) -> Result<(), FundraisingError> {
    if goal <= 0 {
        return Err(FundraisingError::InvalidGoal);
    }
    Ok(())
}

/// Validate donation is positive
pub fn validate_donation(amount: i128) -> Result<(), FundraisingError> {
    if amount <= 0 {
        return Err(FundraisingError::InvalidDonation);
    }
    Ok(())
}
