use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, FundraisingError, PersistentKey, FIRST_CAMPAIGN_ID,
    TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn write_config(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::NextCampaignId, &FIRST_CAMPAIGN_ID);
    extend_instance(e);
}

pub fn read_token(e: &Env) -> Result<Address, FundraisingError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(FundraisingError::NotInitialized)
}

/// Hands out the next campaign id and advances the counter. Ids are never reused.
pub fn allocate_campaign_id(e: &Env) -> Result<CampaignId, FundraisingError> {
    let id: CampaignId = e
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(FundraisingError::NotInitialized)?;
    let next = id.checked_add(1).ok_or(FundraisingError::ArithmeticOverflow)?;
    e.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(e);
    Ok(id)
}

/// Number of campaigns created so far.
pub fn campaign_count(e: &Env) -> u64 {
    let next: CampaignId = e
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(FIRST_CAMPAIGN_ID);
    next - FIRST_CAMPAIGN_ID
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, FundraisingError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(FundraisingError::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn read_contribution(e: &Env, campaign_id: CampaignId, donor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, donor.clone()))
        .unwrap_or(0)
}

/// A zero balance drops the entry instead of storing it.
pub fn write_contribution(e: &Env, campaign_id: CampaignId, donor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, donor.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}
