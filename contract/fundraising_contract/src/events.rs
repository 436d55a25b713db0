use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationReceivedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_withdrawal(env: &Env, event: WithdrawalEvent) {
    env.events().publish((Symbol::new(env, "withdrawal"),), event);
}

pub fn emit_refund(env: &Env, event: RefundEvent) {
    env.events().publish((Symbol::new(env, "refund"),), event);
}
