#![no_std]

mod custody;
mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use events::{CampaignCreatedEvent, DonationReceivedEvent, RefundEvent, WithdrawalEvent};
pub use storage_types::{Campaign, CampaignId, FundraisingError};

use storage::{
    allocate_campaign_id, campaign_count, is_initialized, load_campaign, read_contribution,
    read_token, save_campaign, write_config, write_contribution,
};
use utils::{deadline_after, get_current_timestamp, is_past, validate_donation, validate_goal};

#[contract]
pub struct FundraisingContract;

#[contractimpl]
impl FundraisingContract {
    /// Bind the contract to the token it holds in custody.
    pub fn initialize(env: Env, token: Address) -> Result<(), FundraisingError> {
        if is_initialized(&env) {
            return Err(FundraisingError::AlreadyInitialized);
        }

        write_config(&env, &token);
        log!(&env, "fundraising initialized", token);
        Ok(())
    }

    /// Register a new campaign owned by `owner`, open for `duration` seconds.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        title: String,
        description: String,
        goal: i128,
        duration: u64,
    ) -> Result<CampaignId, FundraisingError> {
        owner.require_auth();
        validate_goal(goal)?;

        let created_at = get_current_timestamp(&env);
        let deadline = deadline_after(&env, duration)?;
        let campaign_id = allocate_campaign_id(&env)?;

        let campaign = Campaign {
            id: campaign_id,
            owner: owner.clone(),
            title: title.clone(),
            description: description.clone(),
            goal,
            amount_raised: 0,
            active: true,
            created_at,
            deadline,
        };
        save_campaign(&env, &campaign);

        log!(&env, "campaign created", campaign_id, deadline);
        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id,
                owner,
                title,
                description,
                goal,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Contribute `amount` to an open campaign. Repeat donations accumulate.
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), FundraisingError> {
        donor.require_auth();

        let mut campaign = load_campaign(&env, campaign_id)?;
        validate_donation(amount)?;
        if !campaign.active {
            return Err(FundraisingError::CampaignInactive);
        }
        if is_past(&env, campaign.deadline) {
            return Err(FundraisingError::DeadlineExpired);
        }

        let balance = read_contribution(&env, campaign_id, &donor)
            .checked_add(amount)
            .ok_or(FundraisingError::ArithmeticOverflow)?;
        campaign.amount_raised = campaign
            .amount_raised
            .checked_add(amount)
            .ok_or(FundraisingError::ArithmeticOverflow)?;

        custody::take_into_custody(&env, &donor, amount)?;

        write_contribution(&env, campaign_id, &donor, balance);
        save_campaign(&env, &campaign);

        log!(&env, "donation received", campaign_id, amount);
        events::emit_donation_received(
            &env,
            DonationReceivedEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Release everything raised to the owner once the deadline has passed
    /// with the goal met. Closes the campaign for good.
    pub fn withdraw(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), FundraisingError> {
        caller.require_auth();

        let mut campaign = load_campaign(&env, campaign_id)?;
        if !campaign.active {
            return Err(FundraisingError::CampaignInactive);
        }
        if caller != campaign.owner {
            return Err(FundraisingError::NotOwner);
        }
        if !is_past(&env, campaign.deadline) {
            return Err(FundraisingError::DeadlineNotPassed);
        }
        if campaign.amount_raised < campaign.goal {
            return Err(FundraisingError::GoalNotReached);
        }

        // amount_raised stays as the disbursed total
        campaign.active = false;
        save_campaign(&env, &campaign);

        let amount = campaign.amount_raised;
        custody::release_from_custody(&env, &campaign.owner, amount)?;

        log!(&env, "campaign withdrawn", campaign_id, amount);
        events::emit_withdrawal(
            &env,
            WithdrawalEvent {
                campaign_id,
                owner: campaign.owner,
                amount,
            },
        );

        Ok(())
    }

    /// Return the caller's whole contribution after the deadline, as long as
    /// the owner has not withdrawn. Goal attainment does not block refunds.
    pub fn refund(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), FundraisingError> {
        caller.require_auth();

        let mut campaign = load_campaign(&env, campaign_id)?;
        if !campaign.active {
            return Err(FundraisingError::CampaignInactive);
        }
        if !is_past(&env, campaign.deadline) {
            return Err(FundraisingError::DeadlineNotPassed);
        }
        if caller == campaign.owner {
            return Err(FundraisingError::OwnerCannotRefund);
        }

        let amount = read_contribution(&env, campaign_id, &caller);
        if amount <= 0 {
            return Err(FundraisingError::NothingToRefund);
        }

        campaign.amount_raised = campaign
            .amount_raised
            .checked_sub(amount)
            .ok_or(FundraisingError::ArithmeticOverflow)?;
        write_contribution(&env, campaign_id, &caller, 0);
        save_campaign(&env, &campaign);

        custody::release_from_custody(&env, &caller, amount)?;

        log!(&env, "contribution refunded", campaign_id, amount);
        events::emit_refund(
            &env,
            RefundEvent {
                campaign_id,
                donor: caller,
                amount,
            },
        );

        Ok(())
    }

    // View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, FundraisingError> {
        load_campaign(&env, campaign_id)
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, donor: Address) -> i128 {
        read_contribution(&env, campaign_id, &donor)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        campaign_count(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, FundraisingError> {
        read_token(&env)
    }

    pub fn has_expired(env: Env, campaign_id: CampaignId) -> Result<bool, FundraisingError> {
        let campaign = load_campaign(&env, campaign_id)?;
        Ok(is_past(&env, campaign.deadline))
    }

    pub fn is_goal_reached(env: Env, campaign_id: CampaignId) -> Result<bool, FundraisingError> {
        let campaign = load_campaign(&env, campaign_id)?;
        Ok(campaign.amount_raised >= campaign.goal)
    }
}
