use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignID, Donor) -> amount not yet refunded
}

pub type CampaignId = u64;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub amount_raised: i128,   // Held in custody; kept as the disbursed total after withdrawal
    pub active: bool,          // Cleared once, by a successful withdrawal
    pub created_at: u64,
    pub deadline: u64,         // created_at + duration
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundraisingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidGoal = 4,
    InvalidDonation = 5,
    CampaignInactive = 6,
    DeadlineExpired = 7,
    DeadlineNotPassed = 8,
    NotOwner = 9,
    GoalNotReached = 10,
    OwnerCannotRefund = 11,
    NothingToRefund = 12,
    ArithmeticOverflow = 13,
}

// Constants
pub const FIRST_CAMPAIGN_ID: CampaignId = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
