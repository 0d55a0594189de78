use anchor_lang::prelude::*;

#[event]
pub struct SmartAccountLinked {
    pub owner: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct MigrationDelegationCreated {
    pub owner: Pubkey,
    pub agent: Pubkey,
    pub max_amount: u64,
    pub min_gain_bps: u16,
    pub cooldown_seconds: u64,
}

/// Sole record of a successful migration; indexers consume this, no funds move.
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct YieldOptimized {
    pub owner: Pubkey,
    pub from_chain: String,
    pub to_chain: String,
    pub amount: u64,
    pub net_gain_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct AutomationPaused {
    pub owner: Pubkey,
}

#[event]
pub struct DelegationRevoked {
    pub owner: Pubkey,
}
