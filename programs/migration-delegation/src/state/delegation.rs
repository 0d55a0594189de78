use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::DelegationError,
    events::{MigrationDelegationCreated, YieldOptimized},
};

/// Delegation terms supplied by the owner. Applied wholesale, never patched.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DelegationParams {
    pub agent: Pubkey,
    pub max_amount: u64,
    pub allowed_chains: Vec<String>,
    pub min_gain_bps: u16,
    pub cooldown_seconds: u64,
}

impl DelegationParams {
    pub fn validate(&self) -> Result<()> {
        require_keys_neq!(self.agent, Pubkey::default(), DelegationError::InvalidAgent);
        require!(self.max_amount > 0, DelegationError::InvalidAmount);
        require!(!self.allowed_chains.is_empty(), DelegationError::EmptyChainSet);
        require!(
            self.min_gain_bps >= MIN_GAIN_FLOOR_BPS,
            DelegationError::GainTooLow
        );

        // Storage bounds for the fixed-size account
        require!(
            self.allowed_chains.len() <= MAX_ALLOWED_CHAINS,
            DelegationError::TooManyChains
        );
        for chain in &self.allowed_chains {
            require!(!chain.is_empty(), DelegationError::EmptyChainName);
            require!(
                chain.len() <= MAX_CHAIN_NAME_LEN,
                DelegationError::ChainNameTooLong
            );
        }

        Ok(())
    }
}

/// A migration as reported by the agent. The net gain is taken as already net of costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationRequest {
    pub from_chain: String,
    pub to_chain: String,
    pub amount: u64,
    pub net_gain_bps: u16,
}

/// Per-owner delegation state.
///
/// PDA seeds: [DELEGATION_SEED, owner]
/// Created zeroed by `link_account` and never closed, so usage counters
/// survive pause and revoke.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DelegationRecord {
    /// Owner wallet; `Pubkey::default()` means the account was never linked
    pub owner: Pubkey,

    /// Wallet allowed to call `execute_migration`; default when none
    pub agent: Pubkey,

    /// Ceiling on a single migration amount
    pub max_amount: u64,

    /// Chains usable as source or destination, matched case-sensitively
    pub allowed_chains: Vec<String>,

    /// Minimum net gain per migration in basis points
    pub min_gain_bps: u16,

    /// Minimum seconds between consecutive migrations
    pub cooldown_seconds: u64,

    pub active: bool,

    /// Timestamp of the last successful migration
    pub last_migration_ts: Option<i64>,

    /// Sum of all migrated amounts
    pub total_optimized: u64,

    pub linked_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl DelegationRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // agent
        8 + // max_amount
        4 + MAX_ALLOWED_CHAINS * (4 + MAX_CHAIN_NAME_LEN) + // allowed_chains
        2 + // min_gain_bps
        8 + // cooldown_seconds
        1 + // active
        1 + 8 + // Option<last_migration_ts>
        8 + // total_optimized
        8 + // linked_at
        1 + // bump
        32; // _reserved

    pub fn is_linked(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn link(&mut self, owner: Pubkey, now: i64, bump: u8) -> Result<()> {
        require!(!self.is_linked(), DelegationError::AlreadyLinked);

        *self = Self {
            owner,
            linked_at: now,
            bump,
            ..Self::default()
        };
        Ok(())
    }

    /// Replaces every configurable field and activates the delegation.
    /// Usage history (`last_migration_ts`, `total_optimized`) is kept.
    pub fn configure(&mut self, params: DelegationParams) -> Result<MigrationDelegationCreated> {
        require!(self.is_linked(), DelegationError::NotLinked);
        params.validate()?;

        self.agent = params.agent;
        self.max_amount = params.max_amount;
        self.allowed_chains = params.allowed_chains;
        self.min_gain_bps = params.min_gain_bps;
        self.cooldown_seconds = params.cooldown_seconds;
        self.active = true;

        Ok(MigrationDelegationCreated {
            owner: self.owner,
            agent: self.agent,
            max_amount: self.max_amount,
            min_gain_bps: self.min_gain_bps,
            cooldown_seconds: self.cooldown_seconds,
        })
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn revoke(&mut self) {
        self.agent = Pubkey::default();
        self.active = false;
    }

    pub fn allows_chain(&self, chain: &str) -> bool {
        self.allowed_chains.iter().any(|allowed| allowed == chain)
    }

    pub fn cooldown_ends_at(&self) -> Option<i64> {
        let cooldown = i64::try_from(self.cooldown_seconds).unwrap_or(i64::MAX);
        self.last_migration_ts.map(|last| last.saturating_add(cooldown))
    }

    /// Checks a request against the current terms. First failing check wins.
    pub fn check_migration(
        &self,
        caller: &Pubkey,
        request: &MigrationRequest,
        now: i64,
    ) -> Result<()> {
        require!(self.active, DelegationError::NotActive);
        require_keys_eq!(*caller, self.agent, DelegationError::UnauthorizedAgent);
        require!(
            request.amount <= self.max_amount,
            DelegationError::AmountExceedsLimit
        );
        require!(
            request.net_gain_bps >= self.min_gain_bps,
            DelegationError::InsufficientGain
        );
        if let Some(ready_at) = self.cooldown_ends_at() {
            require!(now >= ready_at, DelegationError::CooldownActive);
        }
        require!(
            self.allows_chain(&request.from_chain) && self.allows_chain(&request.to_chain),
            DelegationError::ChainNotAllowed
        );
        Ok(())
    }

    /// Validates and applies a migration. Nothing is written unless every check passes.
    pub fn record_migration(
        &mut self,
        caller: &Pubkey,
        request: MigrationRequest,
        now: i64,
    ) -> Result<YieldOptimized> {
        self.check_migration(caller, &request, now)?;

        let total_optimized = self
            .total_optimized
            .checked_add(request.amount)
            .ok_or(DelegationError::MathOverflow)?;

        self.total_optimized = total_optimized;
        self.last_migration_ts = Some(now);

        Ok(YieldOptimized {
            owner: self.owner,
            from_chain: request.from_chain,
            to_chain: request.to_chain,
            amount: request.amount,
            net_gain_bps: request.net_gain_bps,
            timestamp: now,
        })
    }

    /// Reads the record behind a PDA that may not exist yet.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );

        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..]).map(Some)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
