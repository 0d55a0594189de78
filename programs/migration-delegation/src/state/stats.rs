use anchor_lang::prelude::*;

use crate::errors::DelegationError;

/// Program-wide counters. Singleton PDA seeded by `REGISTRY_STATS_SEED`.
#[account]
#[derive(Default)]
pub struct RegistryStats {
    /// Payer of the `initialize_registry` call
    pub authority: Pubkey,

    /// Successful `link_account` calls
    pub account_count: u64,

    /// Successful `execute_migration` calls
    pub execution_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl RegistryStats {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // account_count
        8 + // execution_count
        1 + // bump
        32; // _reserved

    pub fn record_link(&mut self) -> Result<()> {
        self.account_count = self
            .account_count
            .checked_add(1)
            .ok_or(DelegationError::MathOverflow)?;
        Ok(())
    }

    pub fn record_execution(&mut self) -> Result<()> {
        self.execution_count = self
            .execution_count
            .checked_add(1)
            .ok_or(DelegationError::MathOverflow)?;
        Ok(())
    }

    /// Cross-owner optimized value is not aggregated; `total_value_optimized` is always zero.
    pub fn snapshot(&self) -> StatsView {
        StatsView {
            account_count: self.account_count,
            execution_count: self.execution_count,
            total_value_optimized: 0,
        }
    }
}

/// Return data of `get_stats`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub account_count: u64,
    pub execution_count: u64,
    pub total_value_optimized: u64,
}
