use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{DelegationRecord, StatsView};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BmZ7FEfcYkg476zPFsLnS");

#[program]
pub mod migration_delegation {
    use super::*;

    /// Create the program-wide counters (once per deployment)
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    /// Register the signing wallet. Each wallet can link exactly once.
    pub fn link_account(ctx: Context<LinkAccount>) -> Result<()> {
        instructions::link_account(ctx)
    }

    /// Replace the delegation terms wholesale and activate automation
    pub fn create_delegation(
        ctx: Context<CreateDelegation>,
        agent: Pubkey,
        max_amount: u64,
        allowed_chains: Vec<String>,
        min_gain_bps: u16,
        cooldown_seconds: u64,
    ) -> Result<()> {
        instructions::create_delegation(
            ctx,
            agent,
            max_amount,
            allowed_chains,
            min_gain_bps,
            cooldown_seconds,
        )
    }

    /// Agent-signed migration report, validated against the owner's delegation
    pub fn execute_migration(
        ctx: Context<ExecuteMigration>,
        owner: Pubkey,
        from_chain: String,
        to_chain: String,
        amount: u64,
        net_gain_bps: u16,
    ) -> Result<()> {
        instructions::execute_migration(ctx, owner, from_chain, to_chain, amount, net_gain_bps)
    }

    /// Stop automation; the agent and terms are kept
    pub fn pause_automation(ctx: Context<PauseAutomation>) -> Result<()> {
        instructions::pause_automation(ctx)
    }

    /// Stop automation and clear the agent
    pub fn revoke_delegation(ctx: Context<RevokeDelegation>) -> Result<()> {
        instructions::revoke_delegation(ctx)
    }

    pub fn get_config(ctx: Context<GetConfig>, owner: Pubkey) -> Result<DelegationRecord> {
        instructions::get_config(ctx, owner)
    }

    pub fn get_stats(ctx: Context<GetStats>) -> Result<StatsView> {
        instructions::get_stats(ctx)
    }
}
