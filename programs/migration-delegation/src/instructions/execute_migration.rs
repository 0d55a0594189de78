use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{DelegationRecord, MigrationRequest, RegistryStats},
};

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ExecuteMigration<'info> {
    /// A missing account reads as an inactive delegation
    /// CHECK: PDA derivation, contents deserialized in the handler
    #[account(
        mut,
        seeds = [DELEGATION_SEED, owner.as_ref()],
        bump
    )]
    pub delegation: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    pub agent: Signer<'info>,
}

/// Records an agent-reported migration. No funds move here; the
/// `YieldOptimized` event is what off-chain executors and indexers follow.
pub fn execute_migration(
    ctx: Context<ExecuteMigration>,
    owner: Pubkey,
    from_chain: String,
    to_chain: String,
    amount: u64,
    net_gain_bps: u16,
) -> Result<()> {
    let delegation = &ctx.accounts.delegation;
    let now = Clock::get()?.unix_timestamp;

    let mut record = DelegationRecord::load(delegation)?.unwrap_or_default();
    let event = record.record_migration(
        &ctx.accounts.agent.key(),
        MigrationRequest {
            from_chain,
            to_chain,
            amount,
            net_gain_bps,
        },
        now,
    )?;

    ctx.accounts.registry_stats.record_execution()?;
    record.store(delegation)?;

    msg!(
        "Migration for {}: {} -> {}, amount {}, gain {} bps",
        owner,
        event.from_chain,
        event.to_chain,
        event.amount,
        event.net_gain_bps
    );
    emit!(event);

    Ok(())
}
