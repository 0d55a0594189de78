use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::SmartAccountLinked,
    state::{DelegationRecord, RegistryStats},
};

#[derive(Accounts)]
pub struct LinkAccount<'info> {
    /// Existing records are rejected in the handler; they are never closed
    #[account(
        init_if_needed,
        payer = owner,
        space = DelegationRecord::LEN,
        seeds = [DELEGATION_SEED, owner.key().as_ref()],
        bump
    )]
    pub delegation: Account<'info, DelegationRecord>,

    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn link_account(ctx: Context<LinkAccount>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts
        .delegation
        .link(owner, now, ctx.bumps.delegation)?;
    ctx.accounts.registry_stats.record_link()?;

    msg!("Linked smart account {}", owner);
    emit!(SmartAccountLinked { owner });

    Ok(())
}
