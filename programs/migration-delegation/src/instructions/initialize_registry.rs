use anchor_lang::prelude::*;

use crate::{constants::*, state::RegistryStats};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = authority,
        space = RegistryStats::LEN,
        seeds = [REGISTRY_STATS_SEED],
        bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry_stats = &mut ctx.accounts.registry_stats;

    registry_stats.authority = ctx.accounts.authority.key();
    registry_stats.account_count = 0;
    registry_stats.execution_count = 0;
    registry_stats.bump = ctx.bumps.registry_stats;

    msg!("Registry initialized by {}", registry_stats.authority);

    Ok(())
}
