use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{RegistryStats, StatsView},
};

#[derive(Accounts)]
pub struct GetStats<'info> {
    #[account(
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,
}

pub fn get_stats(ctx: Context<GetStats>) -> Result<StatsView> {
    Ok(ctx.accounts.registry_stats.snapshot())
}
