use anchor_lang::prelude::*;

use crate::{constants::*, state::DelegationRecord};

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetConfig<'info> {
    /// CHECK: PDA derivation, read only
    #[account(
        seeds = [DELEGATION_SEED, owner.as_ref()],
        bump
    )]
    pub delegation: UncheckedAccount<'info>,
}

/// Unlinked owners get a zeroed record; check `owner` or `agent` for absence.
pub fn get_config(ctx: Context<GetConfig>, _owner: Pubkey) -> Result<DelegationRecord> {
    Ok(DelegationRecord::load(&ctx.accounts.delegation)?.unwrap_or_default())
}
