use anchor_lang::prelude::*;

use crate::{constants::*, events::AutomationPaused, state::DelegationRecord};

#[derive(Accounts)]
pub struct PauseAutomation<'info> {
    /// CHECK: PDA derivation; may not exist, pausing still succeeds
    #[account(
        mut,
        seeds = [DELEGATION_SEED, owner.key().as_ref()],
        bump
    )]
    pub delegation: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

/// Never fails for the owner, whatever the record's state.
pub fn pause_automation(ctx: Context<PauseAutomation>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let delegation = &ctx.accounts.delegation;

    if let Some(mut record) = DelegationRecord::load(delegation)? {
        record.pause();
        record.store(delegation)?;
    }

    msg!("Automation paused for {}", owner);
    emit!(AutomationPaused { owner });

    Ok(())
}
