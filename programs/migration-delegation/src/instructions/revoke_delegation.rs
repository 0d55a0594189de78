use anchor_lang::prelude::*;

use crate::{constants::*, events::DelegationRevoked, state::DelegationRecord};

#[derive(Accounts)]
pub struct RevokeDelegation<'info> {
    /// CHECK: PDA derivation; may not exist, revoking still succeeds
    #[account(
        mut,
        seeds = [DELEGATION_SEED, owner.key().as_ref()],
        bump
    )]
    pub delegation: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

pub fn revoke_delegation(ctx: Context<RevokeDelegation>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let delegation = &ctx.accounts.delegation;

    if let Some(mut record) = DelegationRecord::load(delegation)? {
        record.revoke();
        record.store(delegation)?;
    }

    msg!("Delegation revoked for {}", owner);
    emit!(DelegationRevoked { owner });

    Ok(())
}
