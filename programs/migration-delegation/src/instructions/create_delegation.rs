use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{DelegationParams, DelegationRecord},
};

#[derive(Accounts)]
pub struct CreateDelegation<'info> {
    /// Owner's record; a missing account fails as not linked
    /// CHECK: PDA derivation, contents deserialized in the handler
    #[account(
        mut,
        seeds = [DELEGATION_SEED, owner.key().as_ref()],
        bump
    )]
    pub delegation: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

pub fn create_delegation(
    ctx: Context<CreateDelegation>,
    agent: Pubkey,
    max_amount: u64,
    allowed_chains: Vec<String>,
    min_gain_bps: u16,
    cooldown_seconds: u64,
) -> Result<()> {
    let delegation = &ctx.accounts.delegation;
    let mut record = DelegationRecord::load(delegation)?.unwrap_or_default();

    let event = record.configure(DelegationParams {
        agent,
        max_amount,
        allowed_chains,
        min_gain_bps,
        cooldown_seconds,
    })?;
    record.store(delegation)?;

    msg!(
        "Delegation for {} set: agent {}, {} chains",
        record.owner,
        record.agent,
        record.allowed_chains.len()
    );
    emit!(event);

    Ok(())
}
