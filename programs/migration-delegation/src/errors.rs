use anchor_lang::prelude::*;

#[error_code]
pub enum DelegationError {
    #[msg("Smart account already linked")]
    AlreadyLinked,

    #[msg("Smart account not linked")]
    NotLinked,

    #[msg("Agent must be a non-default pubkey")]
    InvalidAgent,

    #[msg("Max amount must be greater than zero")]
    InvalidAmount,

    #[msg("Allowed chain set cannot be empty")]
    EmptyChainSet,

    #[msg("Minimum gain below 50 bps floor")]
    GainTooLow,

    #[msg("Delegation is not active")]
    NotActive,

    #[msg("Signer is not the delegated agent")]
    UnauthorizedAgent,

    #[msg("Amount exceeds delegation limit")]
    AmountExceedsLimit,

    #[msg("Net gain below delegation minimum")]
    InsufficientGain,

    #[msg("Cooldown period has not elapsed")]
    CooldownActive,

    #[msg("Chain not in allowed set")]
    ChainNotAllowed,

    #[msg("Allowed chain set exceeds 16 entries")]
    TooManyChains,

    #[msg("Chain name exceeds 32 bytes")]
    ChainNameTooLong,

    #[msg("Chain name cannot be empty")]
    EmptyChainName,

    #[msg("Math overflow")]
    MathOverflow,
}
