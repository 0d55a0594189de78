/// PDA seeds
pub const DELEGATION_SEED: &[u8] = b"delegation";
pub const REGISTRY_STATS_SEED: &[u8] = b"registry_stats";

/// Floor for `min_gain_bps` on an active delegation (0.5%)
pub const MIN_GAIN_FLOOR_BPS: u16 = 50;

/// Allowed chain set bounds, sized into `DelegationRecord::LEN`
pub const MAX_ALLOWED_CHAINS: usize = 16;
pub const MAX_CHAIN_NAME_LEN: usize = 32;
