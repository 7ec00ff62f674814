// Ledger TTL
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// PRECISIONS
/// Scale applied to reward rates and to the accumulated reward per unit of power.
pub const REWARD_PRECISION: i128 = 1_000_000_000_000_000_000; // expo = -18

// LIMITS
pub const MAX_REWARD_STREAMS: u32 = 10;
pub const MAX_TOKEN_LEVEL: u32 = 16;
/// Upper bound on the power of a single token, keeps per-block growth above zero.
pub const MAX_TOKEN_POWER: i128 = 1_000_000_000_000;
