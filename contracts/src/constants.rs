//! Protocol constants.

/// Seconds in one round window; rounds alternate on every hour boundary.
pub const ROUND_LENGTH_SECS: u64 = 3600;
/// Seconds in one daily-claim epoch (UTC calendar day).
pub const DAY_SECS: u64 = 86_400;
/// Minimum time between two leaderboard resets (7 days).
pub const LEADERBOARD_RESET_PERIOD_SECS: u64 = 7 * DAY_SECS;

/// Allowed prediction durations in minutes: Common, Rare, Epic.
pub const DURATION_COMMON_MINUTES: u32 = 10;
pub const DURATION_RARE_MINUTES: u32 = 30;
pub const DURATION_EPIC_MINUTES: u32 = 60;

/// Oracle readings older than this are rejected.
pub const MAX_PRICE_AGE_SECS: u64 = 3600;
/// Prices are stored with 8 fractional digits (2000.0 => 2000_00000000).
pub const PRICE_DECIMALS: u32 = 8;

/// 0.1 of the fee token at 7 decimals.
pub const MINT_FEE: i128 = 1_000_000;

/// Points are stored in accounting units of 0.1 point.
pub const POINTS_SCALE: i128 = 10;
/// Flat penalty for a lost prediction (-0.5 points).
pub const LOSS_PENALTY: i128 = 5;
/// Daily check-in bonus (+1.0 point).
pub const DAILY_BONUS: i128 = 10;

/// Win rate is expressed in basis points (10000 = 100%).
pub const WIN_RATE_DENOMINATOR: u64 = 10_000;

pub const LEADERBOARD_CAP: u32 = 50;

pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
