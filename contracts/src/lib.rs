#![no_std]
//! # Prediction Token Ledger
//!
//! Soroban contract for free directional price calls on crypto assets.
//! Each call is a permanent, individually owned prediction token that settles
//! against an oracle snapshot and can be minted to the owner's wallet for a fee.
//!
//! ## Key Features
//! - Hourly round rotation between two asset sets
//! - Duration tiers (10m Common, 30m Rare, 60m Epic) weighting settlement points
//! - Permissionless, exactly-once settlement against a staleness-checked oracle
//! - Fixed-point points with streaks and a once-per-UTC-day bonus
//! - Capped leaderboard with deterministic tie-breaks and weekly reset

#[cfg(test)]
extern crate std;

pub mod accounting;
pub mod constants;
mod contract;
mod errors;
mod events;
pub mod leaderboard;
pub mod oracle;
pub mod rounds;
mod types;

#[cfg(test)]
mod tests;

pub use accounting::Points;
pub use contract::{PredictionLedgerContract, PredictionLedgerContractClient};
pub use errors::ContractError;
pub use events::{
    DailyClaimedEvent, FeesWithdrawnEvent, LeaderboardResetEvent, MaterializedEvent, MintedEvent,
    ResolvedEvent,
};
pub use types::{
    DataKey, Direction, LeaderboardEntry, Outcome, PredictionToken, PriceData, Rarity, UserAccount,
    UserStats,
};
