//! Type definitions for the prediction ledger.

use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::constants::{DURATION_COMMON_MINUTES, DURATION_EPIC_MINUTES, DURATION_RARE_MINUTES};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Oracle,
    FeeToken,
    NextTokenId,
    LastLeaderboardReset,
    CollectedFees,
    Token(u64),
    Account(Address),
    OwnerTokens(Address),
    Leaderboard,
}

/// Which way the caller expects the price to move
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parses the `UP` / `DOWN` symbols accepted by `mint`.
    pub fn from_symbol(symbol: &Symbol) -> Option<Direction> {
        if *symbol == symbol_short!("UP") {
            Some(Direction::Up)
        } else if *symbol == symbol_short!("DOWN") {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Duration tier of a prediction token
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

impl Rarity {
    pub fn from_duration(minutes: u32) -> Option<Rarity> {
        match minutes {
            DURATION_COMMON_MINUTES => Some(Rarity::Common),
            DURATION_RARE_MINUTES => Some(Rarity::Rare),
            DURATION_EPIC_MINUTES => Some(Rarity::Epic),
            _ => None,
        }
    }

    /// Multiplier applied to the base win award.
    pub fn weight(&self) -> i128 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Pending,
    Win,
    Lose,
}

/// A permanent record of one directional price call.
///
/// `result_price` is `Some` and `outcome` is not `Pending` exactly when
/// `resolved` is true.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionToken {
    pub id: u64,
    pub owner: Address,
    pub asset: Symbol,
    pub direction: Direction,
    pub entry_price: i128,        // 8 fractional digits
    pub result_price: Option<i128>,
    pub mint_time: u64,
    pub resolve_time: u64,        // mint_time + duration
    pub rarity: Rarity,
    pub outcome: Outcome,
    pub resolved: bool,
    pub minted_to_wallet: bool,
}

/// Per-user points and counters; created lazily on first interaction.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserAccount {
    pub points: i128, // accounting units of 0.1 point, may be negative
    pub wins: u32,
    pub losses: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub last_claim_epoch: Option<u64>,
}

/// Read-only view returned by `get_user_stats`
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserStats {
    pub points: i128,
    pub wins: u32,
    pub losses: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub win_rate: u32,         // basis points
    pub next_claim_epoch: u64, // 0 if never claimed
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub account: Address,
    pub points: i128,
    pub win_rate: u32,
}

/// Raw reading returned by the oracle gateway
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}
