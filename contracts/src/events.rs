//! Notifications published for off-chain consumers, in operation order.

use soroban_sdk::{contractevent, Address, Symbol};

use crate::types::{Outcome, Rarity};

#[contractevent(topics = ["minted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub token_id: u64,
    pub account: Address,
    pub asset: Symbol,
    pub entry_price: i128,
    pub resolve_time: u64,
    pub rarity: Rarity,
}

#[contractevent(topics = ["resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedEvent {
    pub token_id: u64,
    pub outcome: Outcome,
    pub result_price: i128,
}

#[contractevent(topics = ["materialized"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaterializedEvent {
    pub token_id: u64,
    pub owner: Address,
    pub fee: i128,
}

#[contractevent(topics = ["daily_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyClaimedEvent {
    pub account: Address,
    pub timestamp: u64,
}

#[contractevent(topics = ["leaderboard_reset"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardResetEvent {
    pub caller: Address,
    pub timestamp: u64,
}

#[contractevent(topics = ["fees_withdrawn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}
