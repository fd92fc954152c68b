//! Round rotation and the asset registry.
//!
//! Rounds are a pure function of the ledger timestamp: even UTC hours run
//! round 1, odd hours run round 2. Nothing is stored and nothing is scheduled;
//! callers evaluate these on every call.

use soroban_sdk::{symbol_short, Env, Symbol, Vec};

use crate::constants::ROUND_LENGTH_SECS;

pub const ROUND_ONE: u32 = 1;
pub const ROUND_TWO: u32 = 2;

const ASSET_REGISTRY: [(Symbol, u32); 5] = [
    (symbol_short!("ETH"), ROUND_ONE),
    (symbol_short!("QIE"), ROUND_ONE),
    (symbol_short!("BTC"), ROUND_ONE),
    (symbol_short!("XRP"), ROUND_TWO),
    (symbol_short!("SOL"), ROUND_TWO),
];

/// Round in effect at `now`: `(hourOf(now) mod 2) + 1`.
///
/// A UTC day has an even number of hours, so the parity of the hour of day
/// equals the parity of the absolute hour count.
pub fn current_round(now: u64) -> u32 {
    ((now / ROUND_LENGTH_SECS) % 2) as u32 + 1
}

/// Every hour boundary flips the round.
pub fn seconds_until_next_round(now: u64) -> u64 {
    ROUND_LENGTH_SECS - now % ROUND_LENGTH_SECS
}

/// Round an asset belongs to, or `None` for unknown symbols.
pub fn round_of(asset: &Symbol) -> Option<u32> {
    ASSET_REGISTRY
        .iter()
        .find(|(symbol, _)| symbol == asset)
        .map(|(_, round)| *round)
}

pub fn active_assets(env: &Env, round: u32) -> Vec<Symbol> {
    let mut assets = Vec::new(env);
    for (symbol, asset_round) in ASSET_REGISTRY.iter() {
        if *asset_round == round {
            assets.push_back(symbol.clone());
        }
    }
    assets
}

pub fn is_asset_active(asset: &Symbol, now: u64) -> bool {
    round_of(asset) == Some(current_round(now))
}
