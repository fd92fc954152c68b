//! Capped points leaderboard.
//!
//! Ordering is total: points descending, then win rate descending, then
//! account address ascending. Only the top `LEADERBOARD_CAP` entries are kept.

use core::cmp::Ordering;

use soroban_sdk::{Address, Env, Vec};

use crate::accounting::win_rate;
use crate::constants::{BUMP_AMOUNT, BUMP_THRESHOLD, LEADERBOARD_CAP};
use crate::types::{DataKey, LeaderboardEntry, UserAccount};

pub fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.win_rate.cmp(&a.win_rate))
        .then_with(|| a.account.cmp(&b.account))
}

pub fn snapshot(account: &Address, user: &UserAccount) -> LeaderboardEntry {
    LeaderboardEntry {
        account: account.clone(),
        points: user.points,
        win_rate: win_rate(user.wins, user.losses),
    }
}

/// Replaces any existing entry for the same account and inserts `entry` at
/// its ranked position. Entries pushed past the cap are dropped.
pub fn insert_ranked(board: &mut Vec<LeaderboardEntry>, entry: LeaderboardEntry) {
    for i in 0..board.len() {
        if let Some(existing) = board.get(i) {
            if existing.account == entry.account {
                board.remove(i);
                break;
            }
        }
    }

    let mut position = board.len();
    for i in 0..board.len() {
        if let Some(existing) = board.get(i) {
            if compare(&entry, &existing) == Ordering::Less {
                position = i;
                break;
            }
        }
    }

    if position >= LEADERBOARD_CAP {
        return;
    }

    board.insert(position, entry);
    while board.len() > LEADERBOARD_CAP {
        board.pop_back();
    }
}

pub fn load(env: &Env) -> Vec<LeaderboardEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Leaderboard)
        .unwrap_or(Vec::new(env))
}

pub fn upsert(env: &Env, account: &Address, user: &UserAccount) {
    let mut board = load(env);
    insert_ranked(&mut board, snapshot(account, user));
    save(env, &board);
}

/// Clears the ranking. Accounts keep their points and counters.
pub fn clear(env: &Env) {
    env.storage().persistent().remove(&DataKey::Leaderboard);
}

/// 1-based position of `account`, if retained.
pub fn rank_of(env: &Env, account: &Address) -> Option<u32> {
    let board = load(env);
    for i in 0..board.len() {
        if let Some(entry) = board.get(i) {
            if entry.account == *account {
                return Some(i + 1);
            }
        }
    }
    None
}

fn save(env: &Env, board: &Vec<LeaderboardEntry>) {
    let key = DataKey::Leaderboard;
    env.storage().persistent().set(&key, board);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
