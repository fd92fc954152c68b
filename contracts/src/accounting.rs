//! Points and streak accounting.
//!
//! Points are integers in accounting units of 0.1 point. Division by
//! `POINTS_SCALE` happens only in [`Points`]'s `Display` impl.

use core::fmt;

use crate::constants::{DAILY_BONUS, DAY_SECS, LOSS_PENALTY, POINTS_SCALE, WIN_RATE_DENOMINATOR};
use crate::errors::ContractError;
use crate::types::{Outcome, Rarity, UserAccount, UserStats};

/// Settles one prediction outcome into the account.
pub fn apply_outcome(account: &mut UserAccount, rarity: Rarity, outcome: Outcome) -> Result<(), ContractError> {
    match outcome {
        Outcome::Win => {
            let award = rarity
                .weight()
                .checked_mul(POINTS_SCALE)
                .ok_or(ContractError::Overflow)?;
            account.points = account.points
                .checked_add(award)
                .ok_or(ContractError::Overflow)?;
            account.wins = account.wins
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
            account.streak = account.streak
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
            if account.streak > account.best_streak {
                account.best_streak = account.streak;
            }
        },
        Outcome::Lose => {
            account.points = account.points
                .checked_sub(LOSS_PENALTY)
                .ok_or(ContractError::Overflow)?;
            account.losses = account.losses
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
            account.streak = 0;
        },
        Outcome::Pending => {},
    }

    Ok(())
}

/// UTC calendar day index; the boundary is 00:00 UTC.
pub fn epoch_of(now: u64) -> u64 {
    now / DAY_SECS
}

/// Credits the daily bonus once per UTC day.
pub fn claim_daily(account: &mut UserAccount, now: u64) -> Result<(), ContractError> {
    let epoch = epoch_of(now);
    if account.last_claim_epoch == Some(epoch) {
        return Err(ContractError::AlreadyClaimedToday);
    }

    account.points = account.points
        .checked_add(DAILY_BONUS)
        .ok_or(ContractError::Overflow)?;
    account.last_claim_epoch = Some(epoch);

    Ok(())
}

/// Seconds until the next UTC midnight if already claimed today, else 0.
pub fn time_until_next_claim(account: &UserAccount, now: u64) -> u64 {
    let epoch = epoch_of(now);
    if account.last_claim_epoch == Some(epoch) {
        (epoch + 1) * DAY_SECS - now
    } else {
        0
    }
}

/// Win rate in basis points; 0 with no resolved tokens.
pub fn win_rate(wins: u32, losses: u32) -> u32 {
    let total = wins as u64 + losses as u64;
    if total == 0 {
        return 0;
    }
    (wins as u64 * WIN_RATE_DENOMINATOR / total) as u32
}

pub fn stats_of(account: &UserAccount) -> UserStats {
    UserStats {
        points: account.points,
        wins: account.wins,
        losses: account.losses,
        streak: account.streak,
        best_streak: account.best_streak,
        win_rate: win_rate(account.wins, account.losses),
        next_claim_epoch: account.last_claim_epoch.map(|epoch| epoch + 1).unwrap_or(0),
    }
}

/// Display wrapper for accounting units: `15` renders as `1.5`, `-5` as `-0.5`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Points(pub i128);

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = POINTS_SCALE as u128;
        write!(f, "{}{}.{}", sign, magnitude / scale, magnitude % scale)
    }
}
