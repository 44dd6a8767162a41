//! Fixed-rate lock reward schedule.
//!
//! ```text
//! base       = floor(amount * REWARD_RATE * lock_duration / RATE_PRECISION)
//! bonus_pct  = 100 + floor((lock_duration - MIN_LOCK) * 300 / MAX_LOCK)
//! reward     = floor(base * bonus_pct / 100)
//! ```
//!
//! Integer division floors at each step and only there; the order of
//! operations is part of the contract's observable behaviour.

/// Reward units per principal unit per clock unit, scaled by `RATE_PRECISION`.
pub const REWARD_RATE: i128 = 100;
pub const RATE_PRECISION: i128 = 1_000_000;

/// Shortest accepted lock, in clock units.
pub const MIN_LOCK: u64 = 144;
/// Longest accepted lock, in clock units.
pub const MAX_LOCK: u64 = 52_560;

const BASE_MULTIPLIER_PCT: i128 = 100;
const BONUS_SPAN_PCT: i128 = 300;

pub fn is_valid_lock(lock_duration: u64) -> bool {
    (MIN_LOCK..=MAX_LOCK).contains(&lock_duration)
}

/// Percentage multiplier for `lock_duration`: 100 at `MIN_LOCK`, rising
/// linearly towards 400 at `MAX_LOCK`.
pub fn bonus_multiplier_pct(lock_duration: u64) -> i128 {
    let extra = i128::from(lock_duration.saturating_sub(MIN_LOCK));
    BASE_MULTIPLIER_PCT + extra * BONUS_SPAN_PCT / i128::from(MAX_LOCK)
}

/// Reward owed for locking `amount` for `lock_duration`.
///
/// Returns `None` if an intermediate product overflows `i128`.
pub fn compute_reward(amount: i128, lock_duration: u64) -> Option<i128> {
    let base = amount
        .checked_mul(REWARD_RATE)?
        .checked_mul(i128::from(lock_duration))?
        / RATE_PRECISION;
    Some(base.checked_mul(bonus_multiplier_pct(lock_duration))? / 100)
}
