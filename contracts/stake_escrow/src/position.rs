use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Per-account persistent storage uses tuple keys:  (prefix, account)
const POSITION: Symbol = symbol_short!("POS");
const STATS: Symbol = symbol_short!("STATS");

/// An account's single active lock. Absence of the entry means "not staked".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub amount: i128,
    pub lock_duration: u64,
    pub stake_time: u64,
    /// Always `stake_time + lock_duration`.
    pub unlock_time: u64,
}

/// Lifetime totals for an account. Created on first deposit, never removed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountStats {
    pub total_staked: i128,
    pub total_rewards: i128,
    pub stake_count: u32,
}

fn position_key(staker: &Address) -> (Symbol, Address) {
    (POSITION, staker.clone())
}

fn stats_key(staker: &Address) -> (Symbol, Address) {
    (STATS, staker.clone())
}

pub fn has_position(env: &Env, staker: &Address) -> bool {
    env.storage().persistent().has(&position_key(staker))
}

/// Read without touching the entry's TTL. Used by view functions.
pub fn read_position(env: &Env, staker: &Address) -> Option<StakePosition> {
    env.storage().persistent().get(&position_key(staker))
}

pub fn read_stats(env: &Env, staker: &Address) -> Option<AccountStats> {
    env.storage().persistent().get(&stats_key(staker))
}

/// Read for a state-changing call; a present entry gets its TTL extended.
pub fn get_position(env: &Env, staker: &Address) -> Option<StakePosition> {
    let key = position_key(staker);
    let position: Option<StakePosition> = env.storage().persistent().get(&key);
    if position.is_some() {
        ttl::extend_account_key(env, &key);
    }
    position
}

pub fn store_position(env: &Env, staker: &Address, position: &StakePosition) {
    let key = position_key(staker);
    env.storage().persistent().set(&key, position);
    ttl::extend_account_key(env, &key);
}

pub fn remove_position(env: &Env, staker: &Address) {
    env.storage().persistent().remove(&position_key(staker));
}

pub fn get_stats(env: &Env, staker: &Address) -> Option<AccountStats> {
    let key = stats_key(staker);
    let stats: Option<AccountStats> = env.storage().persistent().get(&key);
    if stats.is_some() {
        ttl::extend_account_key(env, &key);
    }
    stats
}

pub fn store_stats(env: &Env, staker: &Address, stats: &AccountStats) {
    let key = stats_key(staker);
    env.storage().persistent().set(&key, stats);
    ttl::extend_account_key(env, &key);
}
