//! Storage TTL bumping shared by every contract in the workspace.
//!
//! Ledger counts are in ledgers (roughly five seconds each): entries are
//! topped back up to ~60 days whenever fewer than ~30 days remain.

use soroban_sdk::{Address, Env, Symbol};

pub const TTL_THRESHOLD: u32 = 518_400;
pub const TTL_EXTEND_TO: u32 = 1_036_800;

/// Extends the TTL of the calling contract's instance storage.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of an account-keyed persistent entry, if it exists.
pub fn extend_account_key(env: &Env, key: &(Symbol, Address)) {
    if env.storage().persistent().has(key) {
        env.storage()
            .persistent()
            .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
