#![allow(deprecated)] // events().publish migration tracked separately

//! Escrow events. Every payload carries the `now` reading taken once by the
//! entry point that publishes it.

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the escrow is deployed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub custody_token: Address,
    pub reward_ledger: Address,
    pub timestamp: u64,
}

/// Fired when the escrow obtains mint rights on the reward ledger.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterGrantedEvent {
    pub admin: Address,
    pub reward_ledger: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub staker: Address,
    pub amount: i128,
    pub lock_duration: u64,
    pub unlock_time: u64,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a staker leaves early and forfeits the reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyExitEvent {
    pub staker: Address,
    pub amount: i128,
    pub forfeited_reward: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    custody_token: Address,
    reward_ledger: Address,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            custody_token,
            reward_ledger,
            timestamp: now,
        },
    );
}

pub fn publish_minter_granted(env: &Env, admin: Address, reward_ledger: Address, now: u64) {
    env.events().publish(
        (symbol_short!("MINTER"), reward_ledger.clone()),
        MinterGrantedEvent {
            admin,
            reward_ledger,
            timestamp: now,
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    staker: Address,
    amount: i128,
    lock_duration: u64,
    unlock_time: u64,
    new_total_staked: i128,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositedEvent {
            staker,
            amount,
            lock_duration,
            unlock_time,
            new_total_staked,
            timestamp: now,
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    reward: i128,
    new_total_staked: i128,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            reward,
            new_total_staked,
            timestamp: now,
        },
    );
}

pub fn publish_emergency_exit(
    env: &Env,
    staker: Address,
    amount: i128,
    forfeited_reward: i128,
    new_total_staked: i128,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("EMRG_EXIT"), staker.clone()),
        EmergencyExitEvent {
            staker,
            amount,
            forfeited_reward,
            new_total_staked,
            timestamp: now,
        },
    );
}

pub fn publish_paused(env: &Env, admin: Address, now: u64) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PauseChangedEvent {
            admin,
            timestamp: now,
        },
    );
}

pub fn publish_unpaused(env: &Env, admin: Address, now: u64) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        PauseChangedEvent {
            admin,
            timestamp: now,
        },
    );
}

pub fn publish_admin_transfer_proposed(
    env: &Env,
    current_admin: Address,
    proposed_admin: Address,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: now,
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address, now: u64) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: now,
        },
    );
}

pub fn publish_admin_transfer_cancelled(
    env: &Env,
    admin: Address,
    cancelled_proposed: Address,
    now: u64,
) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: now,
        },
    );
}
