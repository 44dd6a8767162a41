#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Bytes, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is deployed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub minter: Address,
    pub to: Address,
    pub amount: i128,
    pub new_total_supply: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnedEvent {
    pub from: Address,
    pub amount: i128,
    pub new_total_supply: i128,
    pub timestamp: u64,
}

/// Fired on every transfer. The memo lives only here, never in storage.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub memo: Option<Bytes>,
    pub timestamp: u64,
}

/// Fired when the minter set changes in either direction.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChangedEvent {
    pub admin: Address,
    pub minter: Address,
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

pub fn publish_initialized(env: &Env, admin: Address, name: String, symbol: String, decimals: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            name,
            symbol,
            decimals,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minted(env: &Env, minter: Address, to: Address, amount: i128, new_total_supply: i128) {
    env.events().publish(
        (symbol_short!("MINT"), to.clone()),
        MintedEvent {
            minter,
            to,
            amount,
            new_total_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_burned(env: &Env, from: Address, amount: i128, new_total_supply: i128) {
    env.events().publish(
        (symbol_short!("BURN"), from.clone()),
        BurnedEvent {
            from,
            amount,
            new_total_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_transferred(env: &Env, from: Address, to: Address, amount: i128, memo: Option<Bytes>) {
    env.events().publish(
        (symbol_short!("TRANSFER"), from.clone(), to.clone()),
        TransferredEvent {
            from,
            to,
            amount,
            memo,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minter_authorized(env: &Env, admin: Address, minter: Address) {
    env.events().publish(
        (symbol_short!("MNTR_ADD"), minter.clone()),
        MinterChangedEvent {
            admin,
            minter,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minter_revoked(env: &Env, admin: Address, minter: Address) {
    env.events().publish(
        (symbol_short!("MNTR_REV"), minter.clone()),
        MinterChangedEvent {
            admin,
            minter,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
