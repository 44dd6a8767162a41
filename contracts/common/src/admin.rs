//! Single-admin bookkeeping with a two-step ownership transfer.
//!
//! The helpers never call `require_auth()` themselves: entry points
//! authenticate the caller first and then map the `bool`/`Option` results
//! below onto their own error enums.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

/// Stores `admin` as the contract administrator.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Returns the stored administrator, if the contract has been constructed.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Returns `true` when `caller` is the stored administrator.
pub fn is_admin(env: &Env, caller: &Address) -> bool {
    get_admin(env).is_some_and(|admin| admin == *caller)
}

/// Returns the address nominated by `propose_admin`, if any.
pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

/// Nominates `new_admin`. Returns `false` if `caller` is not the admin.
pub fn propose_admin(env: &Env, caller: &Address, new_admin: &Address) -> bool {
    if !is_admin(env, caller) {
        return false;
    }
    env.storage().instance().set(&PENDING_ADMIN, new_admin);
    true
}

/// Completes a pending transfer.
///
/// Returns the previous admin on success, or `None` when there is no pending
/// nomination or `caller` is not the nominee.
pub fn accept_admin(env: &Env, caller: &Address) -> Option<Address> {
    let pending = get_pending_admin(env)?;
    if pending != *caller {
        return None;
    }
    let old_admin = get_admin(env)?;
    set_admin(env, caller);
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(old_admin)
}

/// Drops the pending nomination and returns it.
///
/// Returns `None` when nothing is pending. Callers must check admin rights
/// beforehand.
pub fn cancel_pending_admin(env: &Env) -> Option<Address> {
    let pending = get_pending_admin(env)?;
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(pending)
}
