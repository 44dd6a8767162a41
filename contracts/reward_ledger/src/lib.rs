#![no_std]

pub mod events;

use common::{admin, ttl};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Bytes, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const NAME: Symbol = symbol_short!("NAME");
const SYMBOL: Symbol = symbol_short!("SYMBOL");
const DECIMALS: Symbol = symbol_short!("DECIMALS");
const TOTAL_SUPPLY: Symbol = symbol_short!("TOT_SUP");

// Per-account persistent storage uses tuple keys:  (prefix, address)
const BALANCE: Symbol = symbol_short!("BAL");
const MINTER: Symbol = symbol_short!("MINTER");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    NotAuthorized = 2,
    InsufficientBalance = 3,
    InvalidAmount = 4,
    ArithmeticOverflow = 5,
    NoPendingAdmin = 6,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Fungible reward balance store.
///
/// New units only enter circulation through `mint`, which is gated on an
/// explicit, revocable set of authorized minter addresses kept in storage.
#[contract]
pub struct RewardLedgerContract;

#[contractimpl]
impl RewardLedgerContract {
    /// Deploy-time setup: administrator and token metadata.
    pub fn __constructor(env: Env, admin: Address, name: String, symbol: String, decimals: u32) {
        admin::set_admin(&env, &admin);
        env.storage().instance().set(&NAME, &name);
        env.storage().instance().set(&SYMBOL, &symbol);
        env.storage().instance().set(&DECIMALS, &decimals);
        env.storage().instance().set(&TOTAL_SUPPLY, &0i128);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, admin, name, symbol, decimals);
    }

    // ── Supply changes ──────────────────────────────────────────────────────

    /// Create `amount` new units for `to`.
    ///
    /// `minter` must authorize the call and be a member of the minter set.
    /// A contract calling in directly authorizes as itself. Membership is
    /// checked before the amount, and minting zero changes nothing.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        minter.require_auth();
        if !Self::is_minter(&env, &minter) {
            return Err(ContractError::NotAuthorized);
        }
        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let new_balance = Self::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let new_supply = Self::read_total_supply(&env)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        Self::write_balance(&env, &to, new_balance);
        env.storage().instance().set(&TOTAL_SUPPLY, &new_supply);
        ttl::extend_instance(&env);

        events::publish_minted(&env, minter, to, amount, new_supply);

        Ok(())
    }

    /// Destroy `amount` units held by `from`. Only the holder may burn.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        Self::require_positive(amount)?;

        let balance = Self::read_balance(&env, &from);
        if balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        let new_supply = Self::read_total_supply(&env)
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        Self::write_balance(&env, &from, balance - amount);
        env.storage().instance().set(&TOTAL_SUPPLY, &new_supply);
        ttl::extend_instance(&env);

        events::publish_burned(&env, from, amount, new_supply);

        Ok(())
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    /// Move `amount` units from `from` to `to`.
    ///
    /// `from` must authorize, either directly or through a contract it has
    /// delegated to in its authorization tree. `memo` is echoed in the
    /// transfer event and never stored.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        memo: Option<Bytes>,
    ) -> Result<(), ContractError> {
        from.require_auth();
        Self::require_positive(amount)?;

        let from_balance = Self::read_balance(&env, &from);
        if from_balance < amount {
            return Err(ContractError::InsufficientBalance);
        }

        if from != to {
            let to_balance = Self::read_balance(&env, &to)
                .checked_add(amount)
                .ok_or(ContractError::ArithmeticOverflow)?;
            Self::write_balance(&env, &from, from_balance - amount);
            Self::write_balance(&env, &to, to_balance);
        }
        ttl::extend_instance(&env);

        events::publish_transferred(&env, from, to, amount, memo);

        Ok(())
    }

    // ── Minter set ──────────────────────────────────────────────────────────

    /// Grant mint rights to `minter`. Granting twice is a no-op.
    pub fn authorize_minter(env: Env, admin: Address, minter: Address) -> Result<(), ContractError> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        let key = (MINTER, minter.clone());
        env.storage().persistent().set(&key, &true);
        ttl::extend_account_key(&env, &key);
        ttl::extend_instance(&env);

        events::publish_minter_authorized(&env, admin, minter);

        Ok(())
    }

    /// Withdraw mint rights from `minter`.
    pub fn revoke_minter(env: Env, admin: Address, minter: Address) -> Result<(), ContractError> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        env.storage().persistent().remove(&(MINTER, minter.clone()));
        ttl::extend_instance(&env);

        events::publish_minter_revoked(&env, admin, minter);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn name(env: Env) -> Result<String, ContractError> {
        env.storage()
            .instance()
            .get(&NAME)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        env.storage()
            .instance()
            .get(&SYMBOL)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        env.storage()
            .instance()
            .get(&DECIMALS)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        Self::read_total_supply(&env)
    }

    pub fn is_authorized_minter(env: Env, minter: Address) -> bool {
        Self::is_minter(&env, &minter)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. The nominee must call `accept_admin`.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        current_admin.require_auth();
        if !admin::propose_admin(&env, &current_admin, &new_admin) {
            return Err(ContractError::NotAuthorized);
        }
        ttl::extend_instance(&env);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the nominee can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        new_admin.require_auth();
        if admin::get_pending_admin(&env).is_none() {
            return Err(ContractError::NoPendingAdmin);
        }
        let old_admin =
            admin::accept_admin(&env, &new_admin).ok_or(ContractError::NotAuthorized)?;
        ttl::extend_instance(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;
        let pending = admin::cancel_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        ttl::extend_instance(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        admin::get_pending_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if admin::get_admin(env).is_none() {
            return Err(ContractError::NotInitialized);
        }
        if !admin::is_admin(env, caller) {
            return Err(ContractError::NotAuthorized);
        }
        Ok(())
    }

    fn require_positive(amount: i128) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        Ok(())
    }

    fn is_minter(env: &Env, minter: &Address) -> bool {
        let key = (MINTER, minter.clone());
        let authorized = env.storage().persistent().has(&key);
        if authorized {
            ttl::extend_account_key(env, &key);
        }
        authorized
    }

    fn read_total_supply(env: &Env) -> i128 {
        env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        let key = (BALANCE, id.clone());
        let balance: Option<i128> = env.storage().persistent().get(&key);
        if balance.is_some() {
            ttl::extend_account_key(env, &key);
        }
        balance.unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = (BALANCE, id.clone());
        env.storage().persistent().set(&key, &amount);
        ttl::extend_account_key(env, &key);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
