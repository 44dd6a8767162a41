#![no_std]

pub mod events;
pub mod ledger;
pub mod position;
pub mod reward;

use common::{admin, ttl};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol};

use ledger::RewardLedgerClient;
pub use position::{AccountStats, StakePosition};

// ── Storage key constants ────────────────────────────────────────────────────

const CUSTODY_TOKEN: Symbol = symbol_short!("CUST_TOK");
const REWARD_LEDGER: Symbol = symbol_short!("RWD_LDG");
const PAUSED: Symbol = symbol_short!("PAUSED");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
const TOTAL_REWARDS: Symbol = symbol_short!("TOT_RWD");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    Unauthorized = 2,
    Paused = 3,
    ZeroAmount = 4,
    AlreadyStaked = 5,
    InvalidLockDuration = 6,
    NoStakeFound = 7,
    StillLocked = 8,
    RewardMintFailed = 9,
    InsufficientBalance = 10,
    MinterNotAuthorized = 11,
    ArithmeticOverflow = 12,
    NoPendingAdmin = 13,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Outcome of a successful `withdraw`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub amount: i128,
    pub reward: i128,
}

/// Deployment configuration and the fixed reward schedule constants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub admin: Address,
    pub custody_token: Address,
    pub reward_ledger: Address,
    pub min_lock: u64,
    pub max_lock: u64,
    pub reward_rate: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakeEscrowContract;

#[contractimpl]
impl StakeEscrowContract {
    // ── Deployment ──────────────────────────────────────────────────────────

    /// * `custody_token` – SAC address of the native asset held in escrow.
    /// * `reward_ledger` – ledger contract that mints rewards on withdrawal.
    pub fn __constructor(env: Env, admin: Address, custody_token: Address, reward_ledger: Address) {
        let now = Self::now(&env);

        admin::set_admin(&env, &admin);
        env.storage().instance().set(&CUSTODY_TOKEN, &custody_token);
        env.storage().instance().set(&REWARD_LEDGER, &reward_ledger);
        env.storage().instance().set(&PAUSED, &false);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, admin, custody_token, reward_ledger, now);
    }

    /// Ask the reward ledger to add this contract to its minter set.
    ///
    /// The escrow admin must also administer the ledger; the ledger's refusal
    /// is reported as `Unauthorized`. Repeating the call is harmless.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        let now = Self::now(&env);
        Self::require_admin(&env, &admin)?;

        let reward_ledger = Self::reward_ledger(&env)?;
        let escrow = env.current_contract_address();
        let granted =
            RewardLedgerClient::new(&env, &reward_ledger).try_authorize_minter(&admin, &escrow);
        if !matches!(granted, Ok(Ok(()))) {
            return Err(ContractError::Unauthorized);
        }
        ttl::extend_instance(&env);

        events::publish_minter_granted(&env, admin, reward_ledger, now);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` of the custody asset for `lock_duration` clock units.
    ///
    /// Every check runs before the custody transfer, so a rejected deposit
    /// leaves no trace. Returns the unlock time.
    pub fn deposit(
        env: Env,
        staker: Address,
        amount: i128,
        lock_duration: u64,
    ) -> Result<u64, ContractError> {
        staker.require_auth();
        let now = Self::now(&env);

        if Self::read_paused(&env) {
            return Err(ContractError::Paused);
        }
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if position::has_position(&env, &staker) {
            return Err(ContractError::AlreadyStaked);
        }
        if !reward::is_valid_lock(lock_duration) {
            return Err(ContractError::InvalidLockDuration);
        }
        // A position whose reward cannot be computed could never be withdrawn.
        reward::compute_reward(amount, lock_duration).ok_or(ContractError::ArithmeticOverflow)?;
        let unlock_time = now
            .checked_add(lock_duration)
            .ok_or(ContractError::ArithmeticOverflow)?;

        let escrow = env.current_contract_address();
        let reward_ledger = Self::reward_ledger(&env)?;
        if !RewardLedgerClient::new(&env, &reward_ledger).is_authorized_minter(&escrow) {
            return Err(ContractError::MinterNotAuthorized);
        }

        let custody = token::Client::new(&env, &Self::custody_token(&env)?);
        if custody.balance(&staker) < amount {
            return Err(ContractError::InsufficientBalance);
        }
        custody.transfer(&staker, &escrow, &amount);

        let new_total = Self::read_total_staked(&env)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        env.storage().instance().set(&TOTAL_STAKED, &new_total);

        position::store_position(
            &env,
            &staker,
            &StakePosition {
                amount,
                lock_duration,
                stake_time: now,
                unlock_time,
            },
        );

        let mut stats = position::get_stats(&env, &staker).unwrap_or_default();
        stats.total_staked = stats
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        stats.stake_count = stats.stake_count.saturating_add(1);
        position::store_stats(&env, &staker, &stats);
        ttl::extend_instance(&env);

        events::publish_deposited(&env, staker, amount, lock_duration, unlock_time, new_total, now);

        Ok(unlock_time)
    }

    /// Return the principal and mint the reward once the lock has expired.
    ///
    /// The custody transfer, the bookkeeping and the mint form one unit: a
    /// rejected mint turns into `RewardMintFailed`, and returning an error
    /// rolls back everything this invocation already did.
    pub fn withdraw(env: Env, staker: Address) -> Result<Withdrawal, ContractError> {
        staker.require_auth();
        let now = Self::now(&env);

        let position = position::get_position(&env, &staker).ok_or(ContractError::NoStakeFound)?;
        if now < position.unlock_time {
            return Err(ContractError::StillLocked);
        }
        let reward = reward::compute_reward(position.amount, position.lock_duration)
            .ok_or(ContractError::ArithmeticOverflow)?;

        let escrow = env.current_contract_address();
        token::Client::new(&env, &Self::custody_token(&env)?).transfer(
            &escrow,
            &staker,
            &position.amount,
        );
        position::remove_position(&env, &staker);

        let new_total = Self::read_total_staked(&env)
            .checked_sub(position.amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        env.storage().instance().set(&TOTAL_STAKED, &new_total);

        let total_rewards = Self::read_total_rewards(&env)
            .checked_add(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;
        env.storage().instance().set(&TOTAL_REWARDS, &total_rewards);

        let mut stats = position::get_stats(&env, &staker).unwrap_or_default();
        stats.total_rewards = stats
            .total_rewards
            .checked_add(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position::store_stats(&env, &staker, &stats);

        let minted = RewardLedgerClient::new(&env, &Self::reward_ledger(&env)?)
            .try_mint(&escrow, &staker, &reward);
        if !matches!(minted, Ok(Ok(()))) {
            return Err(ContractError::RewardMintFailed);
        }
        ttl::extend_instance(&env);

        events::publish_withdrawn(&env, staker, position.amount, reward, new_total, now);

        Ok(Withdrawal {
            amount: position.amount,
            reward,
        })
    }

    /// Return the principal immediately, forfeiting the reward.
    ///
    /// Works at any time and while paused. Never touches the reward ledger.
    pub fn emergency_exit(env: Env, staker: Address) -> Result<i128, ContractError> {
        staker.require_auth();
        let now = Self::now(&env);

        let position = position::get_position(&env, &staker).ok_or(ContractError::NoStakeFound)?;

        let escrow = env.current_contract_address();
        token::Client::new(&env, &Self::custody_token(&env)?).transfer(
            &escrow,
            &staker,
            &position.amount,
        );
        position::remove_position(&env, &staker);

        let new_total = Self::read_total_staked(&env)
            .checked_sub(position.amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        env.storage().instance().set(&TOTAL_STAKED, &new_total);
        ttl::extend_instance(&env);

        let forfeited = reward::compute_reward(position.amount, position.lock_duration).unwrap_or(0);
        events::publish_emergency_exit(&env, staker, position.amount, forfeited, new_total, now);

        Ok(position.amount)
    }

    // ── Circuit breaker ─────────────────────────────────────────────────────

    /// Stop accepting deposits. Withdrawals and emergency exits stay open.
    pub fn pause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        let now = Self::now(&env);
        Self::require_admin(&env, &admin)?;

        env.storage().instance().set(&PAUSED, &true);
        ttl::extend_instance(&env);

        events::publish_paused(&env, admin, now);

        Ok(())
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        let now = Self::now(&env);
        Self::require_admin(&env, &admin)?;

        env.storage().instance().set(&PAUSED, &false);
        ttl::extend_instance(&env);

        events::publish_unpaused(&env, admin, now);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────
    //
    // Views read per-account entries without extending their TTL.

    pub fn get_position(env: Env, staker: Address) -> Option<StakePosition> {
        position::read_position(&env, &staker)
    }

    /// Lifetime totals, or `None` if `staker` never deposited.
    pub fn get_account_stats(env: Env, staker: Address) -> Option<AccountStats> {
        position::read_stats(&env, &staker)
    }

    /// Sum of the principal of every active position.
    pub fn get_total_staked(env: Env) -> i128 {
        Self::read_total_staked(&env)
    }

    pub fn get_total_rewards_distributed(env: Env) -> i128 {
        Self::read_total_rewards(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        Self::read_paused(&env)
    }

    pub fn current_time(env: Env) -> u64 {
        Self::now(&env)
    }

    /// `false` when `staker` has no position.
    pub fn is_unlocked(env: Env, staker: Address) -> bool {
        let now = Self::now(&env);
        position::read_position(&env, &staker).is_some_and(|p| now >= p.unlock_time)
    }

    /// Clock units left before `withdraw` is allowed; 0 once unlocked or
    /// when there is no position.
    pub fn time_until_unlock(env: Env, staker: Address) -> u64 {
        let now = Self::now(&env);
        position::read_position(&env, &staker)
            .map(|p| p.unlock_time.saturating_sub(now))
            .unwrap_or(0)
    }

    /// Reward `withdraw` would mint for the current position, or 0.
    pub fn pending_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        match position::read_position(&env, &staker) {
            Some(p) => reward::compute_reward(p.amount, p.lock_duration)
                .ok_or(ContractError::ArithmeticOverflow),
            None => Ok(0),
        }
    }

    /// Evaluate the reward schedule for a hypothetical deposit.
    pub fn calculate_reward(
        _env: Env,
        amount: i128,
        lock_duration: u64,
    ) -> Result<i128, ContractError> {
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if !reward::is_valid_lock(lock_duration) {
            return Err(ContractError::InvalidLockDuration);
        }
        reward::compute_reward(amount, lock_duration).ok_or(ContractError::ArithmeticOverflow)
    }

    pub fn get_config(env: Env) -> Result<EscrowConfig, ContractError> {
        Ok(EscrowConfig {
            admin: admin::get_admin(&env).ok_or(ContractError::NotInitialized)?,
            custody_token: Self::custody_token(&env)?,
            reward_ledger: Self::reward_ledger(&env)?,
            min_lock: reward::MIN_LOCK,
            max_lock: reward::MAX_LOCK,
            reward_rate: reward::REWARD_RATE,
        })
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
        let now = Self::now(&env);
        if !admin::propose_admin(&env, &current_admin, &new_admin) {
            return Err(ContractError::Unauthorized);
        }
        ttl::extend_instance(&env);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin, now);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the nominee can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        new_admin.require_auth();
        let now = Self::now(&env);
        if admin::get_pending_admin(&env).is_none() {
            return Err(ContractError::NoPendingAdmin);
        }
        let old_admin = admin::accept_admin(&env, &new_admin).ok_or(ContractError::Unauthorized)?;
        ttl::extend_instance(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin, now);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        current_admin.require_auth();
        let now = Self::now(&env);
        Self::require_admin(&env, &current_admin)?;
        let pending = admin::cancel_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        ttl::extend_instance(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending, now);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        admin::get_pending_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// The only clock read. Entry points call it once and pass the value on.
    fn now(env: &Env) -> u64 {
        env.ledger().timestamp()
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if admin::get_admin(env).is_none() {
            return Err(ContractError::NotInitialized);
        }
        if !admin::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn custody_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&CUSTODY_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn reward_ledger(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_LEDGER)
            .ok_or(ContractError::NotInitialized)
    }

    fn read_paused(env: &Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    fn read_total_staked(env: &Env) -> i128 {
        env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
    }

    fn read_total_rewards(env: &Env) -> i128 {
        env.storage().instance().get(&TOTAL_REWARDS).unwrap_or(0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
