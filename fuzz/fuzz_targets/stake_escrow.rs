#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reward_ledger::{RewardLedgerContract, RewardLedgerContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};
use stake_escrow::{StakeEscrowContract, StakeEscrowContractClient};

const FUNDING: i128 = i128::MAX / 8;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u64, lock: u16 },
    Withdraw,
    EmergencyExit,
    Advance { by: u16 },
    RevokeMinter,
    Initialize,
    Pause,
    Unpause,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let custody_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let ledger_id = env.register(
        RewardLedgerContract,
        (
            admin.clone(),
            String::from_str(&env, "Stake Reward"),
            String::from_str(&env, "SRWD"),
            6u32,
        ),
    );
    let escrow_id = env.register(
        StakeEscrowContract,
        (admin.clone(), custody_id.clone(), ledger_id.clone()),
    );
    let escrow = StakeEscrowContractClient::new(&env, &escrow_id);
    let ledger = RewardLedgerContractClient::new(&env, &ledger_id);
    let custody = TokenClient::new(&env, &custody_id);
    let _ = escrow.try_initialize(&admin);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for user in &users {
        StellarAssetClient::new(&env, &custody_id).mint(user, &FUNDING);
    }

    let mut now = 0u64;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount, lock } => {
                let _ = escrow.try_deposit(caller, &i128::from(amount), &u64::from(lock));
            }
            FuzzAction::Withdraw => {
                let _ = escrow.try_withdraw(caller);
            }
            FuzzAction::EmergencyExit => {
                let supply = ledger.total_supply();
                let _ = escrow.try_emergency_exit(caller);
                assert_eq!(ledger.total_supply(), supply);
            }
            FuzzAction::Advance { by } => {
                now += u64::from(by);
                env.ledger().set_timestamp(now);
            }
            FuzzAction::RevokeMinter => {
                let _ = ledger.try_revoke_minter(&admin, &escrow_id);
            }
            FuzzAction::Initialize => {
                let _ = escrow.try_initialize(&admin);
            }
            FuzzAction::Pause => {
                let _ = escrow.try_pause(&admin);
            }
            FuzzAction::Unpause => {
                let _ = escrow.try_unpause(&admin);
            }
        }

        let active: i128 = users
            .iter()
            .filter_map(|u| escrow.get_position(u))
            .map(|p| p.amount)
            .sum();
        let minted: i128 = users.iter().map(|u| ledger.balance(u)).sum();
        assert_eq!(escrow.get_total_staked(), active);
        assert_eq!(custody.balance(&escrow_id), active);
        assert_eq!(ledger.total_supply(), minted);
        assert_eq!(escrow.get_total_rewards_distributed(), minted);
    }
});
