#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for supply accounting.
//!
//! Invariants tested:
//! - `total_supply` always equals the sum of every holder's balance
//! - Failed operations never move a balance

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use reward_ledger::{RewardLedgerContract, RewardLedgerContractClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

const HOLDERS: usize = 4;

#[derive(Arbitrary, Clone, Debug)]
enum LedgerOp {
    Mint {
        #[proptest(strategy = "0usize..HOLDERS")]
        to: usize,
        #[proptest(strategy = "1i128..=1_000_000i128")]
        amount: i128,
    },
    Burn {
        #[proptest(strategy = "0usize..HOLDERS")]
        from: usize,
        #[proptest(strategy = "1i128..=1_000_000i128")]
        amount: i128,
    },
    Transfer {
        #[proptest(strategy = "0usize..HOLDERS")]
        from: usize,
        #[proptest(strategy = "0usize..HOLDERS")]
        to: usize,
        #[proptest(strategy = "1i128..=1_000_000i128")]
        amount: i128,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, RewardLedgerContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(
        RewardLedgerContract,
        (
            admin.clone(),
            String::from_str(&env, "Stake Reward"),
            String::from_str(&env, "SRWD"),
            6u32,
        ),
    );
    let client = RewardLedgerContractClient::new(&env, &contract_id);

    let minter = Address::generate(&env);
    client.authorize_minter(&admin, &minter);

    (env, client, minter)
}

fn sum_balances(client: &RewardLedgerContractClient, holders: &[Address]) -> i128 {
    holders.iter().map(|h| client.balance(h)).sum()
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Supply equals the summed balances after every operation, successful or not.
    #[test]
    fn prop_supply_equals_sum_of_balances(ops in prop::collection::vec(any::<LedgerOp>(), 1..40)) {
        let (env, client, minter) = setup();
        let holders: Vec<Address> = (0..HOLDERS).map(|_| Address::generate(&env)).collect();

        for op in ops {
            let before: Vec<i128> = holders.iter().map(|h| client.balance(h)).collect();
            let failed = match op {
                LedgerOp::Mint { to, amount } => {
                    client.try_mint(&minter, &holders[to], &amount).is_err()
                }
                LedgerOp::Burn { from, amount } => {
                    client.try_burn(&holders[from], &amount).is_err()
                }
                LedgerOp::Transfer { from, to, amount } => client
                    .try_transfer(&holders[from], &holders[to], &amount, &None)
                    .is_err(),
            };

            if failed {
                let after: Vec<i128> = holders.iter().map(|h| client.balance(h)).collect();
                prop_assert_eq!(before, after);
            }
            prop_assert_eq!(client.total_supply(), sum_balances(&client, &holders));
        }
    }

    /// Burning never succeeds for more than the holder owns.
    #[test]
    fn prop_burn_bounded_by_balance(minted in 1i128..=10_000i128, burn in 1i128..=20_000i128) {
        let (env, client, minter) = setup();
        let holder = Address::generate(&env);
        client.mint(&minter, &holder, &minted);

        let result = client.try_burn(&holder, &burn);
        if burn > minted {
            prop_assert!(result.is_err());
            prop_assert_eq!(client.balance(&holder), minted);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(client.balance(&holder), minted - burn);
        }
        prop_assert_eq!(client.total_supply(), client.balance(&holder));
    }
}
