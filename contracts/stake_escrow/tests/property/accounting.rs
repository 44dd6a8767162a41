#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for escrow accounting.
//!
//! Random sequences of deposits, withdrawals, emergency exits, pauses and
//! clock advances are applied to a live escrow + ledger pair.
//!
//! Invariants tested after every step:
//! - `get_total_staked` equals the summed amount of all active positions
//! - The escrow's custody balance equals `get_total_staked`
//! - Ledger `total_supply` equals the summed reward balances
//! - `get_total_rewards_distributed` equals ledger `total_supply`
//! - An emergency exit never changes the ledger supply

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Ledger as _;
use soroban_sdk::Address;
use stake_escrow::reward::{MAX_LOCK, MIN_LOCK};

use crate::harness::{funded_staker, setup, TestContext};

const STAKERS: usize = 4;
const FUNDING: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Clone, Debug)]
enum EscrowOp {
    Deposit {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
        #[proptest(strategy = "1i128..=1_000_000_000i128")]
        amount: i128,
        // Slightly outside the accepted window on both sides.
        #[proptest(strategy = "(MIN_LOCK - 10)..=(MAX_LOCK + 10)")]
        lock: u64,
    },
    Withdraw {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
    },
    EmergencyExit {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
    },
    Advance {
        #[proptest(strategy = "0u64..=20_000u64")]
        by: u64,
    },
    Pause,
    Unpause,
}

fn check_invariants(ctx: &TestContext, stakers: &[Address]) -> Result<(), TestCaseError> {
    let active: i128 = stakers
        .iter()
        .filter_map(|s| ctx.escrow.get_position(s))
        .map(|p| p.amount)
        .sum();
    let rewards: i128 = stakers.iter().map(|s| ctx.ledger.balance(s)).sum();

    prop_assert_eq!(ctx.escrow.get_total_staked(), active);
    prop_assert_eq!(ctx.custody.balance(&ctx.escrow.address), active);
    prop_assert_eq!(ctx.ledger.total_supply(), rewards);
    prop_assert_eq!(ctx.escrow.get_total_rewards_distributed(), rewards);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_aggregates_match_positions(ops in prop::collection::vec(any::<EscrowOp>(), 1..30)) {
        let ctx = setup();
        let stakers: Vec<Address> = (0..STAKERS).map(|_| funded_staker(&ctx, FUNDING)).collect();
        let mut now = ctx.escrow.current_time();

        for op in ops {
            match op {
                EscrowOp::Deposit { who, amount, lock } => {
                    let had_position = ctx.escrow.get_position(&stakers[who]).is_some();
                    let result = ctx.escrow.try_deposit(&stakers[who], &amount, &lock);
                    let accepted = !had_position
                        && !ctx.escrow.is_paused()
                        && (MIN_LOCK..=MAX_LOCK).contains(&lock);
                    prop_assert_eq!(result.is_ok(), accepted);
                    if let Ok(Ok(unlock_time)) = result {
                        prop_assert_eq!(unlock_time, now + lock);
                    }
                }
                EscrowOp::Withdraw { who } => {
                    let position = ctx.escrow.get_position(&stakers[who]);
                    let pending = ctx.escrow.pending_reward(&stakers[who]);
                    let result = ctx.escrow.try_withdraw(&stakers[who]);
                    match position {
                        Some(p) if now >= p.unlock_time => {
                            let withdrawal = result.unwrap().unwrap();
                            prop_assert_eq!(withdrawal.amount, p.amount);
                            prop_assert_eq!(withdrawal.reward, pending);
                        }
                        Some(p) => {
                            prop_assert!(result.is_err());
                            prop_assert_eq!(ctx.escrow.get_position(&stakers[who]), Some(p));
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
                EscrowOp::EmergencyExit { who } => {
                    let supply = ctx.ledger.total_supply();
                    let reward_balance = ctx.ledger.balance(&stakers[who]);
                    let had_position = ctx.escrow.get_position(&stakers[who]).is_some();

                    let result = ctx.escrow.try_emergency_exit(&stakers[who]);
                    prop_assert_eq!(result.is_ok(), had_position);
                    prop_assert_eq!(ctx.ledger.total_supply(), supply);
                    prop_assert_eq!(ctx.ledger.balance(&stakers[who]), reward_balance);
                }
                EscrowOp::Advance { by } => {
                    now += by;
                    ctx.env.ledger().set_timestamp(now);
                }
                EscrowOp::Pause => ctx.escrow.pause(&ctx.admin),
                EscrowOp::Unpause => ctx.escrow.unpause(&ctx.admin),
            }
            check_invariants(&ctx, &stakers)?;
        }

        // Whatever happened, every remaining position can still be exited.
        for staker in &stakers {
            if ctx.escrow.get_position(staker).is_some() {
                ctx.escrow.emergency_exit(staker);
            }
            prop_assert_eq!(
                ctx.custody.balance(staker),
                FUNDING,
                "principal must always come back in full"
            );
        }
        check_invariants(&ctx, &stakers)?;
    }
}
