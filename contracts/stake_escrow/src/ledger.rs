//! Call surface of the reward ledger as seen from the escrow.
//!
//! Only the functions the escrow invokes are declared. The ledger's typed
//! errors arrive as plain `soroban_sdk::Error`s through the `try_*` methods.

use soroban_sdk::{contractclient, Address, Env};

#[allow(dead_code)]
#[contractclient(name = "RewardLedgerClient")]
pub trait RewardLedger {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
    fn authorize_minter(env: Env, admin: Address, minter: Address);
    fn is_authorized_minter(env: Env, minter: Address) -> bool;
}
