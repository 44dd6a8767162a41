use reward_ledger::{RewardLedgerContract, RewardLedgerContractClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env, String};
use stake_escrow::{StakeEscrowContract, StakeEscrowContractClient};

pub const START: u64 = 1_000;

pub struct TestContext {
    pub env: Env,
    pub escrow: StakeEscrowContractClient<'static>,
    pub ledger: RewardLedgerContractClient<'static>,
    pub custody: TokenClient<'static>,
    pub admin: Address,
}

/// Deploys custody asset, reward ledger and an initialized escrow.
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

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
    escrow.initialize(&admin);

    TestContext {
        escrow,
        ledger: RewardLedgerContractClient::new(&env, &ledger_id),
        custody: TokenClient::new(&env, &custody_id),
        admin,
        env,
    }
}

pub fn funded_staker(ctx: &TestContext, amount: i128) -> Address {
    let staker = Address::generate(&ctx.env);
    StellarAssetClient::new(&ctx.env, &ctx.custody.address).mint(&staker, &amount);
    staker
}
