//! Test modules for the prediction ledger contract.

mod edge_cases;

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger as _},
    Address, Env, Event, Symbol, Val, Vec,
};

use crate::contract::{PredictionLedgerContract, PredictionLedgerContractClient};
use crate::types::PriceData;

/// 2024-01-01T00:00:00Z
pub(crate) const JAN_1_2024: u64 = 1_704_067_200;
/// 14:00 UTC, an even hour: round 1 (ETH, QIE, BTC)
pub(crate) const ROUND_ONE_TIME: u64 = JAN_1_2024 + 14 * 3600;
/// 15:00 UTC, an odd hour: round 2 (XRP, SOL)
pub(crate) const ROUND_TWO_TIME: u64 = JAN_1_2024 + 15 * 3600;

/// 1.0 with 8 fractional digits
pub(crate) const ONE: i128 = 1_0000_0000;

#[contracttype]
#[derive(Clone)]
enum MockOracleKey {
    Decimals,
    Price(Symbol),
}

/// Stand-in for the price oracle gateway.
#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_decimals(env: Env, decimals: u32) {
        env.storage().instance().set(&MockOracleKey::Decimals, &decimals);
    }

    pub fn set_price(env: Env, asset: Symbol, price: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&MockOracleKey::Price(asset), &PriceData { price, timestamp });
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockOracleKey::Decimals)
            .unwrap_or(8)
    }

    pub fn latest_price(env: Env, asset: Symbol) -> Option<PriceData> {
        env.storage().instance().get(&MockOracleKey::Price(asset))
    }
}

pub(crate) struct TestContext<'a> {
    pub env: &'a Env,
    pub client: PredictionLedgerContractClient<'a>,
    pub oracle: MockOracleClient<'a>,
    pub admin: Address,
    pub fee_token: Address,
}

impl<'a> TestContext<'a> {
    /// Initialized ledger at `ROUND_ONE_TIME` with all auths mocked
    pub fn new(env: &'a Env) -> TestContext<'a> {
        env.mock_all_auths();
        env.ledger().set_timestamp(ROUND_ONE_TIME);

        let contract_id = env.register(PredictionLedgerContract, ());
        let client = PredictionLedgerContractClient::new(env, &contract_id);

        let oracle_id = env.register(MockOracle, ());
        let oracle = MockOracleClient::new(env, &oracle_id);

        let admin = Address::generate(env);
        let fee_token = env.register_stellar_asset_contract_v2(admin.clone()).address();

        client.initialize(&admin, &oracle_id, &fee_token);

        TestContext {
            env,
            client,
            oracle,
            admin,
            fee_token,
        }
    }

    /// Publishes a fresh oracle reading stamped with the current ledger time
    pub fn set_price(&self, asset: &Symbol, price: i128) {
        self.oracle.set_price(asset, &price, &self.env.ledger().timestamp());
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    /// Contract event record as `env.events().all()` reports it for the ledger
    pub fn event_record(&self, event: &impl Event) -> (Address, Vec<Val>, Val) {
        (
            self.client.address.clone(),
            event.topics(self.env),
            event.data(self.env),
        )
    }

    /// Mints a token at `entry` and resolves it at `exit` once due
    pub fn settle(
        &self,
        user: &Address,
        asset: &Symbol,
        direction: &Symbol,
        minutes: u32,
        entry: i128,
        exit: i128,
    ) -> u64 {
        self.set_price(asset, entry);
        let token_id = self.client.mint(user, asset, direction, &minutes);
        self.advance(minutes as u64 * 60);
        self.set_price(asset, exit);
        self.client.resolve(&token_id);
        token_id
    }
}
