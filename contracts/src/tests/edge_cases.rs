//! Tests for boundary conditions and unusual scenarios.

use super::{TestContext, ONE, ROUND_ONE_TIME};
use crate::errors::ContractError;
use crate::oracle::{normalize_price, validate_reading};
use crate::types::{Outcome, PriceData};
use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};

#[test]
fn test_mint_in_last_second_of_round() {
    let env = Env::default();
    let ctx = TestContext::new(&env);
    let user = Address::generate(&env);
    let eth = symbol_short!("ETH");
    let up = symbol_short!("UP");

    ctx.set_time(ROUND_ONE_TIME + 3599);
    ctx.set_price(&eth, 2000 * ONE);
    let token_id = ctx.client.mint(&user, &eth, &up, &10);

    // One second later ETH is out of rotation, but the token still settles
    ctx.advance(1);
    assert_eq!(ctx.client.try_mint(&user, &eth, &up, &10), Err(Ok(ContractError::AssetNotActive)));

    ctx.advance(599);
    ctx.set_price(&eth, 2001 * ONE);
    assert_eq!(ctx.client.resolve(&token_id), Outcome::Win);
}

#[test]
fn test_oracle_rotation_applies_to_pending_tokens() {
    let env = Env::default();
    let ctx = TestContext::new(&env);
    let user = Address::generate(&env);
    let eth = symbol_short!("ETH");

    ctx.set_price(&eth, 2000 * ONE);
    let token_id = ctx.client.mint(&user, &eth, &symbol_short!("DOWN"), &10);

    // The new oracle has no ETH feed yet
    let replacement = env.register(super::MockOracle, ());
    ctx.client.set_oracle(&replacement);
    ctx.advance(600);

    assert_eq!(ctx.client.try_resolve(&token_id), Err(Ok(ContractError::OracleUnavailable)));

    super::MockOracleClient::new(&env, &replacement).set_price(&eth, &(1999 * ONE), &(ROUND_ONE_TIME + 600));
    assert_eq!(ctx.client.resolve(&token_id), Outcome::Win);
}

#[test]
fn test_future_stamped_reading_is_fresh() {
    let reading = PriceData {
        price: ONE,
        timestamp: 2_000,
    };
    assert_eq!(validate_reading(&reading, 8, 1_000), Ok(ONE));
}

#[test]
fn test_reading_age_boundary() {
    let reading = PriceData {
        price: ONE,
        timestamp: 10_000,
    };
    assert_eq!(validate_reading(&reading, 8, 13_600), Ok(ONE));
    assert_eq!(validate_reading(&reading, 8, 13_601), Err(ContractError::OracleUnavailable));
}

#[test]
fn test_price_rounding_to_zero_is_rejected() {
    // 4e-9 at 18 decimals rounds to 0 at 8 decimals
    let reading = PriceData {
        price: 4_000_000_000,
        timestamp: 0,
    };
    assert_eq!(validate_reading(&reading, 18, 0), Err(ContractError::OracleUnavailable));
}

#[test]
fn test_normalize_price() {
    assert_eq!(normalize_price(123, 8), Ok(123));
    assert_eq!(normalize_price(2, 0), Ok(2 * ONE));
    assert_eq!(normalize_price(15, 9), Ok(2));
    assert_eq!(normalize_price(14, 9), Ok(1));
    assert_eq!(normalize_price(i128::MAX, 0), Err(ContractError::Overflow));
}

#[test]
fn test_tokens_survive_leaderboard_reset() {
    let env = Env::default();
    let ctx = TestContext::new(&env);
    let user = Address::generate(&env);
    let caller = Address::generate(&env);

    let token_id = ctx.settle(&user, &symbol_short!("QIE"), &symbol_short!("UP"), 10, ONE, 2 * ONE);

    ctx.advance(7 * 86_400);
    ctx.client.reset_leaderboard(&caller);

    let token = ctx.client.get_token(&token_id);
    assert!(token.resolved);
    assert_eq!(token.outcome, Outcome::Win);
    assert_eq!(ctx.client.balance_of(&user), 1);
}
