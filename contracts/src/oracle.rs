//! Price oracle gateway.
//!
//! The oracle is an external contract exposing `decimals()` and
//! `latest_price(asset)`. Readings are normalized to `PRICE_DECIMALS` and
//! rejected when missing, stale or non-positive.

use soroban_sdk::{contractclient, log, Address, Env, Symbol};

use crate::constants::{MAX_PRICE_AGE_SECS, PRICE_DECIMALS};
use crate::errors::ContractError;
use crate::types::PriceData;

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn decimals(env: Env) -> u32;
    fn latest_price(env: Env, asset: Symbol) -> Option<PriceData>;
}

/// Reads a fresh, positive price for `asset` with 8 fractional digits.
///
/// Host failures inside the oracle call are caught and reported as
/// `OracleUnavailable`; nothing is retried.
pub fn fetch_price(env: &Env, oracle: &Address, asset: &Symbol) -> Result<i128, ContractError> {
    let client = PriceOracleClient::new(env, oracle);

    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => {
            log!(env, "oracle decimals call failed", asset.clone());
            return Err(ContractError::OracleUnavailable);
        }
    };

    let reading = match client.try_latest_price(asset) {
        Ok(Ok(Some(reading))) => reading,
        _ => {
            log!(env, "oracle has no price", asset.clone());
            return Err(ContractError::OracleUnavailable);
        }
    };

    validate_reading(&reading, decimals, env.ledger().timestamp()).map_err(|err| {
        log!(env, "oracle reading rejected", asset.clone(), reading.price, reading.timestamp);
        err
    })
}

/// Applies the staleness and positivity rules and normalizes the price.
pub fn validate_reading(reading: &PriceData, decimals: u32, now: u64) -> Result<i128, ContractError> {
    if reading.price <= 0 {
        return Err(ContractError::OracleUnavailable);
    }

    // Readings stamped in the future count as fresh.
    if now.saturating_sub(reading.timestamp) > MAX_PRICE_AGE_SECS {
        return Err(ContractError::OracleUnavailable);
    }

    let price = normalize_price(reading.price, decimals)?;
    if price <= 0 {
        return Err(ContractError::OracleUnavailable);
    }

    Ok(price)
}

/// Rescales a positive price from `decimals` to `PRICE_DECIMALS`.
/// Scaling down rounds half up.
pub fn normalize_price(price: i128, decimals: u32) -> Result<i128, ContractError> {
    if decimals == PRICE_DECIMALS {
        return Ok(price);
    }

    if decimals < PRICE_DECIMALS {
        let factor = pow10(PRICE_DECIMALS - decimals)?;
        return price.checked_mul(factor).ok_or(ContractError::Overflow);
    }

    let divisor = pow10(decimals - PRICE_DECIMALS)?;
    let rounded = price
        .checked_add(divisor / 2)
        .ok_or(ContractError::Overflow)?;
    Ok(rounded / divisor)
}

fn pow10(exp: u32) -> Result<i128, ContractError> {
    10i128.checked_pow(exp).ok_or(ContractError::Overflow)
}
