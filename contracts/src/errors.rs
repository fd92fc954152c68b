//! Contract error types for the prediction ledger.

use soroban_sdk::contracterror;

/// Every variant rejects the whole call; the host rolls back any writes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Admin address not set - call initialize first
    AdminNotSet = 2,
    /// Oracle address not set - call initialize first
    OracleNotSet = 3,
    /// Fee token address not set - call initialize first
    FeeTokenNotSet = 4,
    /// Asset is not mintable in the current round
    AssetNotActive = 5,
    /// Direction must be UP or DOWN
    InvalidDirection = 6,
    /// Duration must be 10, 30 or 60 minutes
    InvalidDuration = 7,
    /// Oracle returned nothing, a stale reading or a non-positive price
    OracleUnavailable = 8,
    /// No token with this id
    UnknownToken = 9,
    /// Token has already been settled
    AlreadyResolved = 10,
    /// Token resolve time has not been reached
    NotYetDue = 11,
    /// Token must be resolved first
    NotResolved = 12,
    /// Token was already minted to the owner's wallet
    AlreadyMinted = 13,
    /// Supplied fee is below the mint fee
    InsufficientFee = 14,
    /// Caller does not own the token
    NotOwner = 15,
    /// Daily bonus already claimed in the current UTC day
    AlreadyClaimedToday = 16,
    /// Leaderboard reset period has not elapsed
    ResetNotDue = 17,
    /// Arithmetic overflow occurred
    Overflow = 18,
}
