//! Core contract implementation for the prediction ledger.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol, Vec};

use crate::accounting;
use crate::constants::{BUMP_AMOUNT, BUMP_THRESHOLD, LEADERBOARD_RESET_PERIOD_SECS, MINT_FEE};
use crate::errors::ContractError;
use crate::events::{
    DailyClaimedEvent, FeesWithdrawnEvent, LeaderboardResetEvent, MaterializedEvent, MintedEvent,
    ResolvedEvent,
};
use crate::leaderboard;
use crate::oracle;
use crate::rounds;
use crate::types::{
    DataKey, Direction, LeaderboardEntry, Outcome, PredictionToken, Rarity, UserAccount, UserStats,
};

#[contract]
pub struct PredictionLedgerContract;

#[contractimpl]
impl PredictionLedgerContract {
    /// Initializes the contract with admin, oracle and fee token addresses (one-time only)
    pub fn initialize(env: Env, admin: Address, oracle: Address, fee_token: Address) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage().instance().set(&DataKey::FeeToken, &fee_token);
        env.storage()
            .instance()
            .set(&DataKey::LastLeaderboardReset, &env.ledger().timestamp());
        Self::_extend_instance(&env);

        Ok(())
    }

    /// Points the ledger at a different oracle gateway (admin only)
    pub fn set_oracle(env: Env, oracle: Address) -> Result<(), ContractError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::Oracle, &oracle);
        Self::_extend_instance(&env);
        log!(&env, "oracle updated", oracle);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn get_oracle(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Oracle)
    }

    pub fn get_fee_token(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::FeeToken)
    }

    /// Stakes a free directional call on `asset`, settled after `duration_minutes`
    pub fn mint(
        env: Env,
        caller: Address,
        asset: Symbol,
        direction: Symbol,
        duration_minutes: u32,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        let rarity = Rarity::from_duration(duration_minutes).ok_or(ContractError::InvalidDuration)?;

        let now = env.ledger().timestamp();
        if !rounds::is_asset_active(&asset, now) {
            return Err(ContractError::AssetNotActive);
        }

        let direction = Direction::from_symbol(&direction).ok_or(ContractError::InvalidDirection)?;

        let oracle_address = Self::_oracle(&env)?;
        let entry_price = oracle::fetch_price(&env, &oracle_address, &asset)?;

        let resolve_time = now
            .checked_add(duration_minutes as u64 * 60)
            .ok_or(ContractError::Overflow)?;

        let token_id: u64 = env.storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(1);
        let next_id = token_id
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        env.storage().instance().set(&DataKey::NextTokenId, &next_id);
        Self::_extend_instance(&env);

        let token = PredictionToken {
            id: token_id,
            owner: caller.clone(),
            asset: asset.clone(),
            direction,
            entry_price,
            result_price: None,
            mint_time: now,
            resolve_time,
            rarity,
            outcome: Outcome::Pending,
            resolved: false,
            minted_to_wallet: false,
        };
        Self::_save_token(&env, &token);

        let owner_key = DataKey::OwnerTokens(caller.clone());
        let mut owned: Vec<u64> = env.storage()
            .persistent()
            .get(&owner_key)
            .unwrap_or(Vec::new(&env));
        owned.push_back(token_id);
        env.storage().persistent().set(&owner_key, &owned);
        Self::_extend_persistent(&env, &owner_key);

        log!(&env, "prediction minted", token_id, caller.clone(), asset.clone(), entry_price);
        MintedEvent {
            token_id,
            account: caller,
            asset,
            entry_price,
            resolve_time,
            rarity,
        }
        .publish(&env);

        Ok(token_id)
    }

    /// Settles a due token against the oracle. Callable by anyone, exactly once per token.
    pub fn resolve(env: Env, token_id: u64) -> Result<Outcome, ContractError> {
        let mut token = Self::get_token(env.clone(), token_id)?;

        if token.resolved {
            return Err(ContractError::AlreadyResolved);
        }

        let now = env.ledger().timestamp();
        if now < token.resolve_time {
            return Err(ContractError::NotYetDue);
        }

        let oracle_address = Self::_oracle(&env)?;
        let result_price = oracle::fetch_price(&env, &oracle_address, &token.asset)?;

        let outcome = Self::_outcome(token.direction, token.entry_price, result_price);

        token.result_price = Some(result_price);
        token.outcome = outcome;
        token.resolved = true;
        Self::_save_token(&env, &token);

        let mut account = Self::_load_account(&env, &token.owner);
        accounting::apply_outcome(&mut account, token.rarity, outcome)?;
        Self::_save_account(&env, &token.owner, &account);
        leaderboard::upsert(&env, &token.owner, &account);

        log!(&env, "prediction resolved", token_id, result_price);
        ResolvedEvent {
            token_id,
            outcome,
            result_price,
        }
        .publish(&env);

        Ok(outcome)
    }

    /// Marks a resolved token as delivered to the owner's wallet for a fee of at least `MINT_FEE`
    pub fn materialize(env: Env, caller: Address, token_id: u64, fee: i128) -> Result<(), ContractError> {
        caller.require_auth();

        let mut token = Self::get_token(env.clone(), token_id)?;

        if !token.resolved {
            return Err(ContractError::NotResolved);
        }

        if token.minted_to_wallet {
            return Err(ContractError::AlreadyMinted);
        }

        if fee < MINT_FEE {
            return Err(ContractError::InsufficientFee);
        }

        if token.owner != caller {
            return Err(ContractError::NotOwner);
        }

        let fee_token: Address = env.storage()
            .instance()
            .get(&DataKey::FeeToken)
            .ok_or(ContractError::FeeTokenNotSet)?;

        let collected: i128 = env.storage()
            .instance()
            .get(&DataKey::CollectedFees)
            .unwrap_or(0);
        let new_collected = collected
            .checked_add(fee)
            .ok_or(ContractError::Overflow)?;

        token::Client::new(&env, &fee_token).transfer(&caller, &env.current_contract_address(), &fee);

        env.storage().instance().set(&DataKey::CollectedFees, &new_collected);
        Self::_extend_instance(&env);

        token.minted_to_wallet = true;
        Self::_save_token(&env, &token);

        log!(&env, "prediction materialized", token_id, fee);
        MaterializedEvent {
            token_id,
            owner: caller,
            fee,
        }
        .publish(&env);

        Ok(())
    }

    /// Credits the once-per-UTC-day bonus
    pub fn claim_daily(env: Env, user: Address) -> Result<(), ContractError> {
        user.require_auth();

        let now = env.ledger().timestamp();
        let mut account = Self::_load_account(&env, &user);
        accounting::claim_daily(&mut account, now)?;
        Self::_save_account(&env, &user, &account);
        leaderboard::upsert(&env, &user, &account);

        log!(&env, "daily bonus claimed", user.clone(), now);
        DailyClaimedEvent {
            account: user,
            timestamp: now,
        }
        .publish(&env);

        Ok(())
    }

    /// Returns seconds until `user` may claim again; 0 when ready
    pub fn time_until_next_claim(env: Env, user: Address) -> u64 {
        let account = Self::_load_account(&env, &user);
        accounting::time_until_next_claim(&account, env.ledger().timestamp())
    }

    /// Clears the leaderboard once per reset period. Callable by anyone.
    pub fn reset_leaderboard(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let last_reset = Self::last_leaderboard_reset(env.clone());
        let due_at = last_reset
            .checked_add(LEADERBOARD_RESET_PERIOD_SECS)
            .ok_or(ContractError::Overflow)?;
        if now < due_at {
            return Err(ContractError::ResetNotDue);
        }

        leaderboard::clear(&env);
        env.storage().instance().set(&DataKey::LastLeaderboardReset, &now);
        Self::_extend_instance(&env);

        log!(&env, "leaderboard reset", caller.clone(), now);
        LeaderboardResetEvent {
            caller,
            timestamp: now,
        }
        .publish(&env);

        Ok(())
    }

    pub fn last_leaderboard_reset(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LastLeaderboardReset)
            .unwrap_or(0)
    }

    /// Sends all collected materialize fees to `to` (admin only); returns the amount
    pub fn withdraw_fees(env: Env, to: Address) -> Result<i128, ContractError> {
        let admin = Self::_admin(&env)?;
        admin.require_auth();

        let collected = Self::collected_fees(env.clone());
        if collected == 0 {
            return Ok(0);
        }

        let fee_token: Address = env.storage()
            .instance()
            .get(&DataKey::FeeToken)
            .ok_or(ContractError::FeeTokenNotSet)?;

        token::Client::new(&env, &fee_token).transfer(&env.current_contract_address(), &to, &collected);
        env.storage().instance().set(&DataKey::CollectedFees, &0i128);
        Self::_extend_instance(&env);

        log!(&env, "fees withdrawn", to.clone(), collected);
        FeesWithdrawnEvent {
            to,
            amount: collected,
        }
        .publish(&env);

        Ok(collected)
    }

    pub fn collected_fees(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::CollectedFees)
            .unwrap_or(0)
    }

    pub fn get_token(env: Env, token_id: u64) -> Result<PredictionToken, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Token(token_id))
            .ok_or(ContractError::UnknownToken)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, ContractError> {
        Ok(Self::get_token(env, token_id)?.owner)
    }

    /// Token ids owned by `owner`, in mint order
    pub fn tokens_of(env: Env, owner: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerTokens(owner))
            .unwrap_or(Vec::new(&env))
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        Self::tokens_of(env, owner).len()
    }

    /// Returns points, counters, win rate (basis points) and next claim epoch
    pub fn get_user_stats(env: Env, user: Address) -> UserStats {
        accounting::stats_of(&Self::_load_account(&env, &user))
    }

    /// Ranked entries, best first, at most `LEADERBOARD_CAP`
    pub fn get_leaderboard(env: Env) -> Vec<LeaderboardEntry> {
        leaderboard::load(&env)
    }

    pub fn get_rank(env: Env, user: Address) -> Option<u32> {
        leaderboard::rank_of(&env, &user)
    }

    pub fn current_round(env: Env) -> u32 {
        rounds::current_round(env.ledger().timestamp())
    }

    pub fn active_assets(env: Env) -> Vec<Symbol> {
        let round = rounds::current_round(env.ledger().timestamp());
        rounds::active_assets(&env, round)
    }

    pub fn seconds_until_next_round(env: Env) -> u64 {
        rounds::seconds_until_next_round(env.ledger().timestamp())
    }

    pub fn is_asset_active(env: Env, asset: Symbol) -> bool {
        rounds::is_asset_active(&asset, env.ledger().timestamp())
    }

    /// Latest normalized oracle price, with the same validation as `mint`
    pub fn get_latest_price(env: Env, asset: Symbol) -> Result<i128, ContractError> {
        let oracle_address = Self::_oracle(&env)?;
        oracle::fetch_price(&env, &oracle_address, &asset)
    }

    /// Strict movement wins; an unchanged price loses for both directions
    pub(crate) fn _outcome(direction: Direction, entry_price: i128, result_price: i128) -> Outcome {
        let won = match direction {
            Direction::Up => result_price > entry_price,
            Direction::Down => result_price < entry_price,
        };

        if won {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    fn _admin(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)
    }

    fn _oracle(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Oracle)
            .ok_or(ContractError::OracleNotSet)
    }

    fn _save_token(env: &Env, token: &PredictionToken) {
        let key = DataKey::Token(token.id);
        env.storage().persistent().set(&key, token);
        Self::_extend_persistent(env, &key);
    }

    pub(crate) fn _load_account(env: &Env, user: &Address) -> UserAccount {
        env.storage()
            .persistent()
            .get(&DataKey::Account(user.clone()))
            .unwrap_or_default()
    }

    fn _save_account(env: &Env, user: &Address, account: &UserAccount) {
        let key = DataKey::Account(user.clone());
        env.storage().persistent().set(&key, account);
        Self::_extend_persistent(env, &key);
    }

    fn _extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn _extend_persistent(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
}
