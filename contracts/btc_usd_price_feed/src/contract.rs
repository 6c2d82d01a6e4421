use soroban_sdk::{
    contract, contractimpl, contractmeta, log, Address, Bytes, BytesN, Env, I256,
};

use crate::decoder;
use crate::errors::Error;
use crate::events::{emit_price_updated, emit_result_error};
use crate::oracle::OracleNetworkClient;
use crate::query::{self, DataFeedQuery};
use crate::rewards;
use crate::storage::{bump_instance, get_config, get_state, is_initialized, set_config, set_state};
use crate::types::{Config, DecodedResult, FeedState, RequestDescriptor, RewardTriple};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "BTC/USD price feed resolved through an oracle network"
);

#[contract]
pub struct BtcUsdPriceFeed;

#[contractimpl]
impl BtcUsdPriceFeed {
    /// Binds the feed to an oracle network and fixes the request it will post.
    pub fn initialize(env: Env, oracle: Address, bytecode: Bytes) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if bytecode.is_empty() {
            return Err(Error::InvalidRequest);
        }

        let hash: BytesN<32> = env.crypto().sha256(&bytecode).into();
        let cfg = Config {
            oracle,
            request: RequestDescriptor { bytecode, hash },
        };

        set_config(&env, &cfg);
        set_state(&env, &FeedState::default());
        bump_instance(&env);
        Ok(())
    }

    /// Posts the price request with `rewards`, paid by `requester`.
    ///
    /// Only one request may be in flight. Returns the network's handle.
    pub fn submit_request(
        env: Env,
        requester: Address,
        rewards: RewardTriple,
        gas_price: u128,
    ) -> Result<u64, Error> {
        requester.require_auth();
        let cfg = get_config(&env)?;
        let mut state = get_state(&env);

        if state.pending {
            return Err(Error::AlreadyPending);
        }

        let oracle = OracleNetworkClient::new(&env, &cfg.oracle);
        rewards::ensure_sufficient(&env, &oracle, &rewards, gas_price)?;

        let handle = oracle.submit(&requester, &cfg.request, &rewards);
        state.last_request_id = handle;
        state.pending = true;

        set_state(&env, &state);
        bump_instance(&env);
        log!(&env, "price request submitted", handle);
        Ok(handle)
    }

    /// Raises the rewards attached to the request in flight.
    pub fn upgrade_request(
        env: Env,
        requester: Address,
        rewards: RewardTriple,
        gas_price: u128,
    ) -> Result<(), Error> {
        requester.require_auth();
        let cfg = get_config(&env)?;
        let state = get_state(&env);

        if !state.pending {
            return Err(Error::NoPendingUpdate);
        }

        let oracle = OracleNetworkClient::new(&env, &cfg.oracle);
        rewards::ensure_sufficient(&env, &oracle, &rewards, gas_price)?;

        oracle.upgrade_rewards(&requester, &state.last_request_id, &rewards);
        bump_instance(&env);
        Ok(())
    }

    /// Reads and commits the result of the request in flight.
    ///
    /// `NotYetAccepted` leaves the request pending; call again later. Past that
    /// check the feed always returns to idle, whether or not the result held a
    /// price.
    pub fn complete_request(env: Env) -> Result<DecodedResult, Error> {
        let cfg = get_config(&env)?;
        let mut state = get_state(&env);

        if !state.pending {
            return Err(Error::NoPendingUpdate);
        }

        let oracle = OracleNetworkClient::new(&env, &cfg.oracle);
        let handle = state.last_request_id;
        if !oracle.is_accepted(&handle) {
            return Err(Error::NotYetAccepted);
        }

        let raw = oracle.fetch_result(&handle);
        let outcome = decoder::decode(&raw);
        match &outcome {
            DecodedResult::Value(price) => {
                state.last_price = *price;
                // 0 is reserved for "no value yet"
                state.timestamp = env.ledger().timestamp().max(1);
                emit_price_updated(&env, handle, *price, state.timestamp);
            }
            DecodedResult::Failure(message) => {
                log!(&env, "price request failed", handle);
                emit_result_error(&env, handle, message.clone());
            }
        }
        state.pending = false;

        set_state(&env, &state);
        bump_instance(&env);
        Ok(outcome)
    }

    /// Minimum rewards the network currently asks for at `gas_price`.
    pub fn estimate_gas_cost(env: Env, gas_price: u128) -> Result<RewardTriple, Error> {
        let cfg = get_config(&env)?;
        let oracle = OracleNetworkClient::new(&env, &cfg.oracle);
        Ok(rewards::estimate(&oracle, gas_price))
    }

    // Views
    pub fn last_price(env: Env) -> u64 {
        get_state(&env).last_price
    }

    pub fn last_request_id(env: Env) -> u64 {
        get_state(&env).last_request_id
    }

    pub fn timestamp(env: Env) -> u64 {
        get_state(&env).timestamp
    }

    pub fn pending(env: Env) -> bool {
        get_state(&env).pending
    }

    pub fn state(env: Env) -> FeedState {
        get_state(&env)
    }

    pub fn request(env: Env) -> Result<RequestDescriptor, Error> {
        Ok(get_config(&env)?.request)
    }

    pub fn oracle(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.oracle)
    }

    pub fn feed_id(env: Env) -> BytesN<32> {
        query::feed_id(&env)
    }
}

#[contractimpl]
impl DataFeedQuery for BtcUsdPriceFeed {
    fn value_for(env: Env, id: BytesN<32>) -> (I256, u64, u32) {
        query::project(&env, &id, &get_state(&env))
    }
}
