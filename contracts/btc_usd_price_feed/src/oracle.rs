//! Boundary with the oracle network that executes the request off-chain.

use soroban_sdk::{contractclient, Address, Bytes, Env};

use crate::types::{RequestDescriptor, RewardTriple};

/// Entry points the feed calls on the oracle network contract.
#[contractclient(name = "OracleNetworkClient")]
pub trait OracleNetwork {
    /// Posts a request on behalf of `requester`, who pays `rewards`.
    /// Returns the handle used for every later call.
    fn submit(
        env: Env,
        requester: Address,
        request: RequestDescriptor,
        rewards: RewardTriple,
    ) -> u64;

    /// Replaces the rewards attached to a request that has not been resolved.
    fn upgrade_rewards(env: Env, requester: Address, handle: u64, rewards: RewardTriple);

    /// True once the request has been relayed and a result can be read.
    fn is_accepted(env: Env, handle: u64) -> bool;

    /// Raw CBOR-encoded result of an accepted request.
    fn fetch_result(env: Env, handle: u64) -> Bytes;

    fn estimate_minimum_rewards(env: Env, gas_price: u128) -> RewardTriple;
}
