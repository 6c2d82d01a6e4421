use soroban_sdk::{log, Env};

use crate::errors::Error;
use crate::oracle::OracleNetworkClient;
use crate::types::RewardTriple;

/// Minimum rewards for `gas_price`, as quoted by the network. Returned unchanged.
pub fn estimate(oracle: &OracleNetworkClient, gas_price: u128) -> RewardTriple {
    oracle.estimate_minimum_rewards(&gas_price)
}

/// Each bucket is checked against its own minimum.
pub fn covers(offered: &RewardTriple, minimum: &RewardTriple) -> bool {
    offered.inclusion >= minimum.inclusion
        && offered.result >= minimum.result
        && offered.block >= minimum.block
}

pub fn ensure_sufficient(
    env: &Env,
    oracle: &OracleNetworkClient,
    offered: &RewardTriple,
    gas_price: u128,
) -> Result<(), Error> {
    let minimum = estimate(oracle, gas_price);
    if !covers(offered, &minimum) {
        log!(env, "rewards below minimum", gas_price, minimum);
        return Err(Error::InsufficientReward);
    }
    Ok(())
}
