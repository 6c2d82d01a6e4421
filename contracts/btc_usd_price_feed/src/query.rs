//! ERC-2362 style read surface: `value_for(id) -> (value, timestamp, status)`.

use soroban_sdk::{contractclient, BytesN, Env, I256};

use crate::types::FeedState;

/// keccak256("Price-BTC/USD-3"). Values carry 3 decimals.
pub const BTC_USD_3_ID: [u8; 32] = [
    0x63, 0x7b, 0x7e, 0xfb, 0x6b, 0x62, 0x07, 0x36, 0xc2, 0x47, 0xaa, 0xa2, 0x82, 0xf3, 0x89, 0x89,
    0x14, 0xc0, 0xbe, 0xf6, 0xc1, 0x2f, 0xaf, 0xf0, 0xd3, 0xfe, 0x9d, 0x4b, 0xea, 0x78, 0x30, 0x20,
];

pub const STATUS_OK: u32 = 200;
pub const STATUS_UNKNOWN_ID: u32 = 400;
pub const STATUS_NO_VALUE: u32 = 404;

#[contractclient(name = "DataFeedQueryClient")]
pub trait DataFeedQuery {
    fn value_for(env: Env, id: BytesN<32>) -> (I256, u64, u32);
}

pub fn feed_id(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &BTC_USD_3_ID)
}

pub fn project(env: &Env, id: &BytesN<32>, state: &FeedState) -> (I256, u64, u32) {
    let zero = I256::from_i128(env, 0);
    if *id != feed_id(env) {
        return (zero, 0, STATUS_UNKNOWN_ID);
    }
    if state.timestamp == 0 {
        return (zero, 0, STATUS_NO_VALUE);
    }
    (
        I256::from_i128(env, i128::from(state.last_price)),
        state.timestamp,
        STATUS_OK,
    )
}
