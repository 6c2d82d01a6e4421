#![no_std]

pub mod contract;
mod decoder;
mod errors;
mod events;
pub mod oracle;
pub mod query;
mod rewards;
mod storage;
mod types;


pub use contract::{BtcUsdPriceFeed, BtcUsdPriceFeedClient};
pub use decoder::decode;
pub use errors::Error;
pub use events::{PriceUpdatedEvent, ResultErrorEvent};
pub use oracle::{OracleNetwork, OracleNetworkClient};
pub use query::{DataFeedQuery, DataFeedQueryClient, BTC_USD_3_ID};
pub use types::{Config, DecodedResult, FeedState, RequestDescriptor, RewardTriple};
