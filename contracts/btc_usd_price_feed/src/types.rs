use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// Payment offered to the oracle network, one amount per processing stage.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardTriple {
    pub inclusion: u128,
    pub result: u128,
    pub block: u128,
}

/// What the network is asked to compute. Fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RequestDescriptor {
    pub bytecode: Bytes,
    pub hash: BytesN<32>, // sha256(bytecode)
}

#[derive(Clone)]
#[contracttype]
pub struct Config {
    pub oracle: Address,
    pub request: RequestDescriptor,
}

/// Lifecycle of the single outstanding request.
///
/// `pending` is set between a successful submit and the next completion.
/// `timestamp` stays 0 until the first price is committed, and moves
/// together with `last_price` only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct FeedState {
    pub last_price: u64,
    pub last_request_id: u64,
    pub timestamp: u64,
    pub pending: bool,
}

/// Interpretation of a raw oracle result. Never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DecodedResult {
    Value(u64),
    /// Error message as reported, or the raw result when it could not be parsed.
    /// Not guaranteed to be valid UTF-8.
    Failure(Bytes),
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
}
