use soroban_sdk::{contracttype, symbol_short, Bytes, Env};

// Topics are (symbol_short!("FEED"), symbol_short!(<kind>)).
// Submission publishes nothing; only completions do.

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceUpdatedEvent {
    pub request_id: u64,
    pub price: u64,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ResultErrorEvent {
    pub request_id: u64,
    pub message: Bytes,
    pub timestamp: u64,
}

pub fn emit_price_updated(env: &Env, request_id: u64, price: u64, timestamp: u64) {
    env.events().publish(
        (symbol_short!("FEED"), symbol_short!("PRICE_UPD")),
        PriceUpdatedEvent {
            request_id,
            price,
            timestamp,
        },
    );
}

pub fn emit_result_error(env: &Env, request_id: u64, message: Bytes) {
    env.events().publish(
        (symbol_short!("FEED"), symbol_short!("RES_ERR")),
        ResultErrorEvent {
            request_id,
            message,
            timestamp: env.ledger().timestamp(),
        },
    );
}
