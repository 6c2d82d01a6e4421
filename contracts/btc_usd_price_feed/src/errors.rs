use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–3) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidRequest = 3,

    // --- Request state machine (4–7) ---
    /// A request is already in flight; complete it before submitting another.
    AlreadyPending = 4,
    /// At least one reward bucket is below the network's minimum.
    InsufficientReward = 5,
    /// Nothing has been submitted since the last completion.
    NoPendingUpdate = 6,
    /// The network has not relayed the request yet. Retry later.
    NotYetAccepted = 7,
}
