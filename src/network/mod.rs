//! Network layer - faucet backend calls
//!
//! The Network actor receives claim/balance commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
