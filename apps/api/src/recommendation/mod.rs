// Recommendation adapter: wire contract with the external backend, response
// normalization, fallback batch, and the HTTP handlers that expose it.
// All backend calls go through client — nothing else builds requests to it.

pub mod adapter;
pub mod analysis;
pub mod client;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod wire;
