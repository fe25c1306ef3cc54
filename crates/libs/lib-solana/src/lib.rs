//! # Solana Library
//!
//! Solana-side building blocks for the swap actions: the curated token
//! registry, base-unit amount conversion, address validation and the Jupiter
//! aggregator client.

pub mod address;
pub mod amount;
pub mod jupiter;
pub mod tokens;

// Re-export commonly used types from root for convenience
pub use address::{is_valid_address, parse_address};
pub use amount::{checked_to_base_units, from_base_units, to_base_units};
pub use jupiter::{CreatedSwap, JupiterClient, SwapAggregator, SwapParams, SwapQuote};
pub use tokens::{Token, TokenRegistry};
