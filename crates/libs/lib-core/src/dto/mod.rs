//! # Data Transfer Objects (DTOs)
//!
//! Wire structures of the Solana Actions protocol as served to wallets and
//! Blink renderers.

pub mod actions;
pub mod manifest;

pub use actions::*;
pub use manifest::*;
