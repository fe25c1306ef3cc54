//! # Address Validation
//!
//! Syntactic checks for Solana account and mint addresses. Whether the
//! account exists on-chain is left to the aggregator and the cluster.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Parse a base58 address into a [`Pubkey`].
pub fn parse_address(address: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(address).map_err(|e| format!("Invalid address {}: {}", address, e))
}

/// Whether `address` is a well-formed base58 32-byte public key.
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_ok()
}
