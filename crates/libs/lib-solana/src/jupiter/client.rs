//! # Jupiter HTTP Client
//!
//! HTTP client wrapper holding the connection pool, API base URL and the
//! token registry used to resolve input decimals.

use crate::tokens::{Token, TokenRegistry};
use reqwest::Client;
use std::sync::Arc;

/// HTTP client wrapper for Jupiter API
#[derive(Clone)]
pub struct JupiterHttpClient {
    pub http: Client,
    /// Base URL, e.g. `https://quote-api.jup.ag/v6`
    pub api_base: String,
    pub registry: Arc<TokenRegistry>,
    pub default_slippage_bps: u16,
    /// Forwarded as `feeAccount` to the swap build when set
    pub fee_account: Option<String>,
}

impl JupiterHttpClient {
    pub(crate) fn quote_url(&self) -> String {
        format!("{}/quote", self.api_base)
    }

    pub(crate) fn swap_url(&self) -> String {
        format!("{}/swap", self.api_base)
    }

    /// Metadata for `mint`; unknown mints get placeholder metadata (6 decimals).
    pub(crate) fn token_for_mint(&self, mint: &str) -> Token {
        self.registry.resolve_or_synthesize(mint)
    }
}
