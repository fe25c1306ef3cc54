//! # Jupiter Aggregator Client
//!
//! Two-step integration with the Jupiter swap API:
//!
//! 1. `GET /quote` with the input amount converted to base units
//! 2. `POST /swap` with the quote, returned verbatim, to get an unsigned transaction
//!
//! The steps run strictly in sequence and nothing is retried or cached. A
//! quote is a price snapshot, so any failure must restart from a fresh quote.

// region: --- Modules
pub mod types;
pub mod client;
pub mod quote;
pub mod swap;
// endregion: --- Modules

// region: --- Main Client
use crate::address::parse_address;
use crate::tokens::TokenRegistry;
use async_trait::async_trait;
use client::JupiterHttpClient;
use lib_core::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Anything that can turn swap parameters into a quote and an unsigned transaction.
///
/// Handlers depend on this trait rather than on [`JupiterClient`] so they can be
/// exercised without network access.
#[async_trait]
pub trait SwapAggregator: Send + Sync {
    /// Step 1: price the swap.
    async fn quote(&self, params: &SwapParams) -> Result<SwapQuote>;

    /// Step 2: build an unsigned transaction for `quote`, paid by `user_public_key`.
    async fn build_transaction(&self, quote: &SwapQuote, user_public_key: &str) -> Result<String>;

    /// Quote, then build. Either failure aborts the whole swap.
    async fn create_swap(&self, params: &SwapParams) -> Result<CreatedSwap> {
        let quote = self.quote(params).await?;
        debug!("Quote received ({} -> {}), building transaction", quote.in_amount, quote.out_amount);

        let transaction = self.build_transaction(&quote, &params.user_public_key).await?;

        Ok(CreatedSwap { quote, transaction })
    }
}

/// Builder for configuring JupiterClient.
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    api_base: String,
    default_slippage_bps: u16,
    fee_account: Option<String>,
    registry: Option<Arc<TokenRegistry>>,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
            fee_account: None,
            registry: None,
        }
    }
}

impl JupiterClientBuilder {
    /// Set the swap API base URL (without trailing `/quote` or `/swap`).
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Slippage used when [`SwapParams::slippage_bps`] is `None`.
    pub fn default_slippage_bps(mut self, bps: u16) -> Self {
        self.default_slippage_bps = bps;
        self
    }

    /// Fee account attached to every swap transaction.
    pub fn fee_account(mut self, account: Option<String>) -> Self {
        self.fee_account = account;
        self
    }

    /// Registry used to resolve input token decimals.
    pub fn registry(mut self, registry: Arc<TokenRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the JupiterClient with configured settings.
    pub fn build(self) -> anyhow::Result<JupiterClient> {
        if let Some(fee_account) = &self.fee_account {
            parse_address(fee_account).map_err(|e| anyhow::anyhow!("Invalid fee account: {}", e))?;
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        let inner = JupiterHttpClient {
            http,
            api_base: self.api_base,
            registry: self.registry.unwrap_or_else(|| Arc::new(TokenRegistry::curated())),
            default_slippage_bps: self.default_slippage_bps,
            fee_account: self.fee_account,
        };

        info!("Jupiter client ready ({})", inner.api_base);

        Ok(JupiterClient { inner })
    }
}

/// Client for Jupiter Aggregator API
#[derive(Clone)]
pub struct JupiterClient {
    inner: JupiterHttpClient,
}

impl JupiterClient {
    /// Create a new Jupiter client using a builder for configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lib_solana::jupiter::JupiterClient;
    ///
    /// let client = JupiterClient::builder()
    ///     .api_base("https://quote-api.jup.ag/v6")
    ///     .default_slippage_bps(100)
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }

    pub async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: u16,
    ) -> Result<types::SwapQuote> {
        self.inner.get_swap_quote(input_mint, output_mint, amount, slippage_bps).await
    }

    pub async fn get_swap_transaction(
        &self,
        quote_response: &types::SwapQuote,
        user_public_key: &str,
    ) -> Result<types::SwapTransactionResponse> {
        self.inner.get_swap_transaction(quote_response, user_public_key).await
    }
}

#[async_trait]
impl SwapAggregator for JupiterClient {
    async fn quote(&self, params: &SwapParams) -> Result<SwapQuote> {
        let slippage_bps = params.slippage_bps.unwrap_or(self.inner.default_slippage_bps);
        self.get_swap_quote(&params.input_mint, &params.output_mint, params.amount, slippage_bps)
            .await
    }

    async fn build_transaction(&self, quote: &SwapQuote, user_public_key: &str) -> Result<String> {
        let swap = self.get_swap_transaction(quote, user_public_key).await?;
        Ok(swap.swap_transaction)
    }
}
// endregion: --- Main Client

// Re-export commonly used types
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use super::types::tests::sample_quote_json;
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use lib_core::AppError;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    const USER: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    /// In-process stand-in for the Jupiter API that records what it receives.
    #[derive(Clone, Default)]
    struct MockJupiter {
        quote_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
        swap_bodies: Arc<Mutex<Vec<Value>>>,
        fail_quote: bool,
        fail_swap: bool,
    }

    async fn mock_quote(
        State(mock): State<MockJupiter>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        mock.quote_queries.lock().unwrap().push(params.clone());
        if mock.fail_quote {
            return (StatusCode::BAD_REQUEST, r#"{"error":"Could not find any route"}"#).into_response();
        }
        let mut quote = sample_quote_json();
        quote["inputMint"] = Value::from(params["inputMint"].clone());
        quote["inAmount"] = Value::from(params["amount"].clone());
        Json(quote).into_response()
    }

    async fn mock_swap(State(mock): State<MockJupiter>, Json(body): Json<Value>) -> Response {
        mock.swap_bodies.lock().unwrap().push(body);
        if mock.fail_swap {
            return (StatusCode::INTERNAL_SERVER_ERROR, "simulation failed").into_response();
        }
        Json(serde_json::json!({
            "swapTransaction": "AQAAAAAAAAAAAAAAAAAA",
            "lastValidBlockHeight": 279632475,
            "prioritizationFeeLamports": 5000
        }))
        .into_response()
    }

    async fn spawn_mock(mock: MockJupiter) -> String {
        let app = Router::new()
            .route("/quote", get(mock_quote))
            .route("/swap", post(mock_swap))
            .with_state(mock);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn params(input_mint: &str, amount: f64) -> SwapParams {
        SwapParams {
            input_mint: input_mint.to_string(),
            output_mint: USDC_MINT.to_string(),
            amount,
            slippage_bps: None,
            user_public_key: USER.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_swap_quotes_then_builds() {
        let mock = MockJupiter::default();
        let base = spawn_mock(mock.clone()).await;
        let client = JupiterClient::builder().api_base(base).build().unwrap();

        let created = client.create_swap(&params(SOL_MINT, 1.5)).await.unwrap();

        let queries = mock.quote_queries.lock().unwrap().clone();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0]["inputMint"], SOL_MINT);
        assert_eq!(queries[0]["outputMint"], USDC_MINT);
        assert_eq!(queries[0]["amount"], "1500000000");
        assert_eq!(queries[0]["slippageBps"], "50");

        let bodies = mock.swap_bodies.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["userPublicKey"], USER);
        assert_eq!(bodies[0]["wrapAndUnwrapSol"], Value::Bool(true));
        assert!(bodies[0].get("feeAccount").is_none());
        assert_eq!(bodies[0]["quoteResponse"], serde_json::to_value(&created.quote).unwrap());
        assert_eq!(bodies[0]["quoteResponse"]["swapMode"], "ExactIn");

        assert_eq!(created.transaction, "AQAAAAAAAAAAAAAAAAAA");
        assert_eq!(created.quote.in_amount, "1500000000");
    }

    #[tokio::test]
    async fn test_unknown_input_mint_uses_default_decimals() {
        let mock = MockJupiter::default();
        let base = spawn_mock(mock.clone()).await;
        let client = JupiterClient::builder().api_base(base).build().unwrap();

        client
            .create_swap(&params("11111111111111111111111111111111", 2.0))
            .await
            .unwrap();

        assert_eq!(mock.quote_queries.lock().unwrap()[0]["amount"], "2000000");
    }

    #[tokio::test]
    async fn test_slippage_override_and_fee_account() {
        let mock = MockJupiter::default();
        let base = spawn_mock(mock.clone()).await;
        let client = JupiterClient::builder()
            .api_base(base)
            .fee_account(Some(USER.to_string()))
            .build()
            .unwrap();

        let mut request = params(SOL_MINT, 0.1);
        request.slippage_bps = Some(100);
        client.create_swap(&request).await.unwrap();

        assert_eq!(mock.quote_queries.lock().unwrap()[0]["slippageBps"], "100");
        assert_eq!(mock.swap_bodies.lock().unwrap()[0]["feeAccount"], USER);
    }

    #[tokio::test]
    async fn test_quote_failure_stops_before_build() {
        let mock = MockJupiter {
            fail_quote: true,
            ..MockJupiter::default()
        };
        let base = spawn_mock(mock.clone()).await;
        let client = JupiterClient::builder().api_base(base).build().unwrap();

        let err = client.create_swap(&params(SOL_MINT, 1.0)).await.unwrap_err();

        match err {
            AppError::Aggregator(msg) => {
                assert!(msg.contains("400"), "{}", msg);
                assert!(msg.contains("Could not find any route"), "{}", msg);
            }
            other => panic!("expected aggregator error, got {:?}", other),
        }
        assert!(mock.swap_bodies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_failure_is_aggregator_error() {
        let mock = MockJupiter {
            fail_swap: true,
            ..MockJupiter::default()
        };
        let base = spawn_mock(mock.clone()).await;
        let client = JupiterClient::builder().api_base(base).build().unwrap();

        let err = client.create_swap(&params(SOL_MINT, 1.0)).await.unwrap_err();

        assert!(matches!(&err, AppError::Aggregator(msg) if msg.contains("500") && msg.contains("simulation failed")));
        assert_eq!(mock.quote_queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_aggregator_is_aggregator_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = JupiterClient::builder()
            .api_base(format!("http://{}", addr))
            .build()
            .unwrap();

        let err = client.create_swap(&params(SOL_MINT, 1.0)).await.unwrap_err();
        assert!(matches!(err, AppError::Aggregator(_)));
    }

    #[test]
    fn test_builder_rejects_malformed_fee_account() {
        let result = JupiterClient::builder()
            .fee_account(Some("not-an-address".to_string()))
            .build();
        assert!(result.is_err());
    }
}
