//! # Handler Tests
//!
//! Drive the real router with `oneshot` requests. The aggregator is replaced
//! by [`FakeAggregator`], so nothing leaves the process.


use crate::server::{create_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use lib_core::{AppError, Config, Result};
use lib_solana::{SwapAggregator, SwapParams, SwapQuote, TokenRegistry};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const FARTCOIN_MINT: &str = "9BB6NFEcjBCtnNLFko2FqVQBq8HHM13kCyYcdQbgpump";
pub const USER: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// Well-formed address that is not in the registry
pub const UNLISTED_MINT: &str = "11111111111111111111111111111111";
pub const FAKE_TRANSACTION: &str = "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// What the fake aggregator should do.
#[derive(Clone, Copy, PartialEq)]
pub enum Outcome {
    Succeed,
    FailQuote,
    FailBuild,
}

/// Records every call and answers from a canned quote.
pub struct FakeAggregator {
    outcome: Outcome,
    pub quoted: Mutex<Vec<SwapParams>>,
    pub built_for: Mutex<Vec<String>>,
}

impl FakeAggregator {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            quoted: Mutex::new(Vec::new()),
            built_for: Mutex::new(Vec::new()),
        })
    }
}

/// 1 SOL → 150.25 USDC via Raydium then Orca, 0.12% impact.
pub fn canned_quote(params: &SwapParams) -> SwapQuote {
    serde_json::from_value(json!({
        "inputMint": params.input_mint,
        "inAmount": "1000000000",
        "outputMint": params.output_mint,
        "outAmount": "150250000",
        "otherAmountThreshold": "149498750",
        "swapMode": "ExactIn",
        "slippageBps": params.slippage_bps.unwrap_or(50),
        "priceImpactPct": "0.0012",
        "routePlan": [
            { "swapInfo": { "ammKey": "amm1", "label": "Raydium", "inputMint": params.input_mint, "outputMint": "mid", "inAmount": "1000000000", "outAmount": "7" }, "percent": 100 },
            { "swapInfo": { "ammKey": "amm2", "label": "Orca", "inputMint": "mid", "outputMint": params.output_mint, "inAmount": "7", "outAmount": "150250000" }, "percent": 100 }
        ]
    }))
    .unwrap()
}

#[async_trait]
impl SwapAggregator for FakeAggregator {
    async fn quote(&self, params: &SwapParams) -> Result<SwapQuote> {
        self.quoted.lock().unwrap().push(params.clone());
        if self.outcome == Outcome::FailQuote {
            return Err(AppError::Aggregator(
                "Jupiter quote failed: 400 Bad Request {\"error\":\"Could not find any route\"}".to_string(),
            ));
        }
        Ok(canned_quote(params))
    }

    async fn build_transaction(&self, _quote: &SwapQuote, user_public_key: &str) -> Result<String> {
        self.built_for.lock().unwrap().push(user_public_key.to_string());
        if self.outcome == Outcome::FailBuild {
            return Err(AppError::Aggregator(
                "Jupiter swap transaction failed: 500 Internal Server Error".to_string(),
            ));
        }
        Ok(FAKE_TRANSACTION.to_string())
    }
}

pub fn test_config() -> Config {
    Config {
        fallback_icon_url: "https://example.com/fallback.png".to_string(),
        ..Config::default()
    }
}

/// Full router backed by `aggregator`.
pub fn test_app(aggregator: Arc<FakeAggregator>) -> Router {
    let state = AppState::new(test_config(), Arc::new(TokenRegistry::curated()), aggregator);
    create_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The five headers every action response carries.
pub fn assert_action_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization, Accept-Encoding"
    );
    assert_eq!(headers["x-action-version"], "2.1.3");
    assert_eq!(headers["x-blockchain-ids"], "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
}

pub fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status, "unexpected status");
}
