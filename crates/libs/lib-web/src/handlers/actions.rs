//! # Swap Action Handlers
//!
//! Solana Actions endpoints for the two swap route families defined in
//! [`crate::routes`].
//!
//! ## Endpoints
//!
//! - `GET /api/actions/swap` - metadata, registered pairs only (default SOL → USDC)
//! - `POST /api/actions/swap` - unsigned transaction
//! - `GET /api/actions/dynamic-swap` - metadata, any pair (default SOL → FARTCOIN)
//! - `POST /api/actions/dynamic-swap` - unsigned transaction
//! - `OPTIONS` on every action path - preflight, empty body
//!
//! Every subpath (`/api/actions/swap/...`) is served like its parent, matching
//! the `/**` rules of `actions.json`.
//!
//! ## Request Examples
//!
//! ```bash
//! # Discovery
//! curl "http://localhost:3001/api/actions/swap?inputMint=So11111111111111111111111111111111111111112&outputMint=EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
//!
//! # Execution (the wallet fills in `account`)
//! curl -X POST "http://localhost:3001/api/actions/swap?amount=1" \
//!   -H "Content-Type: application/json" \
//!   -d '{ "account": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL" }'
//! ```
//!
//! ## Field Resolution
//!
//! For `POST`, `amount`, `inputMint`, `outputMint` and `slippageBps` are read
//! from the JSON body first, then the query string; mints finally fall back to
//! the route's default pair. `account` is only read from the body. A body that
//! is empty or not a JSON object counts as `{}`, and empty strings count as
//! absent.

use crate::routes::{SwapActionRoute, DYNAMIC_SWAP_ACTION, SWAP_ACTION};
use crate::services::{ExecutionRequest, SwapActionService};
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use lib_core::dto::{ActionGetResponse, ActionPostResponse};
use lib_core::Result;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::instrument;

/// Action fields found in the query string.
///
/// Built from raw pairs so that a repeated or unexpected key can never reject
/// the request before it reaches the handler. The first non-blank value of a
/// key wins.
#[derive(Debug, Default, PartialEq)]
pub struct ActionQuery {
    pub input_mint: Option<String>,
    pub output_mint: Option<String>,
    pub amount: Option<String>,
    pub slippage_bps: Option<String>,
}

impl ActionQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            if value.trim().is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                "inputMint" => &mut query.input_mint,
                "outputMint" => &mut query.output_mint,
                "amount" => &mut query.amount,
                "slippageBps" => &mut query.slippage_bps,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        query
    }
}

/// String form of a body field. Numbers are accepted for numeric fields.
fn body_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Merge body, query and route defaults into one request.
fn resolve_execution(route: &SwapActionRoute, query: &ActionQuery, body: &[u8]) -> ExecutionRequest {
    let body: Map<String, Value> = serde_json::from_slice(body).unwrap_or_default();

    ExecutionRequest {
        account: match body.get("account") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        },
        amount: body_field(&body, "amount").or_else(|| query.amount.clone()),
        input_mint: body_field(&body, "inputMint")
            .or_else(|| query.input_mint.clone())
            .unwrap_or_else(|| route.default_input_mint.to_string()),
        output_mint: body_field(&body, "outputMint")
            .or_else(|| query.output_mint.clone())
            .unwrap_or_else(|| route.default_output_mint.to_string()),
        slippage_bps: body_field(&body, "slippageBps").or_else(|| query.slippage_bps.clone()),
    }
}

fn describe(
    route: &SwapActionRoute,
    service: &SwapActionService,
    query: &ActionQuery,
) -> Result<Json<ActionGetResponse>> {
    service
        .describe(route, query.input_mint.as_deref(), query.output_mint.as_deref())
        .map(Json)
}

async fn execute(
    route: &SwapActionRoute,
    service: &SwapActionService,
    query: &ActionQuery,
    body: &[u8],
) -> Result<Json<ActionPostResponse>> {
    let request = resolve_execution(route, query, body);
    service.execute(route, &request).await.map(Json)
}

/// `GET /api/actions/swap`
#[instrument(skip(service))]
pub async fn get_swap(
    State(service): State<Arc<SwapActionService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ActionGetResponse>> {
    describe(&SWAP_ACTION, &service, &ActionQuery::from_pairs(pairs))
}

/// `POST /api/actions/swap`
#[instrument(skip(service, body))]
pub async fn post_swap(
    State(service): State<Arc<SwapActionService>>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>> {
    execute(&SWAP_ACTION, &service, &ActionQuery::from_pairs(pairs), &body).await
}

/// `GET /api/actions/dynamic-swap`
#[instrument(skip(service))]
pub async fn get_dynamic_swap(
    State(service): State<Arc<SwapActionService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ActionGetResponse>> {
    describe(&DYNAMIC_SWAP_ACTION, &service, &ActionQuery::from_pairs(pairs))
}

/// `POST /api/actions/dynamic-swap`
#[instrument(skip(service, body))]
pub async fn post_dynamic_swap(
    State(service): State<Arc<SwapActionService>>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>> {
    execute(&DYNAMIC_SWAP_ACTION, &service, &ActionQuery::from_pairs(pairs), &body).await
}

/// `OPTIONS` on any action path. Headers come from the action headers layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_query_first_non_blank_value_wins() {
        let query = ActionQuery::from_pairs(pairs(&[
            ("amount", " "),
            ("amount", "1"),
            ("amount", "2"),
            ("inputMint", "A"),
            ("inputMint", "B"),
            ("account", "ignored"),
        ]));

        assert_eq!(
            query,
            ActionQuery {
                input_mint: Some("A".to_string()),
                amount: Some("1".to_string()),
                ..Default::default()
            }
        );
    }
}
