//! # Token Search Handler
//!
//! `GET /api/tokens?q=<query>` backs the token picker used when building
//! dynamic-swap links. An absent or blank `q` lists the whole registry.

use axum::extract::{Query, State};
use axum::Json;
use lib_solana::{Token, TokenRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct TokenSearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenListResponse {
    pub tokens: Vec<Token>,
}

pub async fn search_tokens(
    State(registry): State<Arc<TokenRegistry>>,
    Query(query): Query<TokenSearchQuery>,
) -> Json<TokenListResponse> {
    let tokens: Vec<Token> = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => registry.search(q).into_iter().cloned().collect(),
        None => registry.list_all().to_vec(),
    };
    debug!("Token search q={:?} -> {} results", query.q, tokens.len());

    Json(TokenListResponse { tokens })
}
