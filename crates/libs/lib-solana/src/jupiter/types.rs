//! # Jupiter API Types
//!
//! Request and response shapes of the Jupiter swap API (`/quote`, `/swap`).
//!
//! [`SwapQuote`] is forwarded to `/swap` exactly as it was received: fields
//! this crate does not model are captured in `extra` and serialized back out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request-scoped parameters for a full swap (quote + transaction build).
#[derive(Debug, Clone, PartialEq)]
pub struct SwapParams {
    pub input_mint: String,
    pub output_mint: String,
    /// Human-readable amount of the input token
    pub amount: f64,
    /// Overrides the client's default slippage when set
    pub slippage_bps: Option<u16>,
    /// Signer that will pay for and sign the transaction
    pub user_public_key: String,
}

/// Response from Jupiter quote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub input_mint: String,
    /// Input amount in base units
    pub in_amount: String,
    pub output_mint: String,
    /// Expected output amount in base units
    pub out_amount: String,
    pub slippage_bps: u16,
    /// Decimal fraction, e.g. `"0.0012"` for 0.12%
    pub price_impact_pct: String,
    pub route_plan: Vec<RoutePlanStep>,
    /// Everything else Jupiter sent (platformFee, swapMode, contextSlot, ...).
    /// Optional fields stay here so absent and `null` both survive unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A step in Jupiter's routing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanStep {
    pub swap_info: SwapInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Details about a single swap operation within a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub amm_key: String,
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the `/swap` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionRequest<'a> {
    pub quote_response: &'a SwapQuote,
    pub user_public_key: &'a str,
    pub wrap_and_unwrap_sol: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<&'a str>,
}

/// Response from Jupiter swap API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionResponse {
    /// Base64-encoded serialized unsigned transaction
    pub swap_transaction: String,
    #[serde(default)]
    pub last_valid_block_height: Option<u64>,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
}

/// Quote plus the transaction built from it.
#[derive(Debug, Clone)]
pub struct CreatedSwap {
    pub quote: SwapQuote,
    pub transaction: String,
}

const UNLABELED_VENUE: &str = "Unknown";

impl SwapInfo {
    /// Venue name (`"Raydium"`, `"Orca"`, ...), when Jupiter supplied one.
    pub fn label(&self) -> Option<&str> {
        self.extra.get("label").and_then(Value::as_str)
    }
}

impl SwapQuote {
    /// Venue labels of the route, in execution order.
    pub fn route_labels(&self) -> Vec<&str> {
        self.route_plan
            .iter()
            .map(|step| step.swap_info.label().unwrap_or(UNLABELED_VENUE))
            .collect()
    }

    /// Route as `"Raydium → Orca"`.
    pub fn format_route(&self) -> String {
        self.route_labels().join(" → ")
    }

    /// Price impact as a percentage with two decimals, e.g. `"0.12%"`.
    ///
    /// An unparseable value is shown as `0.00%`.
    pub fn format_price_impact(&self) -> String {
        let impact = self.price_impact_pct.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!("Unparseable priceImpactPct from Jupiter: {}", self.price_impact_pct);
            0.0
        });
        format!("{:.2}%", impact * 100.0)
    }

    /// Output amount in base units.
    pub fn out_amount_units(&self) -> Option<u64> {
        self.out_amount.parse().ok()
    }
}
