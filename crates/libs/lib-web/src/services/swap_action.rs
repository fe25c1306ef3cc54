//! # Swap Action Service
//!
//! Discovery and execution logic shared by every swap action route. A route's
//! [`TokenPolicy`] decides how unregistered mints are treated; everything else
//! is identical.
//!
//! ## Execution pipeline
//!
//! ```text
//! VALIDATING ─► QUOTING ─► BUILDING ─► RESPONDING
//!      │            │          │
//!      └────────────┴──────────┴──► FAILED
//! ```
//!
//! Validation is short-circuit, first violation wins:
//!
//! 1. `account` present and a valid address
//! 2. `amount` present, numeric and `> 0`
//! 3. both mints valid addresses and distinct
//! 4. `Restricted` routes only: both mints registered
//! 5. `amount` expressible in the input token's base units (`u64`)
//! 6. `slippageBps`, when supplied, within `1..=10000`

use crate::routes::{SwapActionRoute, TokenPolicy};
use lib_core::config::MAX_SLIPPAGE_BPS;
use lib_core::dto::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionPostResponse, LinkedAction,
    ParameterType,
};
use lib_core::{AppError, Result};
use lib_solana::{checked_to_base_units, from_base_units, is_valid_address, CreatedSwap, SwapAggregator, SwapParams, Token, TokenRegistry};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Raw execution fields after body/query/default resolution, still unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionRequest {
    pub account: Option<String>,
    pub amount: Option<String>,
    pub input_mint: String,
    pub output_mint: String,
    pub slippage_bps: Option<String>,
}

/// Output of the validation pipeline; everything needed to call the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSwap {
    pub params: SwapParams,
    pub input_token: Token,
    pub output_token: Token,
}

/// Discovery and execution for swap action routes.
pub struct SwapActionService {
    registry: Arc<TokenRegistry>,
    aggregator: Arc<dyn SwapAggregator>,
    fallback_icon_url: String,
}

impl SwapActionService {
    pub fn new(
        registry: Arc<TokenRegistry>,
        aggregator: Arc<dyn SwapAggregator>,
        fallback_icon_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            aggregator,
            fallback_icon_url: fallback_icon_url.into(),
        }
    }

    /// Build the Blink metadata for `route`.
    ///
    /// Pure: only registry lookups and string templating. Missing mints fall
    /// back to the route's default pair.
    pub fn describe(
        &self,
        route: &SwapActionRoute,
        input_mint: Option<&str>,
        output_mint: Option<&str>,
    ) -> Result<ActionGetResponse> {
        let input_mint = input_mint.unwrap_or(route.default_input_mint);
        let output_mint = output_mint.unwrap_or(route.default_output_mint);

        let (input_token, output_token) = match route.policy {
            TokenPolicy::Restricted => {
                match (
                    self.registry.lookup_by_mint(input_mint),
                    self.registry.lookup_by_mint(output_mint),
                ) {
                    (Some(input), Some(output)) => (input.clone(), output.clone()),
                    _ => return Err(AppError::UnknownToken("Invalid token pair".to_string())),
                }
            }
            TokenPolicy::Open => {
                if !is_valid_address(input_mint) || !is_valid_address(output_mint) {
                    return Err(AppError::Validation("Invalid token mint address".to_string()));
                }
                (
                    self.registry.resolve_or_synthesize(input_mint),
                    self.registry.resolve_or_synthesize(output_mint),
                )
            }
        };

        let (input, output) = (&input_token.symbol, &output_token.symbol);
        let icon = input_token
            .logo_uri
            .clone()
            .unwrap_or_else(|| self.fallback_icon_url.clone());

        let mut actions: Vec<LinkedAction> = route
            .preset_amounts
            .iter()
            .map(|amount| {
                let label = match route.policy {
                    TokenPolicy::Restricted => format!("Swap {} {}", amount, input),
                    TokenPolicy::Open => format!("Swap {} {} → {}", amount, input, output),
                };
                LinkedAction::new(label, route.href(input_mint, output_mint, amount))
            })
            .collect();

        let custom_label = match route.policy {
            TokenPolicy::Restricted => "Custom Amount".to_string(),
            TokenPolicy::Open => format!("Custom {} → {}", input, output),
        };
        actions.push(
            LinkedAction::new(custom_label, route.href(input_mint, output_mint, "{amount}"))
                .with_parameters(vec![ActionParameter::required(
                    "amount",
                    format!("{} Amount", input),
                    ParameterType::Number,
                )]),
        );

        let (title, description) = match route.policy {
            TokenPolicy::Restricted => (
                format!("Swap {} to {}", input, output),
                format!("Swap {} for {} using Jupiter's best routes", input, output),
            ),
            TokenPolicy::Open => {
                actions.push(
                    LinkedAction::new(
                        "Different Token Pair",
                        route.href("{inputMint}", "{outputMint}", "{amount}"),
                    )
                    .with_parameters(vec![
                        ActionParameter::required("inputMint", "Input Token Mint Address", ParameterType::Text),
                        ActionParameter::required("outputMint", "Output Token Mint Address", ParameterType::Text),
                        ActionParameter::required("amount", "Token Amount", ParameterType::Number),
                    ]),
                );
                (
                    format!("Dynamic Token Swap: {} → {}", input, output),
                    format!(
                        "Swap any token using Jupiter's best routes. Currently configured for {} to {}. Supports {}+ tokens and any valid mint address.",
                        input,
                        output,
                        self.registry.list_all().len()
                    ),
                )
            }
        };

        Ok(ActionGetResponse {
            title,
            icon,
            description,
            label: route.label.to_string(),
            links: ActionLinks { actions },
        })
    }

    /// Run the validation pipeline for `route`.
    pub fn validate(&self, route: &SwapActionRoute, request: &ExecutionRequest) -> Result<ValidatedSwap> {
        let account = request
            .account
            .as_deref()
            .ok_or_else(|| AppError::Validation("Missing user public key".to_string()))?;
        if !is_valid_address(account) {
            return Err(AppError::Validation("Invalid user public key".to_string()));
        }

        let amount = request
            .amount
            .as_deref()
            .ok_or_else(|| AppError::Validation("Missing swap amount".to_string()))?;
        let amount = parse_amount(amount)
            .ok_or_else(|| AppError::Validation("Invalid swap amount".to_string()))?;

        let (input_mint, output_mint) = (request.input_mint.as_str(), request.output_mint.as_str());
        if !is_valid_address(input_mint) || !is_valid_address(output_mint) {
            return Err(AppError::Validation("Invalid token mint address".to_string()));
        }
        if input_mint == output_mint {
            return Err(AppError::Validation(
                "Input and output tokens must be different".to_string(),
            ));
        }

        let (input_token, output_token) = match route.policy {
            TokenPolicy::Restricted => match (
                self.registry.lookup_by_mint(input_mint),
                self.registry.lookup_by_mint(output_mint),
            ) {
                (Some(input), Some(output)) => (input.clone(), output.clone()),
                _ => return Err(AppError::UnknownToken("Invalid token pair".to_string())),
            },
            TokenPolicy::Open => (
                self.registry.resolve_or_synthesize(input_mint),
                self.registry.resolve_or_synthesize(output_mint),
            ),
        };

        // Too large to express in the input token's base units
        if checked_to_base_units(amount, input_token.decimals).is_none() {
            return Err(AppError::Validation("Invalid swap amount".to_string()));
        }

        let slippage_bps = request
            .slippage_bps
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .ok()
                    .filter(|bps| (1..=MAX_SLIPPAGE_BPS).contains(bps))
                    .ok_or_else(|| AppError::Validation("Invalid slippage tolerance".to_string()))
            })
            .transpose()?;

        Ok(ValidatedSwap {
            params: SwapParams {
                input_mint: input_mint.to_string(),
                output_mint: output_mint.to_string(),
                amount,
                slippage_bps,
                user_public_key: account.to_string(),
            },
            input_token,
            output_token,
        })
    }

    /// Validate, quote, build and format. Any failure aborts the whole swap.
    #[instrument(skip(self, route, request), fields(route = route.path))]
    pub async fn execute(
        &self,
        route: &SwapActionRoute,
        request: &ExecutionRequest,
    ) -> Result<ActionPostResponse> {
        debug!("[VALIDATING] {:?}", request);
        let swap = self.validate(route, request).inspect_err(|e| {
            debug!("[FAILED] state=VALIDATING error={}", e);
        })?;

        info!(
            "[QUOTING] {} {} -> {}",
            swap.params.amount, swap.input_token.symbol, swap.output_token.symbol
        );
        let created = self.aggregator.create_swap(&swap.params).await.inspect_err(|e| {
            error!("[FAILED] state=QUOTING/BUILDING error={}", e);
        })?;

        let message = format_swap_message(&swap, &created)?;
        info!("[RESPONDING] route={}", created.quote.format_route());

        Ok(ActionPostResponse {
            transaction: created.transaction,
            message,
        })
    }
}

/// Human amount from a request field: finite and strictly positive.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Three-line summary shown by the wallet before signing.
fn format_swap_message(swap: &ValidatedSwap, created: &CreatedSwap) -> Result<String> {
    let out_units = created.quote.out_amount_units().ok_or_else(|| {
        AppError::Aggregator(format!("Unparseable outAmount: {}", created.quote.out_amount))
    })?;
    let out_amount = from_base_units(out_units, swap.output_token.decimals);

    Ok([
        format!(
            "Swapping {} {} → {:.6} {}",
            swap.params.amount, swap.input_token.symbol, out_amount, swap.output_token.symbol
        ),
        format!("Route: {}", created.quote.format_route()),
        format!("Price Impact: {}", created.quote.format_price_impact()),
    ]
    .join("\n"))
}
