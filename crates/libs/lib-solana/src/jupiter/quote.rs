//! # Jupiter Quote API
//!
//! Quote API integration for getting swap quotes from Jupiter.

use super::client::JupiterHttpClient;
use super::types::SwapQuote;
use crate::amount::to_base_units;
use lib_core::{AppError, Result};
use tracing::debug;

impl JupiterHttpClient {
    /// Get a swap quote from Jupiter Aggregator V6.
    ///
    /// `amount` is in human units of the input token; it is converted to base
    /// units with the input token's decimals before the request is sent. The
    /// returned quote is not validated beyond deserialization.
    pub async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: u16,
    ) -> Result<SwapQuote> {
        let input_token = self.token_for_mint(input_mint);
        let amount_units = to_base_units(amount, input_token.decimals);

        debug!(
            "Jupiter swap quote request: {} {} ({} units, {} decimals) -> {}, slippage {} bps",
            amount, input_token.symbol, amount_units, input_token.decimals, output_mint, slippage_bps
        );

        let response = self
            .http
            .get(self.quote_url())
            .query(&[
                ("inputMint", input_mint.to_string()),
                ("outputMint", output_mint.to_string()),
                ("amount", amount_units.to_string()),
                ("slippageBps", slippage_bps.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Aggregator(format!("Jupiter quote request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Aggregator(format!(
                "Jupiter quote failed: {} {}",
                status.as_u16(),
                error_text
            )));
        }

        let quote: SwapQuote = response
            .json()
            .await
            .map_err(|e| AppError::Aggregator(format!("Jupiter quote parse failed: {}", e)))?;

        debug!(
            "Jupiter quote: {} -> {} base units (impact: {}, {} hops)",
            quote.in_amount,
            quote.out_amount,
            quote.price_impact_pct,
            quote.route_plan.len()
        );

        Ok(quote)
    }
}
