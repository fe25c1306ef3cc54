//! # Jupiter Swap Transaction Building
//!
//! Swap transaction building from Jupiter quotes.

use super::client::JupiterHttpClient;
use super::types::{SwapQuote, SwapTransactionRequest, SwapTransactionResponse};
use lib_core::{AppError, Result};
use tracing::debug;

impl JupiterHttpClient {
    /// Build an unsigned swap transaction from a quote.
    ///
    /// The quote is sent back to Jupiter verbatim. SOL is wrapped/unwrapped
    /// automatically and the configured fee account, if any, is attached.
    pub async fn get_swap_transaction(
        &self,
        quote_response: &SwapQuote,
        user_public_key: &str,
    ) -> Result<SwapTransactionResponse> {
        let request_body = SwapTransactionRequest {
            quote_response,
            user_public_key,
            wrap_and_unwrap_sol: true,
            fee_account: self.fee_account.as_deref(),
        };

        debug!("Jupiter swap transaction request for user: {}", user_public_key);

        let response = self
            .http
            .post(self.swap_url())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Aggregator(format!("Jupiter swap request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Aggregator(format!(
                "Jupiter swap transaction failed: {} {}",
                status.as_u16(),
                error_text
            )));
        }

        let swap_response: SwapTransactionResponse = response.json().await.map_err(|e| {
            AppError::Aggregator(format!("Jupiter swap transaction parse failed: {}", e))
        })?;

        debug!(
            "Jupiter swap transaction received (last valid block height: {:?})",
            swap_response.last_valid_block_height
        );

        Ok(swap_response)
    }
}
