//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature. Handlers only extract and resolve request
//! fields; swap logic lives in [`crate::services`].
//!
//! ## Handler Modules
//!
//! - **[`actions`]**: Solana Actions swap endpoints
//!   - `GET /api/actions/swap` - Blink metadata for a registered token pair
//!   - `POST /api/actions/swap` - Unsigned swap transaction
//!   - `GET|POST /api/actions/dynamic-swap` - Same, for any token pair
//!   - `OPTIONS` on both - CORS preflight
//!
//! - **[`manifest`]**: `GET /actions.json` - path mapping for Blink renderers
//!
//! - **[`tokens`]**: `GET /api/tokens?q=` - token registry search
//!
//! - **[`health`]**: `GET /health`
//!
//! ## Error Handling
//!
//! Handlers return [`lib_core::Result`]; [`lib_core::AppError`] renders itself
//! as the `{ "error": "..." }` envelope with the matching status.

pub mod actions;
pub mod health;
pub mod manifest;
pub mod tokens;

#[cfg(test)]
mod tests;
