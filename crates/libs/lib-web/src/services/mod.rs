//! # Services Layer
//!
//! Business logic sitting between the HTTP handlers and the aggregator client.
//!
//! ```text
//! Handlers (HTTP) → SwapActionService → SwapAggregator → Jupiter API
//!                         ↓
//!                   TokenRegistry
//! ```
//!
//! Handlers stay thin: they resolve request fields and hand them to a service,
//! which owns validation, composition and message formatting.

pub mod swap_action;

pub use swap_action::{ExecutionRequest, SwapActionService, ValidatedSwap};
