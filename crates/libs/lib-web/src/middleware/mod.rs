//! # Middleware
//!
//! Axum middleware for request stamping, request logging and the Solana
//! Actions response headers.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: Request ID and timestamp stamping
//! - **[`mw_logging`]**: Request/response logging
//! - **[`mw_action_headers`]**: CORS and Actions protocol headers

// region: --- Modules
pub mod mw_action_headers;
pub mod mw_logging;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_action_headers::{set_action_headers, ActionHeaders};
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp, REQUEST_ID_HEADER};
// endregion: --- Re-exports
