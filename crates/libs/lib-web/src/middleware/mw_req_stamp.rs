//! # Request Stamping Middleware
//!
//! Generates a unique request ID, stores it in the request extensions and
//! echoes it back as `X-Request-ID` so a caller's report can be matched to the
//! server-side diagnostics of a failed swap.
//!
//! Handlers can read it via `Extension<RequestStamp>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier (uuid v4)
    pub id: String,
    /// When the request entered the stack
    pub started: Instant,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started: Instant::now(),
        }
    }
}

/// Request stamping middleware. Must be the outermost layer so later
/// middleware can see the stamp.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}
