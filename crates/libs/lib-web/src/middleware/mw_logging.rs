//! # Request/Response Logging Middleware
//!
//! One line per request and one per response, correlated by the request ID
//! from [`RequestStamp`](super::RequestStamp). Sensitive headers are redacted
//! in the debug-level header dump.

use crate::middleware::mw_req_stamp::RequestStamp;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Headers that should not be logged
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key", "x-auth-token"];

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let (request_id, start) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| (s.id.clone(), s.started))
        .unwrap_or_else(|| ("unknown".to_string(), Instant::now()));

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            if SENSITIVE_HEADERS.contains(&name.as_str()) {
                Some((name.to_string(), "***REDACTED***".to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect();

    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        origin = ?origin,
        "[REQUEST] {} {}",
        method,
        path
    );
    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    }

    response
}
