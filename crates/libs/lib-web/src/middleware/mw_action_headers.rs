//! # Action Headers Middleware
//!
//! Blink clients fetch actions cross-origin and check two protocol headers, so
//! every response from an action route (errors and preflight included) carries:
//!
//! ```text
//! Access-Control-Allow-Origin: *
//! Access-Control-Allow-Methods: GET, POST, OPTIONS
//! Access-Control-Allow-Headers: Content-Type, Authorization, Accept-Encoding
//! X-Action-Version: 2.1.3
//! X-Blockchain-Ids: solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp
//! ```

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderName, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use lib_core::{Network, ACTION_VERSION};

pub const ACTION_VERSION_HEADER: &str = "x-action-version";
pub const BLOCKCHAIN_IDS_HEADER: &str = "x-blockchain-ids";

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, Accept-Encoding";

/// Header values fixed at startup.
#[derive(Clone, Debug)]
pub struct ActionHeaders {
    blockchain_id: HeaderValue,
}

impl ActionHeaders {
    pub fn new(network: Network) -> Self {
        Self {
            blockchain_id: HeaderValue::from_static(network.blockchain_id()),
        }
    }
}

/// Stamp the CORS and Actions headers on the response, overwriting any set by the handler.
pub async fn set_action_headers(
    State(headers): State<ActionHeaders>,
    req: Request,
    next: Next,
) -> Response {
    let mut res = next.run(req).await;

    let out = res.headers_mut();
    out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    out.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    out.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    out.insert(
        HeaderName::from_static(ACTION_VERSION_HEADER),
        HeaderValue::from_static(ACTION_VERSION),
    );
    out.insert(
        HeaderName::from_static(BLOCKCHAIN_IDS_HEADER),
        headers.blockchain_id.clone(),
    );

    res
}
