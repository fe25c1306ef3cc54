//! # Action Data Transfer Objects
//!
//! Request/response bodies of the action endpoints.
//!
//! ## Discovery (`GET`)
//!
//! ```json
//! {
//!   "title": "Swap SOL to USDC",
//!   "icon": "https://.../logo.png",
//!   "description": "Swap SOL for USDC using Jupiter's best routes",
//!   "label": "Jupiter Swap",
//!   "links": {
//!     "actions": [
//!       { "label": "Swap 1 SOL", "href": "/api/actions/swap?inputMint=...&outputMint=...&amount=1" },
//!       {
//!         "label": "Custom Amount",
//!         "href": "/api/actions/swap?inputMint=...&outputMint=...&amount={amount}",
//!         "parameters": [{ "name": "amount", "label": "SOL Amount", "required": true, "type": "number" }]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Execution (`POST`)
//!
//! Success: `{ "transaction": "<base64>", "message": "..." }`, failure: `{ "error": "..." }`.

use serde::{Deserialize, Serialize};

/// Metadata returned by the discovery endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionGetResponse {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// One selectable button/form in a Blink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAction {
    pub label: String,
    /// Relative URL; `{name}` placeholders are filled from `parameters`
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

impl LinkedAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ActionParameter>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// User input collected by the client before posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: ParameterType,
}

impl ActionParameter {
    pub fn required(name: impl Into<String>, label: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: true,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Text,
    Number,
}

/// Successful execution response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPostResponse {
    /// Base64-encoded unsigned transaction
    pub transaction: String,
    pub message: String,
}

/// Error envelope shared by every action endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionError {
    pub error: String,
}
