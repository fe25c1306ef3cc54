//! # Actions Manifest
//!
//! `actions.json` document telling Blink renderers which paths on this host
//! map to action endpoints. A trailing `/**` matches any deeper path.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionsManifest {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

impl ActionRule {
    pub fn new(path_pattern: impl Into<String>, api_path: impl Into<String>) -> Self {
        Self {
            path_pattern: path_pattern.into(),
            api_path: api_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_serializes_camel_case() {
        let rule = ActionRule::new("/swap", "/api/actions/swap");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json, serde_json::json!({ "pathPattern": "/swap", "apiPath": "/api/actions/swap" }));
    }
}
