//! # Action Routes
//!
//! Static description of the two swap action families and the manifest that
//! advertises them.
//!
//! Both families share one handler; they differ only in their default token
//! pair, preset amounts, presentation and [`TokenPolicy`]:
//!
//! | Path | Policy | Default pair | Presets |
//! |---|---|---|---|
//! | `/api/actions/swap` | `Restricted` | SOL → USDC | 0.1, 1, 5 |
//! | `/api/actions/dynamic-swap` | `Open` | SOL → FARTCOIN | 0.1, 0.5, 1 |

use lib_core::dto::{ActionRule, ActionsManifest};
use lib_solana::tokens::{FARTCOIN_MINT, SOL_MINT, USDC_MINT};

/// How a route treats mints that are not in the token registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Only registered tokens; anything else is rejected as an unknown token pair.
    Restricted,
    /// Any well-formed mint; unknown ones get placeholder metadata.
    Open,
}

/// One swap action family.
#[derive(Debug, Clone, Copy)]
pub struct SwapActionRoute {
    /// API path serving GET/POST/OPTIONS
    pub path: &'static str,
    /// Short site path that the manifest maps onto `path`
    pub site_path: &'static str,
    pub policy: TokenPolicy,
    pub default_input_mint: &'static str,
    pub default_output_mint: &'static str,
    /// Human amounts offered as one-click buttons, exactly as shown
    pub preset_amounts: &'static [&'static str],
    pub label: &'static str,
}

pub const SWAP_ACTION: SwapActionRoute = SwapActionRoute {
    path: "/api/actions/swap",
    site_path: "/swap",
    policy: TokenPolicy::Restricted,
    default_input_mint: SOL_MINT,
    default_output_mint: USDC_MINT,
    preset_amounts: &["0.1", "1", "5"],
    label: "Jupiter Swap",
};

pub const DYNAMIC_SWAP_ACTION: SwapActionRoute = SwapActionRoute {
    path: "/api/actions/dynamic-swap",
    site_path: "/dynamic-swap",
    policy: TokenPolicy::Open,
    default_input_mint: SOL_MINT,
    default_output_mint: FARTCOIN_MINT,
    preset_amounts: &["0.1", "0.5", "1"],
    label: "Dynamic Swap",
};

pub const ACTION_ROUTES: [SwapActionRoute; 2] = [SWAP_ACTION, DYNAMIC_SWAP_ACTION];

pub const MANIFEST_PATH: &str = "/actions.json";

impl SwapActionRoute {
    /// `href` for a swap of `amount` (a literal or a `{placeholder}`).
    pub fn href(&self, input_mint: &str, output_mint: &str, amount: &str) -> String {
        format!(
            "{}?inputMint={}&outputMint={}&amount={}",
            self.path, input_mint, output_mint, amount
        )
    }
}

/// The `actions.json` document for every action route.
pub fn actions_manifest() -> ActionsManifest {
    let mut rules = Vec::new();

    for route in ACTION_ROUTES {
        rules.push(ActionRule::new(route.path, route.path));
        rules.push(ActionRule::new(format!("{}/**", route.path), format!("{}/**", route.path)));
    }
    for route in ACTION_ROUTES {
        rules.push(ActionRule::new(route.site_path, route.path));
        rules.push(ActionRule::new(format!("{}/**", route.site_path), format!("{}/**", route.path)));
    }

    ActionsManifest { rules }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_templates() {
        assert_eq!(
            SWAP_ACTION.href("A", "B", "{amount}"),
            "/api/actions/swap?inputMint=A&outputMint=B&amount={amount}"
        );
    }

    #[test]
    fn test_manifest_maps_site_paths_to_api_paths() {
        let manifest = actions_manifest();
        assert_eq!(manifest.rules.len(), 8);

        let api_path = |pattern: &str| {
            manifest
                .rules
                .iter()
                .find(|rule| rule.path_pattern == pattern)
                .map(|rule| rule.api_path.as_str())
        };
        assert_eq!(api_path("/swap"), Some("/api/actions/swap"));
        assert_eq!(api_path("/swap/**"), Some("/api/actions/swap/**"));
        assert_eq!(api_path("/dynamic-swap"), Some("/api/actions/dynamic-swap"));
        assert_eq!(api_path("/dynamic-swap/**"), Some("/api/actions/dynamic-swap/**"));
        assert_eq!(api_path("/api/actions/swap/**"), Some("/api/actions/swap/**"));
        assert_eq!(api_path("/health"), None);
    }
}
