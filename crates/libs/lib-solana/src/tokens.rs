//! # Token Registry
//!
//! Curated, read-only table of frequently swapped Solana tokens.
//!
//! The registry is built once at startup and shared behind an `Arc`; nothing
//! mutates it afterwards. Mints that are not in the table can still be swapped
//! through [`Token::synthesize`], which builds placeholder metadata without
//! touching the registry.
//!
//! ## Example
//!
//! ```rust
//! use lib_solana::tokens::TokenRegistry;
//!
//! let registry = TokenRegistry::curated();
//! let sol = registry.lookup_by_symbol("sol").unwrap();
//! assert_eq!(sol.decimals, 9);
//! ```

use serde::{Deserialize, Serialize};

/// Symbol/name used for mints the registry does not know about.
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// Decimals assumed for mints the registry does not know about.
pub const DEFAULT_DECIMALS: u8 = 6;

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const FARTCOIN_MINT: &str = "9BB6NFEcjBCtnNLFko2FqVQBq8HHM13kCyYcdQbgpump";

/// Token metadata. `mint` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub mint: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl Token {
    fn curated(symbol: &str, name: &str, mint: &str, decimals: u8, logo_uri: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            mint: mint.to_string(),
            decimals,
            logo_uri: Some(logo_uri.to_string()),
        }
    }

    /// Build placeholder metadata for a mint outside the registry.
    ///
    /// Decimals default to [`DEFAULT_DECIMALS`]; symbol and name fall back to
    /// [`UNKNOWN_SYMBOL`]. The result is not inserted anywhere.
    pub fn synthesize(mint: &str, symbol: Option<&str>) -> Self {
        let symbol = symbol
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());

        Self {
            name: symbol.clone(),
            symbol,
            mint: mint.to_string(),
            decimals: DEFAULT_DECIMALS,
            logo_uri: None,
        }
    }
}

/// Immutable symbol/mint lookup table.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
}

impl TokenRegistry {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The hand-maintained default table.
    pub fn curated() -> Self {
        Self::new(vec![
            Token::curated(
                "SOL",
                "Solana",
                SOL_MINT,
                9,
                "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png",
            ),
            Token::curated(
                "USDC",
                "USD Coin",
                USDC_MINT,
                6,
                "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v/logo.png",
            ),
            Token::curated(
                "USDT",
                "Tether USD",
                "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
                6,
                "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB/logo.svg",
            ),
            Token::curated(
                "JUP",
                "Jupiter",
                "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",
                6,
                "https://static.jup.ag/jup/icon.png",
            ),
            Token::curated(
                "RAY",
                "Raydium",
                "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R",
                6,
                "https://raydium.io/logo/raydium-logo.svg",
            ),
            Token::curated(
                "BONK",
                "Bonk",
                "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
                5,
                "https://arweave.net/hQiPZOsRZXGXBJd_82PhVdlM_hACsT_q6wqwf5cSY7I",
            ),
            Token::curated(
                "WIF",
                "dogwifhat",
                "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm",
                6,
                "https://bafkreibk3covs5ltyqxa272uodhculbr6kea6betidfwy3ajsav2vjzyum.ipfs.nftstorage.link",
            ),
            Token::curated(
                "FARTCOIN",
                "Fartcoin",
                FARTCOIN_MINT,
                6,
                "https://ipfs.io/ipfs/QmQr3Fz4h1etNsF7oLGMRHiCzhB5y9a7GjyodnF7zLHK1g",
            ),
            Token::curated(
                "TRUMP",
                "OFFICIAL TRUMP",
                "6p6xgHyF7AeE6TZkSmFsko444wqoP15icUSqi2jfGiPN",
                6,
                "https://arweave.net/VQrPjACwnQRmxdKBTqNwPiyo65x7LAT773t8Kd7YBzw",
            ),
            Token::curated(
                "POPCAT",
                "Popcat",
                "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr",
                9,
                "https://bafkreidvkvuzyslw5jh5z242lgzwzhbi2kxxnpkics3fsxsi4kqsb6jhqm.ipfs.nftstorage.link",
            ),
        ])
    }

    /// Exact-match lookup by mint address.
    pub fn lookup_by_mint(&self, mint: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.mint == mint)
    }

    /// Case-insensitive lookup by symbol. The first match in declaration order wins.
    pub fn lookup_by_symbol(&self, symbol: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
    }

    /// All tokens in declaration order.
    pub fn list_all(&self) -> &[Token] {
        &self.tokens
    }

    /// Case-insensitive substring match on symbol or name, in declaration order.
    ///
    /// An empty query is not special-cased; callers that want "everything" for
    /// an empty search should use [`list_all`](Self::list_all).
    pub fn search(&self, query: &str) -> Vec<&Token> {
        let needle = query.to_lowercase();
        self.tokens
            .iter()
            .filter(|token| {
                token.symbol.to_lowercase().contains(&needle)
                    || token.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Registered metadata for `mint`, or a synthesized placeholder.
    pub fn resolve_or_synthesize(&self, mint: &str) -> Token {
        self.lookup_by_mint(mint)
            .cloned()
            .unwrap_or_else(|| Token::synthesize(mint, None))
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::curated()
    }
}
