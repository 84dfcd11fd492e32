//! Token configuration types
//!
//! `TokenConfig` is the complete input to code generation: identity fields
//! shared by every standard plus a standard-tagged settings payload. The
//! JSON shape keeps the tag inline, e.g.
//!
//! ```json
//! { "standard": "ERC20", "name": "My Coin", "symbol": "MC",
//!   "decimals": 18, "initialSupply": "1000000", "features": { "mintable": true } }
//! ```

use serde::{Deserialize, Serialize};

use crate::features::{Erc1155Features, Erc20Features, Erc721Features};
use crate::standard::TokenStandard;

fn default_decimals() -> u8 {
    18
}

/// ERC20-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Settings {
    /// Display decimals; token amounts are scaled by `10^decimals`.
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Whole-token premint amount as a decimal integer string, so amounts
    /// beyond 2^64 survive serialization unmangled. May be "0".
    #[serde(default)]
    pub initial_supply: String,
    /// Recipient of the premint; the deployer when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premint_receiver: Option<String>,
    #[serde(default)]
    pub features: Erc20Features,
}

/// ERC721-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Settings {
    /// Base URI for token metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    #[serde(default)]
    pub features: Erc721Features,
}

/// ERC1155-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc1155Settings {
    /// Metadata URI; may embed an `{id}` placeholder.
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub features: Erc1155Features,
}

impl Erc20Settings {
    /// Settings installed when the user selects ERC20 in the creator.
    pub fn creator_defaults() -> Self {
        Self {
            decimals: 18,
            initial_supply: "1000000".to_string(),
            premint_receiver: None,
            features: Erc20Features {
                mintable: true,
                burnable: true,
                ..Erc20Features::default()
            },
        }
    }
}

impl Erc721Settings {
    /// Settings installed when the user selects ERC721 in the creator.
    pub fn creator_defaults() -> Self {
        Self {
            base_uri: None,
            features: Erc721Features {
                mintable: true,
                burnable: true,
                auto_increment_ids: true,
                ..Erc721Features::default()
            },
        }
    }
}

impl Erc1155Settings {
    /// Settings installed when the user selects ERC1155 in the creator.
    pub fn creator_defaults() -> Self {
        Self {
            uri: String::new(),
            features: Erc1155Features {
                mintable: true,
                burnable: true,
                ..Erc1155Features::default()
            },
        }
    }
}

/// Standard-specific portion of a token configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "standard")]
pub enum StandardSettings {
    #[serde(rename = "ERC20")]
    Erc20(Erc20Settings),
    #[serde(rename = "ERC721")]
    Erc721(Erc721Settings),
    #[serde(rename = "ERC1155")]
    Erc1155(Erc1155Settings),
}

impl StandardSettings {
    pub fn standard(&self) -> TokenStandard {
        match self {
            StandardSettings::Erc20(_) => TokenStandard::Erc20,
            StandardSettings::Erc721(_) => TokenStandard::Erc721,
            StandardSettings::Erc1155(_) => TokenStandard::Erc1155,
        }
    }

    /// Creator defaults for the given standard.
    pub fn creator_defaults(standard: TokenStandard) -> Self {
        match standard {
            TokenStandard::Erc20 => StandardSettings::Erc20(Erc20Settings::creator_defaults()),
            TokenStandard::Erc721 => StandardSettings::Erc721(Erc721Settings::creator_defaults()),
            TokenStandard::Erc1155 => {
                StandardSettings::Erc1155(Erc1155Settings::creator_defaults())
            }
        }
    }
}

/// A complete token configuration, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    #[serde(flatten)]
    pub settings: StandardSettings,
}

impl TokenConfig {
    pub fn standard(&self) -> TokenStandard {
        self.settings.standard()
    }

    /// Solidity contract identifier: the token name with all whitespace
    /// stripped.
    pub fn contract_name(&self) -> String {
        self.name.split_whitespace().collect()
    }
}
