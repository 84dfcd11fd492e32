//! Token standard discriminant

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three supported token standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStandard {
    #[serde(rename = "ERC20")]
    Erc20,
    #[serde(rename = "ERC721")]
    Erc721,
    #[serde(rename = "ERC1155")]
    Erc1155,
}

impl TokenStandard {
    /// Canonical display form, matching the serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStandard::Erc20 => "ERC20",
            TokenStandard::Erc721 => "ERC721",
            TokenStandard::Erc1155 => "ERC1155",
        }
    }

    /// Name of the OpenZeppelin base contract for this standard.
    pub fn base_contract(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
