//! Per-standard feature flags
//!
//! Each standard exposes its own set of optional capabilities. The structs
//! hold the flags as plain booleans (all off by default, matching a form
//! with nothing ticked); the companion enums give the session layer a way
//! to address a single flag when the user toggles it.

use serde::{Deserialize, Serialize};

/// Optional capabilities for an ERC20 token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc20Features {
    pub mintable: bool,
    pub burnable: bool,
    pub pausable: bool,
    /// EIP-2612 gasless approvals.
    pub permits: bool,
    /// Checkpointed voting power for governance.
    pub votes: bool,
    /// EIP-3156 flash loans.
    pub flash_minting: bool,
    pub snapshots: bool,
}

/// Addresses a single ERC20 feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Erc20Feature {
    Mintable,
    Burnable,
    Pausable,
    Permits,
    Votes,
    FlashMinting,
    Snapshots,
}

impl Erc20Features {
    pub fn set(&mut self, feature: Erc20Feature, enabled: bool) {
        match feature {
            Erc20Feature::Mintable => self.mintable = enabled,
            Erc20Feature::Burnable => self.burnable = enabled,
            Erc20Feature::Pausable => self.pausable = enabled,
            Erc20Feature::Permits => self.permits = enabled,
            Erc20Feature::Votes => self.votes = enabled,
            Erc20Feature::FlashMinting => self.flash_minting = enabled,
            Erc20Feature::Snapshots => self.snapshots = enabled,
        }
    }

    pub fn get(&self, feature: Erc20Feature) -> bool {
        match feature {
            Erc20Feature::Mintable => self.mintable,
            Erc20Feature::Burnable => self.burnable,
            Erc20Feature::Pausable => self.pausable,
            Erc20Feature::Permits => self.permits,
            Erc20Feature::Votes => self.votes,
            Erc20Feature::FlashMinting => self.flash_minting,
            Erc20Feature::Snapshots => self.snapshots,
        }
    }
}

/// Optional capabilities for an ERC721 collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc721Features {
    pub mintable: bool,
    pub burnable: bool,
    pub pausable: bool,
    /// Token ids assigned from an on-chain counter instead of caller input.
    pub auto_increment_ids: bool,
    pub enumerable: bool,
    /// Per-token metadata URIs settable at mint time.
    pub uri_storage: bool,
    pub votes: bool,
}

/// Addresses a single ERC721 feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Erc721Feature {
    Mintable,
    Burnable,
    Pausable,
    AutoIncrementIds,
    Enumerable,
    UriStorage,
    Votes,
}

impl Erc721Features {
    pub fn set(&mut self, feature: Erc721Feature, enabled: bool) {
        match feature {
            Erc721Feature::Mintable => self.mintable = enabled,
            Erc721Feature::Burnable => self.burnable = enabled,
            Erc721Feature::Pausable => self.pausable = enabled,
            Erc721Feature::AutoIncrementIds => self.auto_increment_ids = enabled,
            Erc721Feature::Enumerable => self.enumerable = enabled,
            Erc721Feature::UriStorage => self.uri_storage = enabled,
            Erc721Feature::Votes => self.votes = enabled,
        }
    }

    pub fn get(&self, feature: Erc721Feature) -> bool {
        match feature {
            Erc721Feature::Mintable => self.mintable,
            Erc721Feature::Burnable => self.burnable,
            Erc721Feature::Pausable => self.pausable,
            Erc721Feature::AutoIncrementIds => self.auto_increment_ids,
            Erc721Feature::Enumerable => self.enumerable,
            Erc721Feature::UriStorage => self.uri_storage,
            Erc721Feature::Votes => self.votes,
        }
    }
}

/// Optional capabilities for an ERC1155 multi-token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc1155Features {
    pub mintable: bool,
    pub burnable: bool,
    pub pausable: bool,
    /// Per-id total supply bookkeeping.
    pub supply_tracking: bool,
}

/// Addresses a single ERC1155 feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Erc1155Feature {
    Mintable,
    Burnable,
    Pausable,
    SupplyTracking,
}

impl Erc1155Features {
    pub fn set(&mut self, feature: Erc1155Feature, enabled: bool) {
        match feature {
            Erc1155Feature::Mintable => self.mintable = enabled,
            Erc1155Feature::Burnable => self.burnable = enabled,
            Erc1155Feature::Pausable => self.pausable = enabled,
            Erc1155Feature::SupplyTracking => self.supply_tracking = enabled,
        }
    }

    pub fn get(&self, feature: Erc1155Feature) -> bool {
        match feature {
            Erc1155Feature::Mintable => self.mintable,
            Erc1155Feature::Burnable => self.burnable,
            Erc1155Feature::Pausable => self.pausable,
            Erc1155Feature::SupplyTracking => self.supply_tracking,
        }
    }
}
