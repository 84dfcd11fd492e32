//! Token configuration data models
//!
//! This crate provides the strongly-typed configuration a user assembles in
//! the token creator: a token standard, identity fields, standard-specific
//! settings, and a set of boolean feature flags.
//!
//! # Module Organization
//!
//! - `standard`: the `TokenStandard` discriminant
//! - `features`: per-standard feature-flag structs and addressing enums
//! - `config`: per-standard settings and the `TokenConfig` tagged union
//! - `draft`: the partially-filled configuration backing an editing session
//!
//! # Design Philosophy
//!
//! - **Tagged union**: `TokenConfig` serializes with a `"standard"` tag so a
//!   JSON document reads `{"standard":"ERC20","name":...,"decimals":...}`
//! - **Invalid states unrepresentable where cheap**: `decimals` is a `u8`,
//!   so the 0–255 bound needs no runtime check
//! - **Drafts are separate**: a draft may have no standard selected yet; a
//!   `TokenConfig` always has one

pub mod config;
pub mod draft;
pub mod features;
pub mod standard;

pub use config::{Erc1155Settings, Erc20Settings, Erc721Settings, StandardSettings, TokenConfig};
pub use draft::TokenDraft;
pub use features::{
    Erc1155Feature, Erc1155Features, Erc20Feature, Erc20Features, Erc721Feature, Erc721Features,
};
pub use standard::TokenStandard;
