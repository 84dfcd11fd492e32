//! Partially-filled token configuration
//!
//! A draft is what an editing session holds while the user works through
//! the form: name and symbol survive standard switches, and no standard may
//! be selected at all yet.

use crate::config::{StandardSettings, TokenConfig};
use crate::standard::TokenStandard;

/// Form state for a token being configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDraft {
    pub name: String,
    pub symbol: String,
    pub settings: Option<StandardSettings>,
}

impl TokenDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected standard, if any.
    pub fn standard(&self) -> Option<TokenStandard> {
        self.settings.as_ref().map(StandardSettings::standard)
    }

    /// Select (or clear) the token standard.
    ///
    /// Installs that standard's creator defaults, replacing any settings
    /// from a previously selected standard; name and symbol are kept.
    pub fn set_standard(&mut self, standard: Option<TokenStandard>) {
        self.settings = standard.map(StandardSettings::creator_defaults);
    }

    /// Snapshot the draft as a complete configuration, or `None` while no
    /// standard is selected.
    pub fn to_config(&self) -> Option<TokenConfig> {
        self.settings.as_ref().map(|settings| TokenConfig {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            settings: settings.clone(),
        })
    }
}
