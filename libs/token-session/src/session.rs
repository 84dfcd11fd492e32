//! Creator session state

use ingot_models::{
    Erc1155Feature, Erc20Feature, Erc721Feature, StandardSettings, TokenDraft, TokenStandard,
};

/// One user's token-creation workflow.
///
/// The draft and the generated buffer are deliberately independent: after
/// generation the buffer is free-form editable text, and further draft
/// edits do not touch it until the next `generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorSession {
    draft: TokenDraft,
    generated_code: Option<String>,
}

impl CreatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TokenDraft {
        &self.draft
    }

    pub fn generated_code(&self) -> Option<&str> {
        self.generated_code.as_deref()
    }

    /// Select (or clear) the token standard, installing that standard's
    /// creator defaults. Name and symbol survive; stale generated source
    /// does not.
    pub fn set_standard(&mut self, standard: Option<TokenStandard>) {
        self.draft.set_standard(standard);
        self.generated_code = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.draft.symbol = symbol.into();
    }

    /// Toggle an ERC20 feature. Ignored unless ERC20 is the selected
    /// standard, so a stale form control cannot corrupt another
    /// standard's settings.
    pub fn set_erc20_feature(&mut self, feature: Erc20Feature, enabled: bool) {
        if let Some(StandardSettings::Erc20(settings)) = &mut self.draft.settings {
            settings.features.set(feature, enabled);
        }
    }

    /// Toggle an ERC721 feature; ignored unless ERC721 is selected.
    pub fn set_erc721_feature(&mut self, feature: Erc721Feature, enabled: bool) {
        if let Some(StandardSettings::Erc721(settings)) = &mut self.draft.settings {
            settings.features.set(feature, enabled);
        }
    }

    /// Toggle an ERC1155 feature; ignored unless ERC1155 is selected.
    pub fn set_erc1155_feature(&mut self, feature: Erc1155Feature, enabled: bool) {
        if let Some(StandardSettings::Erc1155(settings)) = &mut self.draft.settings {
            settings.features.set(feature, enabled);
        }
    }

    pub fn set_decimals(&mut self, decimals: u8) {
        if let Some(StandardSettings::Erc20(settings)) = &mut self.draft.settings {
            settings.decimals = decimals;
        }
    }

    pub fn set_initial_supply(&mut self, supply: impl Into<String>) {
        if let Some(StandardSettings::Erc20(settings)) = &mut self.draft.settings {
            settings.initial_supply = supply.into();
        }
    }

    pub fn set_premint_receiver(&mut self, receiver: Option<String>) {
        if let Some(StandardSettings::Erc20(settings)) = &mut self.draft.settings {
            settings.premint_receiver = receiver;
        }
    }

    pub fn set_base_uri(&mut self, base_uri: Option<String>) {
        if let Some(StandardSettings::Erc721(settings)) = &mut self.draft.settings {
            settings.base_uri = base_uri;
        }
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) {
        if let Some(StandardSettings::Erc1155(settings)) = &mut self.draft.settings {
            settings.uri = uri.into();
        }
    }

    /// Run the generator over the current draft and store the result as
    /// the session's buffer.
    ///
    /// Never fails: with no standard selected, the buffer becomes the
    /// same commented placeholder the generator emits for invalid
    /// configurations.
    pub fn generate(&mut self) -> &str {
        let code = match self.draft.to_config() {
            Some(config) => ingot_codegen::generate(&config),
            None => ingot_codegen::emit::error_placeholder(&ingot_codegen::Error::MissingStandard),
        };
        self.generated_code.insert(code).as_str()
    }

    /// Replace the generated buffer with hand-edited source.
    pub fn set_generated_code(&mut self, code: impl Into<String>) {
        self.generated_code = Some(code.into());
    }

    /// Back to a pristine session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
