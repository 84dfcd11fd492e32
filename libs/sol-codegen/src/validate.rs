//! Configuration validation
//!
//! Rejects configurations the emitter could not turn into meaningful
//! source: blank identity fields, a blank ERC1155 URI, or an ERC20 supply
//! that is not a plain decimal integer string (nothing else can be embedded
//! as a token-amount literal).

use ingot_models::{StandardSettings, TokenConfig};

use crate::error::{Error, Result};

/// Check that every field the generator must embed is present.
pub fn validate(config: &TokenConfig) -> Result<()> {
    let standard = config.standard();

    if config.name.trim().is_empty() {
        return Err(Error::MissingField {
            standard,
            field: "name",
        });
    }
    if config.symbol.trim().is_empty() {
        return Err(Error::MissingField {
            standard,
            field: "symbol",
        });
    }

    match &config.settings {
        StandardSettings::Erc20(settings) => {
            let supply = settings.initial_supply.trim();
            if supply.is_empty() || !supply.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::MissingField {
                    standard,
                    field: "initialSupply",
                });
            }
        }
        StandardSettings::Erc721(_) => {}
        StandardSettings::Erc1155(settings) => {
            if settings.uri.trim().is_empty() {
                return Err(Error::MissingField {
                    standard,
                    field: "uri",
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingot_models::{Erc1155Settings, Erc20Settings, TokenStandard};

    fn erc20(name: &str, symbol: &str, supply: &str) -> TokenConfig {
        TokenConfig {
            name: name.to_string(),
            symbol: symbol.to_string(),
            settings: StandardSettings::Erc20(Erc20Settings {
                initial_supply: supply.to_string(),
                ..Erc20Settings::creator_defaults()
            }),
        }
    }

    #[test]
    fn accepts_complete_erc20() {
        assert!(validate(&erc20("Coin", "CN", "1000")).is_ok());
    }

    #[test]
    fn rejects_blank_identity_fields() {
        let err = validate(&erc20("   ", "CN", "1000")).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                standard: TokenStandard::Erc20,
                field: "name"
            }
        );

        let err = validate(&erc20("Coin", "", "1000")).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                standard: TokenStandard::Erc20,
                field: "symbol"
            }
        );
    }

    #[test]
    fn rejects_non_numeric_supply() {
        for supply in ["", "  ", "12.5", "1e9", "-4", "10 000"] {
            let err = validate(&erc20("Coin", "CN", supply)).unwrap_err();
            assert_eq!(
                err,
                Error::MissingField {
                    standard: TokenStandard::Erc20,
                    field: "initialSupply"
                }
            );
        }
    }

    #[test]
    fn rejects_blank_erc1155_uri() {
        let config = TokenConfig {
            name: "Items".to_string(),
            symbol: "ITM".to_string(),
            settings: StandardSettings::Erc1155(Erc1155Settings {
                uri: "  ".to_string(),
                ..Erc1155Settings::creator_defaults()
            }),
        };
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                standard: TokenStandard::Erc1155,
                field: "uri"
            }
        );
    }
}
