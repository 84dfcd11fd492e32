//! Error types for the Solidity generator

use ingot_models::TokenStandard;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration rejection.
///
/// The generator surfaces exactly one failure class: a field the contract
/// source needs is absent (or, for the session layer, no standard has been
/// selected yet). Callers never see these as `Err` from `generate`; they
/// become a commented placeholder in the output instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("missing required field `{field}` for {standard} token configuration")]
    MissingField {
        standard: TokenStandard,
        field: &'static str,
    },

    #[error("a token standard must be selected before code can be generated")]
    MissingStandard,
}
