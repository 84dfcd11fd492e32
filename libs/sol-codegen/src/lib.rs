//! Solidity Token Contract Generator
//!
//! This library turns a declarative token configuration into compilable
//! Solidity source built on the OpenZeppelin contract library.
//!
//! ## Architecture
//!
//! The generator uses a staged pipeline:
//! 1. **Validator**: rejects configurations missing mandatory fields
//! 2. **Resolver**: maps the standard and its feature flags to an ordered
//!    list of [`ir::FeatureSpec`] contributions (imports, base contracts,
//!    constructor and override fragments)
//! 3. **Composers**: merge constructor fragments into one signature and
//!    base-call chain, and override fragments into one function per hook
//! 4. **Emitter**: concatenates everything into the final source text
//!
//! Inheritance and override correctness lives in the resolution order and
//! the composers; the per-standard modules only declare what each feature
//! contributes.
//!
//! Each call is a pure function of its input: identical configurations
//! produce byte-identical source, and invalid ones produce a commented
//! placeholder instead of an error.

pub mod compose;
pub mod emit;
pub mod error;
pub mod ir;
pub mod resolver;
pub mod validate;

pub use error::{Error, Result};

use ingot_models::TokenConfig;

/// Generate Solidity source for a token configuration.
///
/// Never fails: a rejected configuration yields a commented `// Error:`
/// placeholder, so the caller's editor buffer always has something to
/// display.
pub fn generate(config: &TokenConfig) -> String {
    match validate::validate(config) {
        Err(error) => {
            tracing::debug!(%error, "configuration rejected");
            emit::error_placeholder(&error)
        }
        Ok(()) => {
            let specs = resolver::resolve(config);
            let ctor = compose::constructor::compose(&specs);
            let overrides = compose::overrides::compose(config.standard(), &specs);
            emit::emit(config, &specs, &ctor, &overrides)
        }
    }
}
