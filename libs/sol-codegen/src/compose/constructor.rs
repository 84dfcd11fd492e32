//! Constructor composition
//!
//! Merges per-feature parameter lists, base-constructor invocations, and
//! body statements into one constructor. Parameters are deduplicated by
//! name and ordered owner-first, identity next, trailing optionals last;
//! base invocations keep the resolved base order.

use crate::ir::{CtorParam, FeatureSpec};

/// The composed constructor, ready for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// Comma-joined parameter declarations.
    pub params: String,
    /// Space-joined base-constructor invocations.
    pub base_calls: String,
    /// Body statements in resolution order.
    pub body: Vec<String>,
}

pub fn compose(specs: &[FeatureSpec]) -> Constructor {
    let mut params: Vec<&CtorParam> = Vec::new();
    for spec in specs {
        for param in &spec.ctor_params {
            if !params.iter().any(|p| p.name == param.name) {
                params.push(param);
            }
        }
    }
    // Stable sort keeps contribution order within each slot.
    params.sort_by_key(|p| p.slot);
    let params = params
        .iter()
        .map(|p| p.decl)
        .collect::<Vec<_>>()
        .join(", ");

    let base_calls = specs
        .iter()
        .filter_map(|s| s.base.as_ref().and_then(|b| b.ctor_call.as_deref()))
        .collect::<Vec<_>>()
        .join(" ");

    let body = specs
        .iter()
        .flat_map(|s| s.ctor_body.iter().cloned())
        .collect();

    Constructor {
        params,
        base_calls,
        body,
    }
}
