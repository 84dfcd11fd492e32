//! Source assembly
//!
//! Deterministic concatenation of the resolved fragments: pragma line,
//! imports (deduplicated, first-seen order), contract header with the
//! inheritance list, state declarations, the composed constructor, feature
//! functions in resolution order, then the merged override functions.
//! Invalid configurations still produce output: a commented placeholder
//! the caller's editor can display.

use ingot_models::TokenConfig;

use crate::compose::constructor::Constructor;
use crate::error::Error;
use crate::ir::FeatureSpec;

/// Every generated source begins with this line, placeholder included.
pub const PRAGMA: &str = "pragma solidity ^0.8.20;";

/// Commented placeholder emitted instead of contract source when the
/// configuration is rejected.
pub fn error_placeholder(error: &Error) -> String {
    format!("{PRAGMA}\n\n// Error: {error}.\n")
}

/// Assemble the final source text.
pub fn emit(
    config: &TokenConfig,
    specs: &[FeatureSpec],
    ctor: &Constructor,
    overrides: &[String],
) -> String {
    let mut code = String::new();

    code.push_str(PRAGMA);
    code.push('\n');

    let mut imports: Vec<&str> = Vec::new();
    for spec in specs {
        if let Some(import) = spec.import {
            if !imports.contains(&import) {
                imports.push(import);
            }
        }
    }
    for import in &imports {
        code.push_str(&format!("import \"{import}\";\n"));
    }
    code.push('\n');

    let bases = specs
        .iter()
        .filter_map(|s| s.base.as_ref().map(|b| b.name))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!(
        "contract {} is {} {{\n",
        config.contract_name(),
        bases
    ));

    let state_decls: Vec<&String> = specs.iter().flat_map(|s| &s.state_decls).collect();
    for decl in &state_decls {
        code.push_str(&format!("    {decl}\n"));
    }
    if !state_decls.is_empty() {
        code.push('\n');
    }

    code.push_str(&format!(
        "    constructor({}) {} {{\n",
        ctor.params, ctor.base_calls
    ));
    for statement in &ctor.body {
        code.push_str(&format!("        {statement}\n"));
    }
    code.push_str("    }\n");

    for function in specs.iter().flat_map(|s| &s.functions) {
        code.push('\n');
        code.push_str(function);
        code.push('\n');
    }

    for function in overrides {
        code.push('\n');
        code.push_str(function);
        code.push('\n');
    }

    code.push_str("}\n");
    code
}
