//! Feature resolution
//!
//! Turns a validated configuration into the ordered [`FeatureSpec`] list
//! the composers consume. The order is fixed per standard: the mandatory
//! base contract first, `Ownable` second when owner-gating applies, then
//! features in priority order (pausable, burnable, the bookkeeping
//! extensions, permits, votes, flash minting, mintable last). Later
//! features' override fragments must name every previously added base in
//! their `override(...)` clause, so this order is load-bearing.

mod erc1155;
mod erc20;
mod erc721;

use ingot_models::{StandardSettings, TokenConfig};

use crate::ir::{BaseContract, CtorParam, FeatureSpec};

/// Resolve the ordered contribution list for a configuration.
pub fn resolve(config: &TokenConfig) -> Vec<FeatureSpec> {
    let specs = match &config.settings {
        StandardSettings::Erc20(settings) => erc20::resolve(settings),
        StandardSettings::Erc721(settings) => erc721::resolve(settings),
        StandardSettings::Erc1155(settings) => erc1155::resolve(settings),
    };
    tracing::debug!(
        standard = %config.standard(),
        features = ?specs.iter().map(|s| s.label).collect::<Vec<_>>(),
        "resolved feature set"
    );
    specs
}

/// Owner-gated access: the `Ownable` base plus its `initialOwner`
/// constructor parameter.
pub(crate) fn ownable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/access/Ownable.sol"),
        base: Some(BaseContract {
            name: "Ownable",
            ctor_call: Some("Ownable(initialOwner)".to_string()),
        }),
        ctor_params: vec![CtorParam::owner()],
        ..FeatureSpec::new("ownable")
    }
}

/// `pause`/`unpause` entry points shared by every pausable standard.
pub(crate) fn pause_control_functions() -> Vec<String> {
    vec![
        "    function pause() public virtual onlyOwner {\n        _pause();\n    }".to_string(),
        "    function unpause() public virtual onlyOwner {\n        _unpause();\n    }".to_string(),
    ]
}
