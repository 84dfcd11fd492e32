//! Override composition for shared virtual hooks
//!
//! Several extensions may redefine the same virtual hook; Solidity allows
//! exactly one override definition for it, naming every base that also
//! defines the hook. Contributions are grouped per hook in first-seen
//! order and merged into one function whose `override(...)` clause lists
//! the standard's base contract first, then each contributing base in
//! resolution order. The bodies are pure `super` chains.

use ingot_models::TokenStandard;

use crate::ir::{FeatureSpec, Hook};

/// Compose one override function per touched hook, in first-seen order.
pub fn compose(standard: TokenStandard, specs: &[FeatureSpec]) -> Vec<String> {
    let mut hooks: Vec<(Hook, Vec<&'static str>)> = Vec::new();
    for spec in specs {
        for fragment in &spec.overrides {
            match hooks.iter_mut().find(|(hook, _)| *hook == fragment.hook) {
                Some((_, bases)) => bases.push(fragment.base),
                None => hooks.push((fragment.hook, vec![fragment.base])),
            }
        }
    }

    hooks
        .iter()
        .map(|(hook, bases)| render(standard, *hook, bases))
        .collect()
}

fn render(standard: TokenStandard, hook: Hook, bases: &[&'static str]) -> String {
    let mut list = vec![standard.base_contract()];
    list.extend_from_slice(bases);
    let list = list.join(", ");

    let (head, tail, body) = signature(standard, hook);
    format!("    {head} override({list}){tail} {{\n        {body}\n    }}")
}

/// Per-standard signature and `super` chain for a hook. The declaration is
/// split around the `override(...)` clause, which Solidity places before
/// any `returns` clause.
fn signature(standard: TokenStandard, hook: Hook) -> (&'static str, &'static str, &'static str) {
    match (standard, hook) {
        (TokenStandard::Erc20, Hook::Update) => (
            "function _update(address from, address to, uint256 value) internal virtual",
            "",
            "super._update(from, to, value);",
        ),
        (TokenStandard::Erc20, Hook::BeforeTokenTransfer) => (
            "function _beforeTokenTransfer(address from, address to, uint256 amount) internal virtual",
            "",
            "super._beforeTokenTransfer(from, to, amount);",
        ),
        (TokenStandard::Erc721, Hook::Update) => (
            "function _update(address to, uint256 tokenId, address auth) internal virtual",
            " returns (address)",
            "return super._update(to, tokenId, auth);",
        ),
        (TokenStandard::Erc721, Hook::IncreaseBalance) => (
            "function _increaseBalance(address account, uint128 amount) internal virtual",
            "",
            "super._increaseBalance(account, amount);",
        ),
        (TokenStandard::Erc721, Hook::Burn) => (
            "function _burn(uint256 tokenId) internal virtual",
            "",
            "super._burn(tokenId);",
        ),
        (TokenStandard::Erc721, Hook::TokenUri) => (
            "function tokenURI(uint256 tokenId) public view virtual",
            " returns (string memory)",
            "return super.tokenURI(tokenId);",
        ),
        (TokenStandard::Erc1155, Hook::Update) => (
            "function _update(address from, address to, uint256[] memory ids, uint256[] memory values, bytes memory data) internal virtual",
            "",
            "super._update(from, to, ids, values, data);",
        ),
        (standard, hook) => unreachable!(
            "no {} hook is resolved for {standard}",
            hook.solidity_name()
        ),
    }
}
