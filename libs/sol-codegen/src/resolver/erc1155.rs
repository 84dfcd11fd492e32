//! ERC1155 feature resolution

use ingot_models::Erc1155Settings;

use super::{ownable, pause_control_functions};
use crate::ir::{BaseContract, CtorParam, FeatureSpec, Hook, OverrideFragment};

pub(crate) fn resolve(settings: &Erc1155Settings) -> Vec<FeatureSpec> {
    let f = settings.features;
    // Owner-gated minting is assumed available, as for ERC721.
    let mut specs = vec![base(), ownable()];

    if f.pausable {
        specs.push(pausable());
    }
    if f.burnable {
        specs.push(burnable());
    }
    if f.supply_tracking {
        specs.push(supply_tracking());
    }
    if f.mintable {
        specs.push(mintable());
    }

    specs
}

fn base() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC1155/ERC1155.sol"),
        base: Some(BaseContract {
            name: "ERC1155",
            ctor_call: Some("ERC1155(_uri)".to_string()),
        }),
        ctor_params: vec![CtorParam::identity("_uri", "string memory _uri")],
        ..FeatureSpec::new("erc1155")
    }
}

fn pausable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Pausable.sol"),
        base: Some(BaseContract {
            name: "ERC1155Pausable",
            ctor_call: None,
        }),
        functions: pause_control_functions(),
        overrides: vec![OverrideFragment {
            hook: Hook::Update,
            base: "ERC1155Pausable",
        }],
        ..FeatureSpec::new("pausable")
    }
}

fn burnable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Burnable.sol"),
        base: Some(BaseContract {
            name: "ERC1155Burnable",
            ctor_call: None,
        }),
        ..FeatureSpec::new("burnable")
    }
}

fn supply_tracking() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Supply.sol"),
        base: Some(BaseContract {
            name: "ERC1155Supply",
            ctor_call: None,
        }),
        overrides: vec![OverrideFragment {
            hook: Hook::Update,
            base: "ERC1155Supply",
        }],
        ..FeatureSpec::new("supplyTracking")
    }
}

fn mintable() -> FeatureSpec {
    FeatureSpec {
        functions: vec![
            "    function mint(address account, uint256 id, uint256 amount, bytes memory data) public virtual onlyOwner {\n        _mint(account, id, amount, data);\n    }"
                .to_string(),
            "    function mintBatch(address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data) public virtual onlyOwner {\n        _mintBatch(to, ids, amounts, data);\n    }"
                .to_string(),
        ],
        ..FeatureSpec::new("mintable")
    }
}
