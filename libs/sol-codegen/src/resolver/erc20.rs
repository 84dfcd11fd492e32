//! ERC20 feature resolution

use std::str::FromStr;

use ingot_models::Erc20Settings;
use num_bigint::BigUint;

use super::{ownable, pause_control_functions};
use crate::ir::{BaseContract, CtorParam, FeatureSpec, Hook, OverrideFragment};

pub(crate) fn resolve(settings: &Erc20Settings) -> Vec<FeatureSpec> {
    let f = settings.features;
    let mut specs = vec![base(settings)];

    // ERC20 is only owner-gated when a feature needs it, unlike the NFT
    // standards where Ownable is unconditional.
    if f.mintable || f.pausable {
        specs.push(ownable());
    }

    if f.pausable {
        specs.push(pausable());
    }
    if f.burnable {
        specs.push(burnable());
    }
    if f.snapshots {
        specs.push(snapshots());
    }
    // ERC20Votes already inherits ERC20Permit; listing both bases would
    // duplicate the permit ancestor.
    if f.permits && !f.votes {
        specs.push(permits());
    }
    if f.votes {
        specs.push(votes());
    }
    if f.flash_minting {
        specs.push(flash_minting());
    }
    if f.mintable {
        specs.push(mintable());
    }

    specs
}

fn base(settings: &Erc20Settings) -> FeatureSpec {
    let mut ctor_params = vec![
        CtorParam::identity("_name", "string memory _name"),
        CtorParam::identity("_symbol", "string memory _symbol"),
    ];
    let mut ctor_body = Vec::new();

    if let Some(amount) = premint_amount(settings) {
        let receiver = match external_receiver(settings) {
            Some(_) => {
                ctor_params.push(CtorParam::trailing(
                    "_premintReceiver",
                    "address _premintReceiver",
                ));
                "_premintReceiver"
            }
            None => "msg.sender",
        };
        ctor_body.push(format!("_mint({receiver}, {amount});"));
    }

    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/ERC20.sol"),
        base: Some(BaseContract {
            name: "ERC20",
            ctor_call: Some("ERC20(_name, _symbol)".to_string()),
        }),
        ctor_params,
        ctor_body,
        ..FeatureSpec::new("erc20")
    }
}

/// Premint amount in smallest units, or `None` when nothing is preminted.
///
/// The supply string is scaled by `10^decimals` entirely in integer
/// arithmetic; a float power would corrupt amounts past 2^53.
fn premint_amount(settings: &Erc20Settings) -> Option<BigUint> {
    let supply = settings.initial_supply.trim();
    if supply.is_empty() || supply.bytes().all(|b| b == b'0') {
        return None;
    }
    let supply = BigUint::from_str(supply).ok()?;
    Some(supply * BigUint::from(10u32).pow(u32::from(settings.decimals)))
}

/// The configured premint receiver, when it is someone other than the
/// deployer.
fn external_receiver(settings: &Erc20Settings) -> Option<&str> {
    settings
        .premint_receiver
        .as_deref()
        .map(str::trim)
        .filter(|receiver| !receiver.is_empty() && *receiver != "msg.sender")
}

fn pausable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol"),
        base: Some(BaseContract {
            name: "ERC20Pausable",
            ctor_call: None,
        }),
        functions: pause_control_functions(),
        overrides: vec![OverrideFragment {
            hook: Hook::Update,
            base: "ERC20Pausable",
        }],
        ..FeatureSpec::new("pausable")
    }
}

fn burnable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol"),
        base: Some(BaseContract {
            name: "ERC20Burnable",
            ctor_call: None,
        }),
        ..FeatureSpec::new("burnable")
    }
}

fn snapshots() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20Snapshot.sol"),
        base: Some(BaseContract {
            name: "ERC20Snapshot",
            ctor_call: None,
        }),
        overrides: vec![OverrideFragment {
            hook: Hook::BeforeTokenTransfer,
            base: "ERC20Snapshot",
        }],
        ..FeatureSpec::new("snapshots")
    }
}

fn permits() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol"),
        base: Some(BaseContract {
            name: "ERC20Permit",
            ctor_call: Some("ERC20Permit(_name)".to_string()),
        }),
        ..FeatureSpec::new("permits")
    }
}

fn votes() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol"),
        base: Some(BaseContract {
            name: "ERC20Votes",
            ctor_call: None,
        }),
        ..FeatureSpec::new("votes")
    }
}

fn flash_minting() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC20/extensions/ERC20FlashMint.sol"),
        base: Some(BaseContract {
            name: "ERC20FlashMint",
            ctor_call: None,
        }),
        ..FeatureSpec::new("flashMinting")
    }
}

fn mintable() -> FeatureSpec {
    FeatureSpec {
        functions: vec![
            "    function mint(address to, uint256 amount) public virtual onlyOwner {\n        _mint(to, amount);\n    }"
                .to_string(),
        ],
        ..FeatureSpec::new("mintable")
    }
}
