//! ERC721 feature resolution

use ingot_models::{Erc721Features, Erc721Settings};

use super::{ownable, pause_control_functions};
use crate::ir::{BaseContract, CtorParam, FeatureSpec, Hook, OverrideFragment};

pub(crate) fn resolve(settings: &Erc721Settings) -> Vec<FeatureSpec> {
    let f = settings.features;
    // Owner-gated minting is assumed available for NFTs even when the
    // mintable flag is off.
    let mut specs = vec![base(settings), ownable()];

    if f.pausable {
        specs.push(pausable());
    }
    if f.burnable {
        specs.push(burnable());
    }
    if f.enumerable {
        specs.push(enumerable());
    }
    if f.uri_storage {
        specs.push(uri_storage());
    }
    if f.votes {
        specs.push(votes());
    }
    if f.auto_increment_ids {
        specs.push(auto_increment_ids());
    }
    if f.mintable {
        specs.push(mintable(&f));
    }

    specs
}

fn base(settings: &Erc721Settings) -> FeatureSpec {
    let mut ctor_body = Vec::new();
    let mut functions = Vec::new();

    // With the URI-storage extension the per-token URI is set at mint
    // time instead of from a fixed base.
    if let Some(uri) = fixed_base_uri(settings) {
        ctor_body.push(format!("_setBaseURI(\"{uri}\");"));
        functions.push(format!(
            "    function _baseURI() internal pure override returns (string memory) {{\n        return \"{uri}\";\n    }}"
        ));
    }

    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/ERC721.sol"),
        base: Some(BaseContract {
            name: "ERC721",
            ctor_call: Some("ERC721(_name, _symbol)".to_string()),
        }),
        ctor_params: vec![
            CtorParam::identity("_name", "string memory _name"),
            CtorParam::identity("_symbol", "string memory _symbol"),
        ],
        ctor_body,
        functions,
        ..FeatureSpec::new("erc721")
    }
}

fn fixed_base_uri(settings: &Erc721Settings) -> Option<&str> {
    if settings.features.uri_storage {
        return None;
    }
    settings
        .base_uri
        .as_deref()
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
}

fn pausable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/extensions/ERC721Pausable.sol"),
        base: Some(BaseContract {
            name: "ERC721Pausable",
            ctor_call: None,
        }),
        functions: pause_control_functions(),
        overrides: vec![OverrideFragment {
            hook: Hook::Update,
            base: "ERC721Pausable",
        }],
        ..FeatureSpec::new("pausable")
    }
}

fn burnable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/extensions/ERC721Burnable.sol"),
        base: Some(BaseContract {
            name: "ERC721Burnable",
            ctor_call: None,
        }),
        ..FeatureSpec::new("burnable")
    }
}

fn enumerable() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/extensions/ERC721Enumerable.sol"),
        base: Some(BaseContract {
            name: "ERC721Enumerable",
            ctor_call: None,
        }),
        overrides: vec![
            OverrideFragment {
                hook: Hook::Update,
                base: "ERC721Enumerable",
            },
            OverrideFragment {
                hook: Hook::IncreaseBalance,
                base: "ERC721Enumerable",
            },
        ],
        ..FeatureSpec::new("enumerable")
    }
}

fn uri_storage() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol"),
        base: Some(BaseContract {
            name: "ERC721URIStorage",
            ctor_call: None,
        }),
        overrides: vec![
            OverrideFragment {
                hook: Hook::Update,
                base: "ERC721URIStorage",
            },
            OverrideFragment {
                hook: Hook::Burn,
                base: "ERC721URIStorage",
            },
            OverrideFragment {
                hook: Hook::TokenUri,
                base: "ERC721URIStorage",
            },
        ],
        ..FeatureSpec::new("uriStorage")
    }
}

fn votes() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/token/ERC721/extensions/ERC721Votes.sol"),
        base: Some(BaseContract {
            name: "ERC721Votes",
            // ERC721Votes reaches EIP712 through Votes; the domain
            // separator still has to be seeded from the derived contract.
            ctor_call: Some("EIP712(_name, \"1\")".to_string()),
        }),
        overrides: vec![
            OverrideFragment {
                hook: Hook::Update,
                base: "ERC721Votes",
            },
            OverrideFragment {
                hook: Hook::IncreaseBalance,
                base: "ERC721Votes",
            },
        ],
        ..FeatureSpec::new("votes")
    }
}

fn auto_increment_ids() -> FeatureSpec {
    FeatureSpec {
        import: Some("@openzeppelin/contracts/utils/Counters.sol"),
        state_decls: vec![
            "using Counters for Counters.Counter;".to_string(),
            "Counters.Counter private _tokenIdCounter;".to_string(),
        ],
        ..FeatureSpec::new("autoIncrementIds")
    }
}

fn mintable(features: &Erc721Features) -> FeatureSpec {
    let mut params = String::from("address to");
    if !features.auto_increment_ids {
        params.push_str(", uint256 tokenId");
    }
    if features.uri_storage {
        params.push_str(", string memory uri");
    }

    let mut lines = vec![format!(
        "    function safeMint({params}) public virtual onlyOwner {{"
    )];
    if features.auto_increment_ids {
        lines.push("        uint256 tokenId = _tokenIdCounter.current();".to_string());
        lines.push("        _tokenIdCounter.increment();".to_string());
    }
    lines.push("        _safeMint(to, tokenId);".to_string());
    if features.uri_storage {
        lines.push("        _setTokenURI(tokenId, uri);".to_string());
    }
    lines.push("    }".to_string());

    FeatureSpec {
        functions: vec![lines.join("\n")],
        ..FeatureSpec::new("mintable")
    }
}
