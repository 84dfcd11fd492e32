use ingot_codegen::generate;
use ingot_models::{
    Erc1155Features, Erc1155Settings, Erc20Features, Erc20Settings, Erc721Features,
    Erc721Settings, StandardSettings, TokenConfig,
};

fn erc20(features: Erc20Features) -> TokenConfig {
    TokenConfig {
        name: "Coin".to_string(),
        symbol: "CN".to_string(),
        settings: StandardSettings::Erc20(Erc20Settings {
            decimals: 18,
            initial_supply: "1000".to_string(),
            premint_receiver: None,
            features,
        }),
    }
}

fn erc721(features: Erc721Features) -> TokenConfig {
    TokenConfig {
        name: "Art".to_string(),
        symbol: "ART".to_string(),
        settings: StandardSettings::Erc721(Erc721Settings {
            base_uri: None,
            features,
        }),
    }
}

fn erc1155(uri: &str, features: Erc1155Features) -> TokenConfig {
    TokenConfig {
        name: "Game Items".to_string(),
        symbol: "GMI".to_string(),
        settings: StandardSettings::Erc1155(Erc1155Settings {
            uri: uri.to_string(),
            features,
        }),
    }
}

fn inheritance_line(code: &str) -> &str {
    code.lines()
        .find(|line| line.starts_with("contract "))
        .expect("output should declare a contract")
}

#[test]
fn generation_is_deterministic() {
    let config = erc20(Erc20Features {
        mintable: true,
        pausable: true,
        votes: true,
        ..Erc20Features::default()
    });
    assert_eq!(generate(&config), generate(&config));
}

#[test]
fn output_always_starts_with_the_pragma() {
    let valid = generate(&erc20(Erc20Features::default()));
    assert!(valid.starts_with("pragma solidity ^0.8.20;\n"));

    let invalid = generate(&erc1155("", Erc1155Features::default()));
    assert!(invalid.starts_with("pragma solidity ^0.8.20;\n"));
}

#[test]
fn blank_name_yields_a_placeholder_not_a_contract() {
    let mut config = erc20(Erc20Features::default());
    config.name = "   ".to_string();

    let code = generate(&config);
    assert!(code.contains("// Error:"));
    assert!(!code.contains("contract"));
}

#[test]
fn plain_erc20_premints_to_the_deployer() {
    let code = generate(&erc20(Erc20Features::default()));

    assert_eq!(inheritance_line(&code), "contract Coin is ERC20 {");
    assert!(!code.contains("Ownable"));
    assert!(code.contains("constructor(string memory _name, string memory _symbol) ERC20(_name, _symbol) {"));
    assert!(code.contains("_mint(msg.sender, 1000000000000000000000);"));
}

#[test]
fn premint_amount_is_scaled_in_integer_arithmetic() {
    let mut config = erc20(Erc20Features::default());
    let StandardSettings::Erc20(settings) = &mut config.settings else {
        unreachable!()
    };
    settings.initial_supply = "5".to_string();

    let code = generate(&config);
    assert!(code.contains("_mint(msg.sender, 5000000000000000000);"));
}

#[test]
fn zero_supply_skips_the_premint() {
    let mut config = erc20(Erc20Features::default());
    let StandardSettings::Erc20(settings) = &mut config.settings else {
        unreachable!()
    };
    settings.initial_supply = "0".to_string();

    let code = generate(&config);
    assert!(!code.contains("_mint("));
}

#[test]
fn premint_receiver_becomes_a_trailing_parameter() {
    let mut config = erc20(Erc20Features::default());
    let StandardSettings::Erc20(settings) = &mut config.settings else {
        unreachable!()
    };
    settings.premint_receiver = Some("0x2222222222222222222222222222222222222222".to_string());

    let code = generate(&config);
    assert!(code.contains(
        "constructor(string memory _name, string memory _symbol, address _premintReceiver)"
    ));
    assert!(code.contains("_mint(_premintReceiver, 1000000000000000000000);"));
}

#[test]
fn mintable_erc20_is_owner_gated() {
    let code = generate(&erc20(Erc20Features {
        mintable: true,
        ..Erc20Features::default()
    }));

    assert_eq!(inheritance_line(&code), "contract Coin is ERC20, Ownable {");
    assert!(code.contains("import \"@openzeppelin/contracts/access/Ownable.sol\";"));
    assert!(code.contains(
        "constructor(address initialOwner, string memory _name, string memory _symbol) ERC20(_name, _symbol) Ownable(initialOwner) {"
    ));
    assert!(code.contains("function mint(address to, uint256 amount) public virtual onlyOwner {"));
}

#[test]
fn mintable_and_pausable_share_one_ownable() {
    let code = generate(&erc20(Erc20Features {
        mintable: true,
        pausable: true,
        ..Erc20Features::default()
    }));

    assert_eq!(inheritance_line(&code).matches("Ownable").count(), 1);
    assert_eq!(code.matches("address initialOwner").count(), 1);
    assert!(code.contains("function pause() public virtual onlyOwner {"));
    assert!(code.contains(
        "function _update(address from, address to, uint256 value) internal virtual override(ERC20, ERC20Pausable) {"
    ));
}

#[test]
fn snapshots_override_the_transfer_hook() {
    let code = generate(&erc20(Erc20Features {
        snapshots: true,
        ..Erc20Features::default()
    }));

    assert!(code.contains("override(ERC20, ERC20Snapshot)"));
    assert!(code.contains("super._beforeTokenTransfer(from, to, amount);"));
}

#[test]
fn votes_collapse_the_standalone_permit_base() {
    let code = generate(&erc20(Erc20Features {
        permits: true,
        votes: true,
        ..Erc20Features::default()
    }));

    assert!(inheritance_line(&code).contains("ERC20Votes"));
    assert!(!code.contains("ERC20Permit"));
}

#[test]
fn permit_alone_threads_the_name_to_its_base_constructor() {
    let code = generate(&erc20(Erc20Features {
        permits: true,
        ..Erc20Features::default()
    }));

    assert!(inheritance_line(&code).contains("ERC20Permit"));
    assert!(code.contains("ERC20(_name, _symbol) ERC20Permit(_name) {"));
}

#[test]
fn every_enabled_erc20_base_appears_exactly_once() {
    let code = generate(&erc20(Erc20Features {
        mintable: true,
        burnable: true,
        pausable: true,
        permits: true,
        votes: true,
        flash_minting: true,
        snapshots: true,
    }));

    let header = inheritance_line(&code);
    for base in [
        "ERC20Pausable",
        "ERC20Burnable",
        "ERC20Snapshot",
        "ERC20Votes",
        "ERC20FlashMint",
        "Ownable",
    ] {
        assert_eq!(header.matches(base).count(), 1, "base {base} in {header}");
    }
}

#[test]
fn erc721_always_carries_ownable() {
    let code = generate(&erc721(Erc721Features::default()));

    assert_eq!(inheritance_line(&code), "contract Art is ERC721, Ownable {");
    assert!(code.contains(
        "constructor(address initialOwner, string memory _name, string memory _symbol) ERC721(_name, _symbol) Ownable(initialOwner) {"
    ));
}

#[test]
fn auto_increment_mint_takes_no_token_id() {
    let code = generate(&erc721(Erc721Features {
        mintable: true,
        auto_increment_ids: true,
        ..Erc721Features::default()
    }));

    assert!(code.contains("import \"@openzeppelin/contracts/utils/Counters.sol\";"));
    assert!(code.contains("using Counters for Counters.Counter;"));
    assert!(code.contains("Counters.Counter private _tokenIdCounter;"));
    assert!(code.contains("function safeMint(address to) public virtual onlyOwner {"));
    assert!(code.contains("uint256 tokenId = _tokenIdCounter.current();"));
    assert!(!code.contains("safeMint(address to, uint256 tokenId)"));
}

#[test]
fn manual_ids_keep_the_token_id_parameter() {
    let code = generate(&erc721(Erc721Features {
        mintable: true,
        ..Erc721Features::default()
    }));

    assert!(code.contains("function safeMint(address to, uint256 tokenId) public virtual onlyOwner {"));
    assert!(!code.contains("Counters"));
}

#[test]
fn pausable_and_enumerable_merge_into_one_update_override() {
    let code = generate(&erc721(Erc721Features {
        pausable: true,
        enumerable: true,
        ..Erc721Features::default()
    }));

    assert!(code.contains(
        "function _update(address to, uint256 tokenId, address auth) internal virtual override(ERC721, ERC721Pausable, ERC721Enumerable) returns (address) {"
    ));
    assert_eq!(code.matches("function _update(").count(), 1);
    assert!(code.contains("override(ERC721, ERC721Enumerable)"));
    assert!(code.contains("super._increaseBalance(account, amount);"));
}

#[test]
fn uri_storage_overrides_token_uri_and_burn() {
    let code = generate(&erc721(Erc721Features {
        mintable: true,
        uri_storage: true,
        ..Erc721Features::default()
    }));

    assert!(code.contains(
        "function tokenURI(uint256 tokenId) public view virtual override(ERC721, ERC721URIStorage) returns (string memory) {"
    ));
    assert!(code.contains("function _burn(uint256 tokenId) internal virtual override(ERC721, ERC721URIStorage) {"));
    assert!(code.contains("function safeMint(address to, uint256 tokenId, string memory uri) public virtual onlyOwner {"));
    assert!(code.contains("_setTokenURI(tokenId, uri);"));
}

#[test]
fn base_uri_is_fixed_at_deployment_without_uri_storage() {
    let mut config = erc721(Erc721Features::default());
    let StandardSettings::Erc721(settings) = &mut config.settings else {
        unreachable!()
    };
    settings.base_uri = Some("ipfs://collection/".to_string());

    let code = generate(&config);
    assert!(code.contains("_setBaseURI(\"ipfs://collection/\");"));
    assert!(code.contains("function _baseURI() internal pure override returns (string memory) {"));
    assert!(code.contains("return \"ipfs://collection/\";"));
}

#[test]
fn erc721_votes_seed_the_domain_separator() {
    let code = generate(&erc721(Erc721Features {
        votes: true,
        ..Erc721Features::default()
    }));

    assert!(inheritance_line(&code).contains("ERC721Votes"));
    assert!(code.contains("EIP712(_name, \"1\")"));
    assert!(code.contains("override(ERC721, ERC721Votes)"));
}

#[test]
fn blank_erc1155_uri_yields_a_placeholder() {
    let code = generate(&erc1155("", Erc1155Features::default()));

    assert!(code.contains("// Error:"));
    assert!(code.contains("`uri`"));
    assert!(!code.contains("contract"));
}

#[test]
fn erc1155_threads_the_uri_and_merges_update_overrides() {
    let code = generate(&erc1155(
        "https://example.com/items/{id}.json",
        Erc1155Features {
            mintable: true,
            pausable: true,
            supply_tracking: true,
            ..Erc1155Features::default()
        },
    ));

    assert_eq!(
        inheritance_line(&code),
        "contract GameItems is ERC1155, Ownable, ERC1155Pausable, ERC1155Supply {"
    );
    assert!(code.contains(
        "constructor(address initialOwner, string memory _uri) ERC1155(_uri) Ownable(initialOwner) {"
    ));
    assert!(code.contains("override(ERC1155, ERC1155Pausable, ERC1155Supply)"));
    assert_eq!(code.matches("function _update(").count(), 1);
    assert!(code.contains("function mintBatch(address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data) public virtual onlyOwner {"));
}

#[test]
fn imports_are_deduplicated_in_first_seen_order() {
    let code = generate(&erc20(Erc20Features {
        mintable: true,
        pausable: true,
        ..Erc20Features::default()
    }));

    let imports: Vec<&str> = code
        .lines()
        .filter(|line| line.starts_with("import "))
        .collect();
    assert_eq!(
        imports,
        vec![
            "import \"@openzeppelin/contracts/token/ERC20/ERC20.sol\";",
            "import \"@openzeppelin/contracts/access/Ownable.sol\";",
            "import \"@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol\";",
        ]
    );
}
