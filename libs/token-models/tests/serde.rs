use ingot_models::{StandardSettings, TokenConfig, TokenStandard};
use serde_json::json;

#[test]
fn parse_erc20_config() {
    let config: TokenConfig = serde_json::from_value(json!({
        "standard": "ERC20",
        "name": "My Coin",
        "symbol": "MC",
        "decimals": 6,
        "initialSupply": "1000000",
        "premintReceiver": "0x1111111111111111111111111111111111111111",
        "features": { "mintable": true, "pausable": true }
    }))
    .expect("config should deserialize");

    assert_eq!(config.standard(), TokenStandard::Erc20);
    assert_eq!(config.name, "My Coin");
    assert_eq!(config.contract_name(), "MyCoin");

    let StandardSettings::Erc20(settings) = &config.settings else {
        panic!("expected ERC20 settings");
    };
    assert_eq!(settings.decimals, 6);
    assert_eq!(settings.initial_supply, "1000000");
    assert!(settings.features.mintable);
    assert!(settings.features.pausable);
    // Flags absent from the document stay off.
    assert!(!settings.features.votes);
}

#[test]
fn erc20_decimals_default_to_eighteen() {
    let config: TokenConfig = serde_json::from_value(json!({
        "standard": "ERC20",
        "name": "Coin",
        "symbol": "CN",
        "initialSupply": "5"
    }))
    .expect("config should deserialize");

    let StandardSettings::Erc20(settings) = &config.settings else {
        panic!("expected ERC20 settings");
    };
    assert_eq!(settings.decimals, 18);
    assert!(settings.premint_receiver.is_none());
}

#[test]
fn decimals_beyond_a_byte_are_rejected() {
    let result = serde_json::from_value::<TokenConfig>(json!({
        "standard": "ERC20",
        "name": "Coin",
        "symbol": "CN",
        "decimals": 300,
        "initialSupply": "5"
    }));
    assert!(result.is_err());
}

#[test]
fn parse_erc721_and_erc1155_tags() {
    let nft: TokenConfig = serde_json::from_value(json!({
        "standard": "ERC721",
        "name": "Art",
        "symbol": "ART",
        "baseUri": "ipfs://collection/",
        "features": { "autoIncrementIds": true }
    }))
    .expect("ERC721 config should deserialize");
    assert_eq!(nft.standard(), TokenStandard::Erc721);

    let multi: TokenConfig = serde_json::from_value(json!({
        "standard": "ERC1155",
        "name": "Game Items",
        "symbol": "GMI",
        "uri": "https://example.com/items/{id}.json"
    }))
    .expect("ERC1155 config should deserialize");
    assert_eq!(multi.standard(), TokenStandard::Erc1155);
    assert_eq!(multi.contract_name(), "GameItems");
}

#[test]
fn config_roundtrips_through_json() {
    let config = TokenConfig {
        name: "Art".to_string(),
        symbol: "ART".to_string(),
        settings: StandardSettings::creator_defaults(TokenStandard::Erc721),
    };

    let value = serde_json::to_value(&config).expect("config should serialize");
    assert_eq!(value["standard"], "ERC721");

    let back: TokenConfig = serde_json::from_value(value).expect("config should deserialize");
    assert_eq!(back, config);
}

#[test]
fn creator_defaults_match_the_form() {
    let StandardSettings::Erc20(erc20) = StandardSettings::creator_defaults(TokenStandard::Erc20)
    else {
        panic!("expected ERC20 settings");
    };
    assert_eq!(erc20.decimals, 18);
    assert_eq!(erc20.initial_supply, "1000000");
    assert!(erc20.features.mintable);
    assert!(erc20.features.burnable);
    assert!(!erc20.features.pausable);

    let StandardSettings::Erc721(erc721) = StandardSettings::creator_defaults(TokenStandard::Erc721)
    else {
        panic!("expected ERC721 settings");
    };
    assert!(erc721.features.auto_increment_ids);
    assert!(erc721.base_uri.is_none());

    let StandardSettings::Erc1155(erc1155) =
        StandardSettings::creator_defaults(TokenStandard::Erc1155)
    else {
        panic!("expected ERC1155 settings");
    };
    assert!(erc1155.features.mintable);
    assert!(erc1155.uri.is_empty());
}
