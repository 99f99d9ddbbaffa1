use pretty_assertions::assert_eq;

use silsila::config::{Config, load_config};
use silsila::utils;

#[test]
fn defaults_mirror_the_documented_limits() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://blockstream.info/api");
    assert_eq!(config.api.fetch_delay_ms, 200);
    assert_eq!(config.tracer.default_depth, 5);
    assert_eq!(config.tracer.min_depth, 1);
    assert_eq!(config.tracer.max_depth, 10);
    assert_eq!(config.tracer.max_addresses, 50);
    assert_eq!(config.server.port, 8080);
}

#[test]
fn partial_config_files_fall_back_to_defaults_per_field() {
    let path = std::env::temp_dir().join(format!("silsila-config-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[tracer]
max_addresses = 12

[server]
port = 9999
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.tracer.max_addresses, 12);
    assert_eq!(config.server.port, 9999);
    // Untouched sections keep their defaults
    assert_eq!(config.tracer.default_depth, 5);
    assert_eq!(config.api.base_url, "https://blockstream.info/api");
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(load_config("/definitely/not/a/real/path.toml").is_err());
}

#[test]
fn labels_truncate_long_identifiers_only() {
    assert_eq!(
        utils::address_label("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
        "1A1zP1eP...v7DivfNa"
    );
    assert_eq!(utils::address_label("shortaddr"), "shortaddr");

    assert_eq!(
        utils::transaction_label("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"),
        "TX: 4a5e1e4b..."
    );
    assert_eq!(utils::transaction_label("tx-9"), "TX: tx-9");
}

#[test]
fn labels_truncate_on_character_boundaries() {
    // 17 characters, multi-byte from the eighth onward
    assert_eq!(utils::address_label("aaaaaaaéééééééééé"), "aaaaaaaé...éééééééé");
    // 12 characters but more than 16 bytes: shown whole
    assert_eq!(utils::address_label("aaaaaaaééééé"), "aaaaaaaééééé");

    assert_eq!(utils::transaction_label("ééééééééé"), "TX: éééééééé...");
    assert_eq!(utils::transaction_label("éééééééé"), "TX: éééééééé");
}
