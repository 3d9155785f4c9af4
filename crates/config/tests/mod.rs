//! Config loading integration tests
//!
//! These tests exercise loading complete configuration files from disk,
//! the way the CLI does at startup.

mod load_tests {
    use hubs_config::{ConfigError, HubsConfig, NetworkType};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_configuration_file() {
        let file = write_config(
            r#"
network = "mainnet"
rpc_url = "https://rpc.example.org"

[contract]
package_id = "0x8f1"
module_name = "hub_registry"
registry_id = "0x77"
token_coin_type = "0x5c::lit_token::LIT_TOKEN"
gas_budget = 5000000

[submission]
timeout_ms = 30000
poll_interval_ms = 500
confirm = false

[logger]
level = "debug"
json = true
"#,
        );

        let config = HubsConfig::load(file.path()).unwrap();
        assert_eq!(config.network, NetworkType::MainNet);
        assert_eq!(config.rpc_endpoint(), "https://rpc.example.org");
        assert_eq!(config.contract.module_name, "hub_registry");
        assert_eq!(config.contract.gas_budget, 5_000_000);
        assert_eq!(config.submission.timeout().as_millis(), 30_000);
        assert_eq!(config.submission.poll_interval().as_millis(), 500);
        assert!(!config.submission.confirm);
        assert_eq!(config.logger.level, "debug");
        assert!(config.logger.json);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = HubsConfig::load("/definitely/not/here/hubs.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("hubs.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let file = write_config("network = [unterminated");
        assert!(matches!(
            HubsConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_rejects_bad_coin_type() {
        let file = write_config(
            r#"
[contract]
package_id = "0x1"
module_name = "hub_registry"
registry_id = "0x2"
token_coin_type = "LIT"
"#,
        );
        assert!(matches!(
            HubsConfig::load(file.path()),
            Err(ConfigError::Invalid {
                field: "contract.token_coin_type",
                ..
            })
        ));
    }

    #[test]
    fn test_read_skips_validation() {
        let file = write_config("network = \"localnet\"\n");
        let config = HubsConfig::read(file.path()).unwrap();
        assert_eq!(config.network, NetworkType::LocalNet);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing("contract.package_id"))
        ));
    }
}
