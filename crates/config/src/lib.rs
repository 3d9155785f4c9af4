// Copyright (C) 2025 The Hubs-RS Project.
//
// lib.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Hub Registry Configuration Module
//!
//! This module provides configuration types for the hub registry client:
//! which ledger node to talk to, which contract deployment to address, and
//! how long to wait for submitted transactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Public fullnode endpoints
pub const MAINNET_FULLNODE_URL: &str = "https://fullnode.mainnet.sui.io:443";
pub const TESTNET_FULLNODE_URL: &str = "https://fullnode.testnet.sui.io:443";
pub const DEVNET_FULLNODE_URL: &str = "https://fullnode.devnet.sui.io:443";
pub const LOCALNET_FULLNODE_URL: &str = "http://127.0.0.1:9000";

/// Coin type of the governance token used for propose/vote eligibility
pub const DEFAULT_TOKEN_COIN_TYPE: &str =
    "0x5c28ffccbaa739ecaae7cfddeffe15b8cbc09d3e4248e0b987b4f6bb1608cd2f::lit_token::LIT_TOKEN";

/// Gas budget attached to every built call (in the ledger's smallest unit)
pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;

/// Submission timing defaults
pub const DEFAULT_SUBMISSION_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required setting `{0}`")]
    Missing(&'static str),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Network type for the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    DevNet,
    LocalNet,
}

impl NetworkType {
    /// Gets the public fullnode URL for the network
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            NetworkType::MainNet => MAINNET_FULLNODE_URL,
            NetworkType::TestNet => TESTNET_FULLNODE_URL,
            NetworkType::DevNet => DEVNET_FULLNODE_URL,
            NetworkType::LocalNet => LOCALNET_FULLNODE_URL,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::DevNet => write!(f, "devnet"),
            NetworkType::LocalNet => write!(f, "localnet"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "devnet" | "dev" => Ok(NetworkType::DevNet),
            "localnet" | "local" => Ok(NetworkType::LocalNet),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// Contract deployment handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Package that publishes the registry module
    pub package_id: String,
    /// Module name inside the package
    pub module_name: String,
    /// Shared registry object
    pub registry_id: String,
    /// Coin type counted for propose/vote eligibility
    pub token_coin_type: String,
    pub gas_budget: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            package_id: String::new(),
            module_name: String::new(),
            registry_id: String::new(),
            token_coin_type: DEFAULT_TOKEN_COIN_TYPE.to_string(),
            gas_budget: DEFAULT_GAS_BUDGET,
        }
    }
}

/// Submission timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Upper bound for sign + broadcast + confirm
    pub timeout_ms: u64,
    /// Interval between confirmation polls
    pub poll_interval_ms: u64,
    /// Poll the node for effects when the signer did not report them
    pub confirm: bool,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_SUBMISSION_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            confirm: true,
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log level or `EnvFilter` directive
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubsConfig {
    pub network: NetworkType,
    /// Overrides the network's public fullnode
    pub rpc_url: Option<String>,
    pub contract: ContractConfig,
    pub submission: SubmissionConfig,
    pub logger: LoggerConfig,
}

impl HubsConfig {
    /// Loads and validates configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file without validating it, for callers that overlay
    /// further settings before validation
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(target: "hubs", path = %path.display(), "loading configuration");
        Ok(toml::from_str(&content)?)
    }

    /// Parses and validates configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: HubsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every handle required to talk to the contract is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract.package_id.trim().is_empty() {
            return Err(ConfigError::Missing("contract.package_id"));
        }
        if self.contract.module_name.trim().is_empty() {
            return Err(ConfigError::Missing("contract.module_name"));
        }
        if self.contract.registry_id.trim().is_empty() {
            return Err(ConfigError::Missing("contract.registry_id"));
        }
        if self.contract.token_coin_type.split("::").count() != 3 {
            return Err(ConfigError::Invalid {
                field: "contract.token_coin_type",
                reason: format!(
                    "expected `address::module::Type`, got `{}`",
                    self.contract.token_coin_type
                ),
            });
        }
        if self.contract.gas_budget == 0 {
            return Err(ConfigError::Invalid {
                field: "contract.gas_budget",
                reason: "must be positive".to_string(),
            });
        }
        if self.submission.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "submission.timeout_ms",
                reason: "must be positive".to_string(),
            });
        }
        if self.submission.poll_interval_ms == 0
            || self.submission.poll_interval_ms > self.submission.timeout_ms
        {
            return Err(ConfigError::Invalid {
                field: "submission.poll_interval_ms",
                reason: "must be positive and not exceed the timeout".to_string(),
            });
        }
        Ok(())
    }

    /// The JSON-RPC endpoint to use
    pub fn rpc_endpoint(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.fullnode_url())
    }
}
