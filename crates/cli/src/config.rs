// Copyright (C) 2025 The Hubs-RS Project.
//
// config.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Effective configuration: file first, then flags and environment.

use crate::args::CliArgs;
use hubs_config::{ConfigError, HubsConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "hubs.toml";

/// Builds the configuration the command runs with.
///
/// An explicit `--config` must exist; the default file is optional.
pub fn resolve(args: &CliArgs) -> Result<HubsConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => HubsConfig::read(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => HubsConfig::read(DEFAULT_CONFIG_FILE)?,
        None => HubsConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

/// Path of the file [`resolve`] reads, if any
pub fn config_path(args: &CliArgs) -> Option<PathBuf> {
    match &args.config {
        Some(path) => Some(path.clone()),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
        None => None,
    }
}

pub fn apply_overrides(config: &mut HubsConfig, args: &CliArgs) {
    if let Some(network) = args.network {
        config.network = network;
    }
    if let Some(url) = &args.rpc_url {
        config.rpc_url = Some(url.clone());
    }
    if let Some(registry_id) = &args.registry_id {
        config.contract.registry_id = registry_id.clone();
    }
    if let Some(level) = args.verbose {
        config.logger.level = level.as_str().to_string();
    }
    if args.json {
        config.logger.json = true;
    }
}
