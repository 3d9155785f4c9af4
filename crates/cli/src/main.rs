// Copyright (C) 2025 The Hubs-RS Project.
//
// main.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use anyhow::{Context, Result};
use clap::Parser;
use hubs_cli::args::{CliArgs, Command};
use hubs_cli::{commands, config};
use hubs_config::{HubsConfig, LoggerConfig};
use hubs_registry::{Address, HubRegistryClient, TransactionBuilder};
use hubs_rpc_client::RpcClient;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let config = config::resolve(&cli)?;
    init_tracing(&config.logger);

    debug!(
        target: "hubs",
        network = %config.network,
        endpoint = config.rpc_endpoint(),
        file = ?config::config_path(&cli),
        "configuration resolved"
    );

    match &cli.command {
        Command::ShowConfig => {
            let rendered = toml::to_string_pretty(&config)
                .unwrap_or_else(|_| format!("{config:#?}"));
            println!("{rendered}");
            if let Err(err) = config.validate() {
                println!("# incomplete: {err}");
            }
        }
        Command::Build(build) => {
            config.validate()?;
            let builder = TransactionBuilder::new(&config.contract)?;
            let payload = commands::build_payload(&builder, build)?;
            info!(target: "hubs", entry_point = %payload.entry_point, "payload built");
            println!("{}", serde_json::to_string_pretty(&payload.to_json())?);
        }
        Command::Hubs | Command::Voted => {
            let client = connect(&config)?;
            let registry = client.registry().await?;
            let rendered = if cli.command == Command::Voted {
                commands::render_hubs(registry.voted_hubs(), &registry.voting_window, cli.json)?
            } else {
                commands::render_hubs(&registry.hubs, &registry.voting_window, cli.json)?
            };
            print!("{rendered}");
        }
        Command::Balance { address } => {
            let owner: Address = address.parse()?;
            let client = connect(&config)?;
            let balance = client.token_balance(&owner).await?;
            println!(
                "{}",
                commands::render_balance(
                    &owner.to_string(),
                    &config.contract.token_coin_type,
                    balance,
                    cli.json
                )
            );
        }
    }

    Ok(())
}

fn connect(config: &HubsConfig) -> Result<HubRegistryClient> {
    config.validate()?;
    let url = config
        .rpc_endpoint()
        .parse()
        .with_context(|| format!("invalid rpc endpoint `{}`", config.rpc_endpoint()))?;
    let rpc = Arc::new(RpcClient::new(url)?);
    Ok(HubRegistryClient::new(rpc, config)?)
}

fn init_tracing(logger: &LoggerConfig) {
    // a bare level applies to this workspace only; full directives pass through
    let directive = if logger.level.contains('=') {
        logger.level.clone()
    } else {
        format!("warn,hubs={}", logger.level)
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let builder = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);
    let _ = if logger.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
