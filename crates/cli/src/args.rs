// Copyright (C) 2025 The Hubs-RS Project.
//
// args.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use clap::{Parser, Subcommand, ValueEnum};
use hubs_config::NetworkType;
use hubs_registry::{Coordinate, HubId};
use std::path::PathBuf;

/// Command-line arguments for the hubs CLI
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hubs-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect the community hub registry and build unsigned registry calls",
    long_about = "Reads the shared hub registry from a ledger fullnode, reports hubs, votes \
                  and token balances, and prints unsigned Move call payloads for an external \
                  wallet to sign."
)]
pub struct CliArgs {
    /// Specifies the config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Network whose public fullnode is used
    #[arg(long = "network", value_name = "NETWORK")]
    pub network: Option<NetworkType>,

    /// Fullnode JSON-RPC endpoint, overrides the network default
    #[arg(long = "rpc-url", env = "HUBS_RPC_URL", value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Shared registry object id
    #[arg(long = "registry-id", env = "HUBS_REGISTRY_ID", value_name = "OBJECT_ID")]
    pub registry_id: Option<String>,

    /// The verbose log level
    #[arg(long = "verbose", value_enum)]
    pub verbose: Option<LogLevel>,

    /// Print machine readable JSON
    #[arg(long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every hub with status and funding progress
    Hubs,
    /// List hubs that received at least one vote
    Voted,
    /// Show the registry token balance of an address
    Balance {
        /// Account address
        address: String,
    },
    /// Print the effective configuration
    ShowConfig,
    /// Validate arguments and print an unsigned call payload
    #[command(subcommand)]
    Build(BuildCommand),
}

/// One variant per contract entry point
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BuildCommand {
    NewRegistry {
        #[arg(long)]
        min_propose: u64,
        #[arg(long)]
        min_vote: u64,
    },
    ProposeHub {
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        contact: String,
        /// Decimal degrees, e.g. 51.5074
        #[arg(long, allow_hyphen_values = true)]
        latitude: Coordinate,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Coordinate,
        /// URL of an uploaded image
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long)]
        caller_balance: u64,
    },
    VoteForHub {
        #[arg(allow_hyphen_values = true)]
        hub_id: HubId,
        #[arg(long)]
        caller_balance: u64,
    },
    FundHub {
        #[arg(allow_hyphen_values = true)]
        hub_id: HubId,
        #[arg(long)]
        amount: u64,
    },
    SetFundingDetails {
        #[arg(allow_hyphen_values = true)]
        hub_id: HubId,
        #[arg(long)]
        funding_goal: u64,
        #[arg(long)]
        wallet: String,
    },
    SetVotingWindow {
        /// Window start, ledger clock milliseconds
        #[arg(long)]
        start: u64,
        #[arg(long)]
        end: u64,
    },
    FinalizeVoting,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl CliArgs {
    /// Whether the command only reads local state
    pub fn is_offline(&self) -> bool {
        matches!(self.command, Command::ShowConfig | Command::Build(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags() {
        let args = CliArgs::try_parse_from([
            "hubs-cli",
            "--config",
            "hubs.toml",
            "--network",
            "devnet",
            "--verbose",
            "debug",
            "--json",
            "hubs",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("hubs.toml")));
        assert_eq!(args.network, Some(NetworkType::DevNet));
        assert_eq!(args.verbose, Some(LogLevel::Debug));
        assert!(args.json);
        assert_eq!(args.command, Command::Hubs);
        assert!(!args.is_offline());
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
