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

//! # Hubs-RS: community hub registry client
//!
//! Client-side layer for a community hub registry whose authoritative state
//! lives in a single shared object on a Move-based ledger.
//!
//! This library provides:
//! - Typed decoding of the registry object into hubs with derived state
//! - Builders for every mutating contract entry point
//! - A submitter that drives sign, broadcast and confirmation
//! - An orchestrating client that re-fetches the registry after each mutation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubs_rs::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HubsConfig::load("hubs.toml")?;
//!     let rpc = Arc::new(RpcClient::new(config.rpc_endpoint().parse()?)?);
//!     let client = HubRegistryClient::new(rpc, &config)?;
//!
//!     for hub in client.voted_hubs().await? {
//!         println!("{} {}%", hub.name, hub.progress_percentage());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - network, contract handles, submission timing, logging
//! - [`rpc_client`] - JSON-RPC transport to the ledger node
//! - [`registry`] - codec, fetcher, hub view models, builders, submitter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use hubs_config as config;
pub use hubs_registry as registry;
pub use hubs_rpc_client as rpc_client;

/// Common imports for hub registry clients
pub mod prelude {
    pub use crate::config::{ContractConfig, HubsConfig, NetworkType, SubmissionConfig};
    pub use crate::registry::{
        Address, Hub, HubError, HubId, HubRegistryClient, HubStatus, MutationOutcome, ObjectId,
        ProposalForm, Registry, RegistryView, SubmissionReceipt, TransactionBuilder,
        TransactionPayload, TransactionSigner, TransactionSubmitter,
    };
    pub use crate::rpc_client::{RpcClient, RpcException};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
