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

//! Hubs Registry Library
//!
//! Synchronizes the shared hub registry object from a ledger node and builds,
//! submits and interprets the registry's state-mutating calls.
//!
//! ## Modules
//!
//! - [`codec`]: text, fixed-point and canonical binary encodings
//! - [`fetcher`]: registry and token balance reads
//! - [`hub`] / [`registry`]: typed entities and derived state
//! - [`transaction`]: unsigned Move call payloads
//! - [`submitter`]: sign, broadcast and confirm
//! - [`service`]: [`HubRegistryClient`], tying the above together

pub mod address;
pub mod codec;
pub mod error;
pub mod fetcher;
pub mod hub;
pub mod raw;
pub mod registry;
pub mod service;
pub mod signer;
pub mod submitter;
pub mod transaction;
pub mod view;

pub use address::{Address, ObjectId, ADDRESS_LENGTH};
pub use error::{HubError, HubResult};
pub use fetcher::RegistryFetcher;
pub use hub::{build_hub, voted_hubs, Hub, HubId, HubStatus};
pub use raw::{RawHub, RawRegistry};
pub use registry::{Registry, VotingWindow};
pub use service::{HubRegistryClient, MutationOutcome};
pub use signer::{ExecutionResponse, ExecutionStatus, LedgerEvent, SignerError, TransactionSigner};
pub use submitter::{SubmissionReceipt, TransactionSubmitter};
pub use transaction::{
    CallArg, Coordinate, EntryPoint, MoveCall, MoveTarget, ProposalForm, TransactionBuilder,
    TransactionPayload,
};
pub use view::{RefreshTicket, RegistryView};
