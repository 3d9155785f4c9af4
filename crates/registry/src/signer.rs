// Copyright (C) 2025 The Hubs-RS Project.
//
// signer.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Boundary to the external wallet that holds the keys.

use crate::address::Address;
use crate::transaction::TransactionPayload;
use async_trait::async_trait;
use hubs_rpc_client::RpcEvent;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Signs, broadcasts and optionally awaits execution of a payload.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Account the signer acts for
    fn address(&self) -> Address;

    async fn sign_and_execute(
        &self,
        payload: &TransactionPayload,
    ) -> Result<ExecutionResponse, SignerError>;
}

/// Failures reported by the signer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("user declined to sign: {0}")]
    Declined(String),

    #[error("broadcast failed: {0}")]
    Broadcast(String),

    /// Broadcast happened but execution was not observed
    #[error("execution not observed")]
    Unconfirmed { digest: Option<String> },
}

/// Execution status as reported by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExecutionStatus {
    Success,
    Failure(String),
}

/// Event emitted by an executed transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEvent {
    pub event_type: String,
    pub parsed_json: Value,
}

impl From<RpcEvent> for LedgerEvent {
    fn from(event: RpcEvent) -> Self {
        Self {
            event_type: event.event_type,
            parsed_json: event.parsed_json,
        }
    }
}

/// What the signer knows after broadcasting
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResponse {
    pub digest: String,
    pub events: Vec<LedgerEvent>,
    /// `None` when the signer returned before execution was observed
    pub status: Option<ExecutionStatus>,
}
