// Copyright (C) 2025 The Hubs-RS Project.
//
// error.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::hub::HubId;
use hubs_rpc_client::RpcException;
use thiserror::Error;

/// Result alias used across the registry layer
pub type HubResult<T> = Result<T, HubError>;

/// Every failure the registry layer can surface to its caller.
///
/// Validation and derived-state kinds (`Validation`, `Encoding`,
/// `InsufficientBalance`, `AlreadyVoted`, `FundingCapReached`,
/// `HubNotFound`) are produced before any network call. The rest come from
/// the node or the signer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HubError {
    #[error("network error: {0}")]
    Network(String),

    #[error("registry decode error: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("insufficient token balance: {available} held, {required} required")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("address has already voted for hub {0}")]
    AlreadyVoted(HubId),

    #[error("hub {0} has reached its funding goal")]
    FundingCapReached(HubId),

    #[error("hub {0} not found in registry")]
    HubNotFound(HubId),

    #[error("transaction rejected: {0}")]
    TransactionRejected(String),

    #[error(
        "transaction not confirmed in time; outcome unknown (digest: {})",
        .digest.as_deref().unwrap_or("none")
    )]
    SubmissionTimeout { digest: Option<String> },

    #[error("a submission for this action is already in flight")]
    ActionInFlight,
}

impl HubError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        HubError::Validation(message.into())
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        HubError::Decode(message.into())
    }

    /// Errors the user can clear by trying again later (re-fetch or re-click)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            HubError::Network(_)
                | HubError::TransactionRejected(_)
                | HubError::SubmissionTimeout { .. }
                | HubError::ActionInFlight
        )
    }

    /// Errors raised locally, before anything reached the network
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            HubError::Validation(_)
                | HubError::Encoding(_)
                | HubError::InsufficientBalance { .. }
                | HubError::AlreadyVoted(_)
                | HubError::FundingCapReached(_)
                | HubError::HubNotFound(_)
                | HubError::ActionInFlight
        )
    }
}

impl From<RpcException> for HubError {
    fn from(err: RpcException) -> Self {
        HubError::Network(format!("rpc error {}: {}", err.code, err.message))
    }
}
