// Copyright (C) 2025 The Hubs-RS Project.
//
// rpc_exception.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// JSON-RPC parse error code
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC internal error code, also used for transport failures
pub const INTERNAL_ERROR: i32 = -32603;

/// Error returned by the ledger node or by the transport in front of it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RpcException {
    /// JSON-RPC error code
    pub code: i32,

    /// Error message
    pub message: String,
}

impl RpcException {
    /// Creates a new RPC exception
    pub fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }

    pub(crate) fn transport(message: String) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub(crate) fn parse(message: String) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    /// True when the response body could not be understood
    pub fn is_parse_error(&self) -> bool {
        self.code == PARSE_ERROR
    }
}
