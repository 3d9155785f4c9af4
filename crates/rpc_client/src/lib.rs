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

//! Hubs RPC Client Library
//!
//! This crate provides the JSON-RPC transport used to read objects, coin
//! balances and executed transaction blocks from a ledger fullnode.

pub mod models;
mod rpc_client;
mod rpc_exception;

pub use rpc_client::{RpcClient, DEFAULT_REQUEST_TIMEOUT};
pub use rpc_exception::{RpcException, INTERNAL_ERROR, PARSE_ERROR};

// Re-export commonly used types
pub use models::{
    RpcCoin, RpcCoinPage, RpcEvent, RpcObjectOptions, RpcObjectResponse, RpcRequest,
    RpcResponse, RpcResponseError, RpcTransactionBlock, RpcTransactionBlockOptions,
};
