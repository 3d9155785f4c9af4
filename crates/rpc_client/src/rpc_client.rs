// Copyright (C) 2025 The Hubs-RS Project.
//
// rpc_client.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{
    RpcCoinPage, RpcObjectOptions, RpcObjectResponse, RpcRequest, RpcResponse,
    RpcTransactionBlock, RpcTransactionBlockOptions,
};
use crate::rpc_exception::RpcException;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Default per-request HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The RPC client to call ledger node JSON-RPC methods
#[derive(Debug)]
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client with the default request timeout
    pub fn new(url: Url) -> Result<Self, RpcException> {
        let http_client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RpcException::transport(format!("HTTP client error: {}", e)))?;
        Ok(Self::with_client(http_client, url))
    }

    /// Creates a new RPC client with an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        }
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &Url {
        &self.base_address
    }

    fn as_rpc_request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        RpcRequest::new(id, method, params)
    }

    fn as_rpc_response(content: &str, throw_on_error: bool) -> Result<RpcResponse, RpcException> {
        let mut response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| RpcException::parse(format!("Parse error: {}", e)))?;

        response.raw_response = Some(content.to_string());

        if let Some(ref error) = response.error {
            if throw_on_error {
                return Err(RpcException::new(error.code, error.message.clone()));
            }
        }

        Ok(response)
    }

    /// Sends an asynchronous RPC request
    pub async fn send_async(
        &self,
        request: RpcRequest,
        throw_on_error: bool,
    ) -> Result<RpcResponse, RpcException> {
        debug!(target: "hubs::rpc", method = %request.method, id = request.id, "rpc request");

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcException::transport(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| RpcException::transport(format!("Failed to read response: {}", e)))?;
        trace!(target: "hubs::rpc", %status, body = %content, "rpc response");

        match Self::as_rpc_response(&content, throw_on_error) {
            Err(err) if err.is_parse_error() && !status.is_success() => Err(
                RpcException::transport(format!("HTTP status {status} from {}", self.base_address)),
            ),
            other => other,
        }
    }

    /// Sends an async RPC request and returns the result
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, RpcException> {
        let request = self.as_rpc_request(method, params);
        let response = self.send_async(request, true).await?;
        response
            .result
            .ok_or_else(|| RpcException::transport("No result returned".to_string()))
    }

    async fn rpc_send_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcException> {
        let result = self.rpc_send_async(method, params).await?;
        serde_json::from_value(result)
            .map_err(|e| RpcException::parse(format!("{method}: unexpected result shape: {e}")))
    }

    /// Returns an object with the requested rendering options
    pub async fn get_object(
        &self,
        object_id: &str,
        options: &RpcObjectOptions,
    ) -> Result<RpcObjectResponse, RpcException> {
        self.rpc_send_typed("sui_getObject", vec![json!(object_id), json!(options)])
            .await
    }

    /// Returns one page of coins of `coin_type` owned by `owner`
    pub async fn get_coins(
        &self,
        owner: &str,
        coin_type: &str,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<RpcCoinPage, RpcException> {
        self.rpc_send_typed(
            "suix_getCoins",
            vec![json!(owner), json!(coin_type), json!(cursor), json!(limit)],
        )
        .await
    }

    /// Returns an executed transaction block by digest
    pub async fn get_transaction_block(
        &self,
        digest: &str,
        options: &RpcTransactionBlockOptions,
    ) -> Result<RpcTransactionBlock, RpcException> {
        self.rpc_send_typed("sui_getTransactionBlock", vec![json!(digest), json!(options)])
            .await
    }
}
