//! Shared fixtures for registry integration tests
//!
//! Provides a scripted signer and helpers that render registry objects and
//! coin pages the way a fullnode does.

#![allow(dead_code)]

use async_trait::async_trait;
use hubs_config::{ContractConfig, HubsConfig, SubmissionConfig};
use hubs_registry::{
    Address, ExecutionResponse, ExecutionStatus, LedgerEvent, SignerError, TransactionPayload,
    TransactionSigner,
};
use hubs_rpc_client::RpcClient;
use mockito::{Matcher, Mock, ServerGuard};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

pub const PACKAGE_ID: &str = "0x2a";
pub const REGISTRY_ID: &str = "0x3b";
pub const COIN_TYPE: &str = "0x5c::lit_token::LIT_TOKEN";
pub const SIGNER_ADDRESS: &str = "0xa11ce";

pub fn config_for(server: &ServerGuard, submission: SubmissionConfig) -> HubsConfig {
    HubsConfig {
        rpc_url: Some(server.url()),
        contract: contract_config(),
        submission,
        ..HubsConfig::default()
    }
}

pub fn contract_config() -> ContractConfig {
    ContractConfig {
        package_id: PACKAGE_ID.to_string(),
        module_name: "hub_registry".to_string(),
        registry_id: REGISTRY_ID.to_string(),
        token_coin_type: COIN_TYPE.to_string(),
        gas_budget: 10_000_000,
    }
}

pub fn fast_submission(confirm: bool) -> SubmissionConfig {
    SubmissionConfig {
        timeout_ms: 200,
        poll_interval_ms: 20,
        confirm,
    }
}

pub fn rpc_for(server: &ServerGuard) -> Arc<RpcClient> {
    Arc::new(RpcClient::new(server.url().parse().unwrap()).unwrap())
}

/// Hub element as rendered inside the registry's `hubs` vector
pub fn hub_json(hub_id: u64, funding_goal: u64, funds_raised: u64, voters: &[&str]) -> Value {
    json!({
        "type": format!("{PACKAGE_ID}::hub_registry::Hub"),
        "fields": {
            "id": {"id": format!("0x{:x}", 0x100 + hub_id)},
            "hub_id": hub_id.to_string(),
            "name": format!("Hub {hub_id}").into_bytes(),
            "city": "Lagos".as_bytes(),
            "contact": "ops@example.org".as_bytes(),
            "community_image": [],
            "latitude": "6524400",
            "longitude": "3379200",
            "funding_goal": funding_goal.to_string(),
            "funds_raised": funds_raised.to_string(),
            "vote_count": voters.len().to_string(),
            "voters": voters,
        }
    })
}

pub fn registry_fields(hubs: Vec<Value>) -> Value {
    json!({
        "id": {"id": REGISTRY_ID},
        "hubs": hubs,
        "min_propose": "100",
        "min_vote": "10",
        "voting_start": "1000",
        "voting_end": "2000",
        "owner": SIGNER_ADDRESS,
    })
}

pub fn rpc_result(result: Value) -> String {
    json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
}

pub fn rpc_error(code: i64, message: &str) -> String {
    json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}}).to_string()
}

/// `sui_getObject` result carrying the registry as a Move object
pub fn registry_response(fields: Value) -> String {
    rpc_result(json!({
        "data": {
            "objectId": REGISTRY_ID,
            "version": "12",
            "content": {
                "dataType": "moveObject",
                "type": format!("{PACKAGE_ID}::hub_registry::Registry"),
                "hasPublicTransfer": false,
                "fields": fields,
            }
        }
    }))
}

pub async fn mock_registry(server: &mut ServerGuard, fields: Value) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "sui_getObject"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(registry_response(fields))
        .create_async()
        .await
}

pub async fn mock_balance(server: &mut ServerGuard, balances: &[u64]) -> Mock {
    let coins: Vec<Value> = balances
        .iter()
        .enumerate()
        .map(|(i, balance)| {
            json!({
                "coinType": COIN_TYPE,
                "coinObjectId": format!("0x{:x}", 0x900 + i),
                "balance": balance.to_string()
            })
        })
        .collect();
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "suix_getCoins"})))
        .with_status(200)
        .with_body(rpc_result(json!({"data": coins, "nextCursor": null, "hasNextPage": false})))
        .create_async()
        .await
}

/// Signer that replays one scripted answer and records what it was asked
pub struct ScriptedSigner {
    address: Address,
    answer: Result<ExecutionResponse, SignerError>,
    delay: Option<Duration>,
    pub seen: Mutex<Vec<TransactionPayload>>,
}

impl ScriptedSigner {
    pub fn executed(digest: &str, events: Vec<Value>) -> Self {
        Self::answering(Ok(ExecutionResponse {
            digest: digest.to_string(),
            events: events
                .into_iter()
                .map(|parsed_json| LedgerEvent {
                    event_type: format!("{PACKAGE_ID}::hub_registry::Event"),
                    parsed_json,
                })
                .collect(),
            status: Some(ExecutionStatus::Success),
        }))
    }

    pub fn broadcast_only(digest: &str) -> Self {
        Self::answering(Ok(ExecutionResponse {
            digest: digest.to_string(),
            events: Vec::new(),
            status: None,
        }))
    }

    pub fn answering(answer: Result<ExecutionResponse, SignerError>) -> Self {
        Self {
            address: SIGNER_ADDRESS.parse().unwrap(),
            answer,
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }
}

#[async_trait]
impl TransactionSigner for ScriptedSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_and_execute(
        &self,
        payload: &TransactionPayload,
    ) -> Result<ExecutionResponse, SignerError> {
        self.seen.lock().push(payload.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer.clone()
    }
}
