// Copyright (C) 2025 The Hubs-RS Project.
//
// rpc_transaction_block.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which parts of a transaction block the node should render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionBlockOptions {
    pub show_input: bool,
    pub show_raw_input: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
}

impl RpcTransactionBlockOptions {
    /// Effects and events, enough to confirm a submission
    pub fn effects_and_events() -> Self {
        Self {
            show_effects: true,
            show_events: true,
            ..Self::default()
        }
    }
}

/// Result of `sui_getTransactionBlock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionBlock {
    pub digest: String,

    #[serde(default)]
    pub effects: Option<RpcTransactionEffects>,

    #[serde(default)]
    pub events: Option<Vec<RpcEvent>>,

    #[serde(default, with = "super::u64_string::option")]
    pub timestamp_ms: Option<u64>,

    #[serde(default, with = "super::u64_string::option")]
    pub checkpoint: Option<u64>,
}

/// Subset of transaction effects this client reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionEffects {
    pub status: RpcExecutionStatus,
}

/// Execution outcome reported in effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcExecutionStatus {
    /// `success` or `failure`
    pub status: String,

    #[serde(default)]
    pub error: Option<String>,
}

impl RpcExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// Event emitted by a Move call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEvent {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub package_id: Option<String>,

    #[serde(default)]
    pub transaction_module: Option<String>,

    #[serde(default)]
    pub sender: Option<String>,

    #[serde(rename = "type", default)]
    pub event_type: String,

    #[serde(default)]
    pub parsed_json: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_block_with_failure_status() {
        let block: RpcTransactionBlock = serde_json::from_value(json!({
            "digest": "5ZqDz",
            "effects": {
                "status": {"status": "failure", "error": "MoveAbort(.., 3) in command 0"},
                "gasUsed": {"computationCost": "1000"}
            },
            "events": [],
            "timestampMs": "1700000000000",
            "checkpoint": "12"
        }))
        .unwrap();

        let status = block.effects.unwrap().status;
        assert!(!status.is_success());
        assert_eq!(status.error.as_deref(), Some("MoveAbort(.., 3) in command 0"));
        assert_eq!(block.timestamp_ms, Some(1_700_000_000_000));
        assert_eq!(block.checkpoint, Some(12));
    }

    #[test]
    fn event_keeps_parsed_json() {
        let event: RpcEvent = serde_json::from_value(json!({
            "type": "0x2a::hub_registry::VotingFinalized",
            "parsedJson": {"winner_hub_id": "3"}
        }))
        .unwrap();
        assert_eq!(event.parsed_json["winner_hub_id"], json!("3"));
        assert!(event.sender.is_none());
    }
}
