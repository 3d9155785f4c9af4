// Copyright (C) 2025 The Hubs-RS Project.
//
// submitter.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction submitter module.
//!
//! Drives one payload through sign, broadcast and confirm. A submission is
//! never retried: after a timeout the outcome is unknown and the caller must
//! re-fetch before acting again.

use crate::error::{HubError, HubResult};
use crate::hub::HubId;
use crate::signer::{ExecutionStatus, LedgerEvent, SignerError, TransactionSigner};
use crate::transaction::TransactionPayload;
use hubs_config::SubmissionConfig;
use hubs_rpc_client::{RpcClient, RpcTransactionBlockOptions};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{debug, info, warn};

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub digest: String,
    pub events: Vec<LedgerEvent>,
}

impl SubmissionReceipt {
    /// Winning hub announced by `finalize_voting` in its first event
    pub fn winner_hub_id(&self) -> Option<HubId> {
        let event = self.events.first()?;
        hub_id_in(&event.parsed_json).map(HubId)
    }
}

fn hub_id_in(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        Value::Object(map) => ["value", "hub_id", "winner_hub_id"]
            .iter()
            .find_map(|key| map.get(*key).and_then(hub_id_in)),
        _ => None,
    }
}

/// Set of action keys with a submission in flight
#[derive(Debug, Default)]
struct ActionGate {
    active: Mutex<HashSet<String>>,
}

/// Holds an action key until dropped
struct ActionPermit {
    gate: Arc<ActionGate>,
    key: String,
}

impl ActionGate {
    fn acquire(gate: &Arc<ActionGate>, key: String) -> HubResult<ActionPermit> {
        if !gate.active.lock().insert(key.clone()) {
            return Err(HubError::ActionInFlight);
        }
        Ok(ActionPermit {
            gate: Arc::clone(gate),
            key,
        })
    }

    fn is_active(&self, key: &str) -> bool {
        self.active.lock().contains(key)
    }
}

impl Drop for ActionPermit {
    fn drop(&mut self) {
        self.gate.active.lock().remove(&self.key);
    }
}

/// Submits payloads through a [`TransactionSigner`]
#[derive(Debug, Clone)]
pub struct TransactionSubmitter {
    rpc_client: Arc<RpcClient>,
    config: SubmissionConfig,
    gate: Arc<ActionGate>,
}

impl TransactionSubmitter {
    pub fn new(rpc_client: Arc<RpcClient>, config: SubmissionConfig) -> Self {
        Self {
            rpc_client,
            config,
            gate: Arc::new(ActionGate::default()),
        }
    }

    /// Whether a submission for `action_key` is currently running
    pub fn is_in_flight(&self, action_key: &str) -> bool {
        self.gate.is_active(action_key)
    }

    pub async fn submit(
        &self,
        payload: &TransactionPayload,
        signer: &dyn TransactionSigner,
    ) -> HubResult<SubmissionReceipt> {
        let action = payload.action_key();
        let _permit = ActionGate::acquire(&self.gate, action.clone())?;
        let deadline = Instant::now() + self.config.timeout();

        debug!(
            target: "hubs::submit",
            %action,
            target_fn = %payload.call.target,
            "submitting"
        );

        let response = match timeout_at(deadline, signer.sign_and_execute(payload)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(Self::map_signer_error(&action, err)),
            Err(_) => {
                warn!(target: "hubs::submit", %action, "signer did not answer in time");
                return Err(HubError::SubmissionTimeout { digest: None });
            }
        };

        match response.status {
            Some(ExecutionStatus::Success) => {
                info!(
                    target: "hubs::submit",
                    %action,
                    digest = %response.digest,
                    "transaction executed"
                );
                Ok(SubmissionReceipt {
                    digest: response.digest,
                    events: response.events,
                })
            }
            Some(ExecutionStatus::Failure(error)) => {
                warn!(
                    target: "hubs::submit",
                    digest = %response.digest,
                    %error,
                    "transaction failed on ledger"
                );
                Err(HubError::TransactionRejected(error))
            }
            None if self.config.confirm => {
                self.confirm(response.digest, response.events, deadline)
                    .await
            }
            None => {
                info!(
                    target: "hubs::submit",
                    %action,
                    digest = %response.digest,
                    "transaction broadcast"
                );
                Ok(SubmissionReceipt {
                    digest: response.digest,
                    events: response.events,
                })
            }
        }
    }

    fn map_signer_error(action: &str, err: SignerError) -> HubError {
        warn!(target: "hubs::submit", %action, error = %err, "submission failed");
        match err {
            SignerError::Declined(message) | SignerError::Broadcast(message) => {
                HubError::TransactionRejected(message)
            }
            SignerError::Unconfirmed { digest } => HubError::SubmissionTimeout { digest },
        }
    }

    /// Waits for the transaction to show up on the node. The whole wait,
    /// including any stalled poll, ends at `deadline`.
    async fn confirm(
        &self,
        digest: String,
        events: Vec<LedgerEvent>,
        deadline: Instant,
    ) -> HubResult<SubmissionReceipt> {
        match timeout_at(deadline, self.poll_until_executed(&digest, events)).await {
            Ok(Ok(events)) => {
                info!(target: "hubs::submit", %digest, "transaction confirmed");
                Ok(SubmissionReceipt { digest, events })
            }
            Ok(Err(err)) => Err(err),
            Err(_) => {
                warn!(target: "hubs::submit", %digest, "confirmation timed out");
                Err(HubError::SubmissionTimeout {
                    digest: Some(digest),
                })
            }
        }
    }

    /// Polls every `poll_interval` until the node reports effects.
    async fn poll_until_executed(
        &self,
        digest: &str,
        events: Vec<LedgerEvent>,
    ) -> HubResult<Vec<LedgerEvent>> {
        let options = RpcTransactionBlockOptions::effects_and_events();

        loop {
            match self.rpc_client.get_transaction_block(digest, &options).await {
                Ok(block) => {
                    if let Some(effects) = block.effects {
                        if !effects.status.is_success() {
                            let error = effects
                                .status
                                .error
                                .unwrap_or_else(|| "execution failed".to_string());
                            warn!(
                                target: "hubs::submit",
                                %digest,
                                %error,
                                "transaction failed on ledger"
                            );
                            return Err(HubError::TransactionRejected(error));
                        }

                        if !events.is_empty() {
                            return Ok(events);
                        }
                        return Ok(block
                            .events
                            .unwrap_or_default()
                            .into_iter()
                            .map(LedgerEvent::from)
                            .collect());
                    }
                }
                Err(err) => {
                    debug!(
                        target: "hubs::submit",
                        %digest,
                        error = %err,
                        "transaction not visible yet"
                    );
                }
            }

            sleep(self.config.poll_interval()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt(parsed_json: Value) -> SubmissionReceipt {
        SubmissionReceipt {
            digest: "5ZqDz".to_string(),
            events: vec![LedgerEvent {
                event_type: "0x2a::hub_registry::VotingFinalized".to_string(),
                parsed_json,
            }],
        }
    }

    #[test]
    fn winner_is_read_from_first_event() {
        assert_eq!(receipt(json!({"value": "4"})).winner_hub_id(), Some(HubId(4)));
        assert_eq!(receipt(json!({"winner_hub_id": 7})).winner_hub_id(), Some(HubId(7)));
        assert_eq!(receipt(json!(2)).winner_hub_id(), Some(HubId(2)));
        assert_eq!(receipt(json!({"other": 1})).winner_hub_id(), None);

        let empty = SubmissionReceipt {
            digest: "5ZqDz".to_string(),
            events: vec![],
        };
        assert_eq!(empty.winner_hub_id(), None);
    }

    #[test]
    fn gate_releases_key_on_drop() {
        let gate = Arc::new(ActionGate::default());
        let permit = ActionGate::acquire(&gate, "fund_hub:1".to_string()).unwrap();
        assert!(matches!(
            ActionGate::acquire(&gate, "fund_hub:1".to_string()),
            Err(HubError::ActionInFlight)
        ));
        assert!(ActionGate::acquire(&gate, "fund_hub:2".to_string()).is_ok());
        drop(permit);
        assert!(!gate.is_active("fund_hub:1"));
        assert!(ActionGate::acquire(&gate, "fund_hub:1".to_string()).is_ok());
    }
}
