//! Transaction submitter tests with a scripted signer

mod common;

use common::*;
use hubs_registry::{
    ExecutionResponse, ExecutionStatus, HubError, HubId, SignerError, TransactionBuilder,
    TransactionSubmitter,
};
use hubs_rpc_client::{RpcClient, RpcTransactionBlockOptions};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

fn builder(server: &mockito::ServerGuard) -> TransactionBuilder {
    TransactionBuilder::new(&config_for(server, fast_submission(false)).contract).unwrap()
}

#[tokio::test]
async fn test_submit_returns_digest_without_network_calls() {
    let mut server = mockito::Server::new_async().await;
    let untouched = server.mock("POST", "/").expect(0).create_async().await;

    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(true));
    let signer = ScriptedSigner::executed("5ZqDz", vec![]);
    let payload = builder(&server).fund_hub(HubId(1), 10).unwrap();

    let receipt = submitter.submit(&payload, &signer).await.unwrap();

    assert_eq!(receipt.digest, "5ZqDz");
    assert_eq!(signer.calls(), 1);
    untouched.assert_async().await;
}

#[tokio::test]
async fn test_signer_errors_are_mapped() {
    let server = mockito::Server::new_async().await;
    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(false));
    let payload = builder(&server).finalize_voting().unwrap();

    let declined = ScriptedSigner::answering(Err(SignerError::Declined("closed popup".into())));
    assert_eq!(
        submitter.submit(&payload, &declined).await.unwrap_err(),
        HubError::TransactionRejected("closed popup".into())
    );

    let unconfirmed = ScriptedSigner::answering(Err(SignerError::Unconfirmed {
        digest: Some("9xQ".into()),
    }));
    assert_eq!(
        submitter.submit(&payload, &unconfirmed).await.unwrap_err(),
        HubError::SubmissionTimeout {
            digest: Some("9xQ".into())
        }
    );

    let failed = ScriptedSigner::answering(Ok(ExecutionResponse {
        digest: "7Ab".into(),
        events: vec![],
        status: Some(ExecutionStatus::Failure("MoveAbort(3)".into())),
    }));
    assert_eq!(
        submitter.submit(&payload, &failed).await.unwrap_err(),
        HubError::TransactionRejected("MoveAbort(3)".into())
    );
}

#[tokio::test]
async fn test_slow_signer_times_out() {
    let server = mockito::Server::new_async().await;
    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(false));
    let payload = builder(&server).finalize_voting().unwrap();
    let signer = ScriptedSigner::executed("late", vec![]).with_delay(Duration::from_secs(2));

    let err = submitter.submit(&payload, &signer).await.unwrap_err();
    assert_eq!(err, HubError::SubmissionTimeout { digest: None });
    assert!(!submitter.is_in_flight(&payload.action_key()));
}

#[tokio::test]
async fn test_same_action_cannot_run_twice_concurrently() {
    let server = mockito::Server::new_async().await;
    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(false));
    let builder = builder(&server);
    let vote = builder.vote_for_hub(HubId(3), 20).unwrap();
    let other_vote = builder.vote_for_hub(HubId(4), 20).unwrap();
    let signer = ScriptedSigner::executed("5ZqDz", vec![]).with_delay(Duration::from_millis(50));

    let (first, second, third) = tokio::join!(
        submitter.submit(&vote, &signer),
        submitter.submit(&vote, &signer),
        submitter.submit(&other_vote, &signer),
    );

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), HubError::ActionInFlight);
    assert!(third.is_ok());
    assert_eq!(signer.calls(), 2);

    // released once the first submission finished
    assert!(submitter.submit(&vote, &signer).await.is_ok());
}

#[tokio::test]
async fn test_confirmation_reads_ledger_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "sui_getTransactionBlock",
            "params": [
                "4Kp",
                serde_json::to_value(RpcTransactionBlockOptions::effects_and_events()).unwrap()
            ]
        })))
        .with_status(200)
        .with_body(rpc_result(json!({
            "digest": "4Kp",
            "effects": {"status": {"status": "failure", "error": "MoveAbort(EAlreadyVoted)"}}
        })))
        .create_async()
        .await;

    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(true));
    let payload = builder(&server).vote_for_hub(HubId(3), 20).unwrap();
    let signer = ScriptedSigner::broadcast_only("4Kp");

    let err = submitter.submit(&payload, &signer).await.unwrap_err();
    mock.assert_async().await;
    assert_eq!(err, HubError::TransactionRejected("MoveAbort(EAlreadyVoted)".into()));
}

#[tokio::test]
async fn test_confirmation_collects_events() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "sui_getTransactionBlock"})))
        .with_status(200)
        .with_body(rpc_result(json!({
            "digest": "4Kp",
            "effects": {"status": {"status": "success"}},
            "events": [{
                "type": format!("{PACKAGE_ID}::hub_registry::VotingFinalized"),
                "parsedJson": {"value": "2"}
            }]
        })))
        .create_async()
        .await;

    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(true));
    let payload = builder(&server).finalize_voting().unwrap();
    let receipt = submitter
        .submit(&payload, &ScriptedSigner::broadcast_only("4Kp"))
        .await
        .unwrap();

    assert_eq!(receipt.digest, "4Kp");
    assert_eq!(receipt.winner_hub_id(), Some(HubId(2)));
}

#[tokio::test]
async fn test_unseen_transaction_times_out_with_digest() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(rpc_error(-32602, "Could not find the referenced transaction"))
        .create_async()
        .await;

    let submitter = TransactionSubmitter::new(rpc_for(&server), fast_submission(true));
    let payload = builder(&server).finalize_voting().unwrap();
    let err = submitter
        .submit(&payload, &ScriptedSigner::broadcast_only("4Kp"))
        .await
        .unwrap_err();

    assert_eq!(err, HubError::SubmissionTimeout { digest: Some("4Kp".into()) });
}

#[tokio::test]
async fn test_stalled_node_cannot_stretch_confirmation_past_timeout() {
    // accepts connections and never writes a response
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let stalled = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let rpc = Arc::new(RpcClient::new(format!("http://{address}").parse().unwrap()).unwrap());
    let submitter = TransactionSubmitter::new(rpc, fast_submission(true));
    let signer = ScriptedSigner::broadcast_only("7Hq");
    let payload = TransactionBuilder::new(&contract_config())
        .unwrap()
        .fund_hub(HubId(2), 10)
        .unwrap();

    let started = Instant::now();
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        submitter.submit(&payload, &signer),
    )
    .await
    .expect("submit must return on its own deadline");

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(
        result,
        Err(HubError::SubmissionTimeout {
            digest: Some("7Hq".to_string())
        })
    );
    assert!(!submitter.is_in_flight(&payload.action_key()));

    stalled.abort();
}
