//! RPC client tests against a mocked fullnode
//!
//! Each test stands up a `mockito` server that answers JSON-RPC calls the
//! way a ledger fullnode does, including its string-encoded integers.

use hubs_rpc_client::{RpcClient, RpcObjectOptions, RpcTransactionBlockOptions};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> RpcClient {
    RpcClient::new(server.url().parse().unwrap()).unwrap()
}

#[tokio::test]
async fn test_get_object_sends_show_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "sui_getObject",
            "params": ["0x3b", serde_json::to_value(RpcObjectOptions::with_content()).unwrap()]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "data": {
                        "objectId": "0x3b",
                        "version": "7",
                        "content": {
                            "dataType": "moveObject",
                            "type": "0x2a::hub_registry::Registry",
                            "hasPublicTransfer": false,
                            "fields": {"hubs": [], "min_propose": "10", "min_vote": "1"}
                        }
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .get_object("0x3b", &RpcObjectOptions::with_content())
        .await
        .unwrap();

    mock.assert_async().await;
    let fields = response.move_fields().unwrap();
    assert_eq!(fields["min_propose"], json!("10"));
    assert!(fields["hubs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_coins_forwards_cursor_and_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "suix_getCoins",
            "params": ["0xa1", "0x5c::lit_token::LIT_TOKEN", "0xcursor", 50]
        })))
        .with_status(200)
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "data": [{
                        "coinType": "0x5c::lit_token::LIT_TOKEN",
                        "coinObjectId": "0x9",
                        "balance": "40"
                    }],
                    "nextCursor": null,
                    "hasNextPage": false
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client
        .get_coins("0xa1", "0x5c::lit_token::LIT_TOKEN", Some("0xcursor"), Some(50))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].balance, 40);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_rpc_error_is_surfaced_with_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32602, "message": "Could not find the referenced transaction"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_transaction_block("5ZqDz", &RpcTransactionBlockOptions::effects_and_events())
        .await
        .unwrap_err();

    assert_eq!(err.code, -32602);
    assert!(err.message.contains("Could not find"));
}

#[tokio::test]
async fn test_http_failure_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_object("0x3b", &RpcObjectOptions::with_content())
        .await
        .unwrap_err();

    assert_eq!(err.code, hubs_rpc_client::INTERNAL_ERROR);
    assert!(err.message.contains("502"));
}

#[tokio::test]
async fn test_unexpected_result_shape_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "not a page"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_coins("0xa1", "0x5c::lit_token::LIT_TOKEN", None, None)
        .await
        .unwrap_err();

    assert!(err.is_parse_error());
    assert!(err.message.starts_with("suix_getCoins"));
}

#[test]
fn test_unreachable_endpoint_is_a_transport_error() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = RpcClient::new("http://127.0.0.1:1".parse().unwrap()).unwrap();
    let err = runtime
        .block_on(client.rpc_send_async("sui_getChainIdentifier", vec![]))
        .unwrap_err();
    assert_eq!(err.code, hubs_rpc_client::INTERNAL_ERROR);
    assert!(err.message.starts_with("HTTP error"));
}
