//! End-to-end tests of the call pipeline against a stub node.

mod common;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bitcoind_rpc::{ClientError, Endpoint, RpcClient};
use common::{dead_addr, endpoint_for, error_reply, init_tracing, result_reply, spawn_stub_node};
use url::Url;

#[test]
fn block_count_round_trip() {
    init_tracing();
    let addr = spawn_stub_node(|request| {
        assert_eq!(request["jsonrpc"], "2.0");
        assert_eq!(request["method"], "getblockcount");
        assert!(request["params"].is_null());
        result_reply(request, serde_json::json!(125000))
    });
    let client = RpcClient::new(endpoint_for(addr));
    assert_eq!(client.get_block_count().unwrap(), 125000);
}

#[test]
fn repeated_queries_return_equal_results() {
    let addr = spawn_stub_node(|request| result_reply(request, serde_json::json!(125000)));
    let client = RpcClient::new(endpoint_for(addr));
    assert_eq!(
        client.get_block_count().unwrap(),
        client.get_block_count().unwrap()
    );
}

#[test]
fn concurrent_callers_get_their_own_replies() {
    // The stub derives each result from the request's first parameter, so
    // any correlation cross-talk between the two threads would surface as
    // a wrong value on one of them.
    let addr = spawn_stub_node(|request| {
        let height = request["params"][0].as_i64().unwrap();
        result_reply(request, serde_json::json!(format!("hash-at-{height}")))
    });
    let client = Arc::new(RpcClient::new(endpoint_for(addr)));

    let mut workers = Vec::new();
    for height in [111i64, 222] {
        let client = Arc::clone(&client);
        workers.push(thread::spawn(move || {
            for _ in 0..10 {
                let hash = client.get_block_hash(height).unwrap();
                assert_eq!(hash, format!("hash-at-{height}"));
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }
}

#[test]
fn node_error_surfaces_verbatim_from_designated_status() {
    // bitcoind carries RPC-level errors on HTTP 500; that reply must parse
    // as an application error, not a transport failure.
    let addr = spawn_stub_node(|request| error_reply(request, -8, "Block not found"));
    let client = RpcClient::new(endpoint_for(addr));
    match client.get_block("deadbeef") {
        Err(ClientError::Rpc { code, message, .. }) => {
            assert_eq!(code, -8);
            assert!(message.contains("Block not found"));
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[test]
fn forged_correlation_id_is_a_protocol_error() {
    // Well-formed result, wrong id: the id check runs before anything else
    // is believed.
    let addr = spawn_stub_node(|_| {
        (
            200,
            r#"{"id":"forged","result":125000,"error":null}"#.to_string(),
        )
    });
    let client = RpcClient::new(endpoint_for(addr));
    match client.get_block_count() {
        Err(ClientError::Protocol { message }) => assert!(message.contains("id mismatch")),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn empty_body_is_a_protocol_error() {
    let addr = spawn_stub_node(|_| (200, String::new()));
    let client = RpcClient::new(endpoint_for(addr));
    match client.get_block_count() {
        Err(ClientError::Protocol { message }) => assert!(message.contains("empty response")),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_protocol_error() {
    let addr = spawn_stub_node(|_| (200, "{not json".to_string()));
    let client = RpcClient::new(endpoint_for(addr));
    assert!(matches!(
        client.get_block_count(),
        Err(ClientError::Protocol { .. })
    ));
}

#[test]
fn scalar_result_of_wrong_type_is_a_type_mismatch() {
    let addr = spawn_stub_node(|request| result_reply(request, serde_json::json!("not-a-count")));
    let client = RpcClient::new(endpoint_for(addr));
    assert!(matches!(
        client.get_block_count(),
        Err(ClientError::TypeMismatch { .. })
    ));
}

#[test]
fn null_result_maps_to_default() {
    let addr = spawn_stub_node(|request| result_reply(request, serde_json::Value::Null));
    let client = RpcClient::new(endpoint_for(addr));
    assert_eq!(client.submit_block("00ff").unwrap(), "");
}

#[test]
fn non_designated_status_is_a_transport_error_naming_the_code() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(403)
        .with_body("Forbidden")
        .create();

    let endpoint = Endpoint::from_url(Url::parse(&server.url()).unwrap(), "u", "p")
        .with_timeout(Duration::from_secs(5));
    let client = RpcClient::new(endpoint);
    match client.get_block_count() {
        Err(ClientError::Transport { message, .. }) => assert!(message.contains("403")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let endpoint = endpoint_for(dead_addr()).with_timeout(Duration::from_secs(2));
    let client = RpcClient::new(endpoint);
    assert!(matches!(
        client.get_block_count(),
        Err(ClientError::Transport { .. })
    ));
}

#[test]
fn unsupported_methods_fail_without_touching_the_wire() {
    // A dead endpoint proves the sentinel is raised client-side.
    let client = RpcClient::new(endpoint_for(dead_addr()));
    assert!(matches!(
        client.create_raw_transaction(),
        Err(ClientError::NotImplemented { .. })
    ));
    assert!(matches!(
        client.sign_raw_transaction(),
        Err(ClientError::NotImplemented { .. })
    ));
}

#[test]
fn typed_record_round_trip() {
    let addr = spawn_stub_node(|request| {
        assert_eq!(request["method"], "getmininginfo");
        result_reply(
            request,
            serde_json::json!({
                "blocks": 125000,
                "difficulty": 12345678.9,
                "errors": "",
                "generate": false,
                "genproclimit": -1,
                "hashespersec": 0,
                "pooledtx": 43,
                "testnet": false
            }),
        )
    });
    let client = RpcClient::new(endpoint_for(addr));
    let info = client.get_mining_info().unwrap();
    assert_eq!(info.blocks, 125000);
    assert_eq!(info.pooled_tx, 43);
    assert_eq!(info.gen_proc_limit, -1);
    // Fields the stub omitted fall back to their defaults.
    assert_eq!(info.current_block_size, 0);
    assert!(!info.generate);
}
