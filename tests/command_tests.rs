mod common;

use common::{result, rpc_error, transport_failure, MockNode};
use fil_rpc_fixtures::commands::{
    execute_build, replay_requests, select_methods, validate_rpc_args, BuildArgs, ReplayOutcome,
};
use fil_rpc_fixtures::discovery::{CidLink, RpcContext};
use fil_rpc_fixtures::output::{read_json, write_json, Fixture};
use fil_rpc_fixtures::rpc::RpcMethod;
use serde_json::json;

fn sample_context() -> RpcContext {
    RpcContext {
        eth_address: "0xabc".to_string(),
        eth_block_number: "0x100".to_string(),
        eth_block_hash: "0xblockHash".to_string(),
        eth_transaction_hash: "0x123".to_string(),
        eth_zero_address: "0x0000000000000000000000000000000000000000".to_string(),
        filecoin_address: "t1abc".to_string(),
        filecoin_miner_id: "f01000".to_string(),
        filecoin_actor_id: "f0123".to_string(),
        filecoin_tipset_height: 1000,
        filecoin_tipset_key: vec![CidLink::new("bafy...")],
        filecoin_message_cid: CidLink::new("bafymsgcid"),
        filecoin_multisig_address: "f024757".to_string(),
        eth_contract_address: "0x0c1d86d34e469770339b53613f3a2343accd62cb".to_string(),
        eth_contract_call_data:
            "0xf8b2cb4f000000000000000000000000cbff24ded1ce6b53712078759233ac8f91ea71b6".to_string(),
    }
}

#[test]
fn test_validate_rpc_args() {
    assert!(validate_rpc_args("http://localhost:1234/rpc/v1", None).is_ok());
    assert!(validate_rpc_args("", None).is_err());
    assert!(validate_rpc_args("localhost:1234", None).is_err());
    assert!(validate_rpc_args("http://localhost:1234/rpc/v1", Some(0)).is_err());
}

#[test]
fn test_build_from_context_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let context_path = temp_dir.path().join("context.json");
    let fixture_path = temp_dir.path().join("out/fixture.json");

    write_json(&sample_context(), &context_path).unwrap();

    let fixture = execute_build(BuildArgs {
        context_file: Some(context_path),
        output: fixture_path.clone(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(fixture.requests.len(), 44);
    assert_eq!(fixture.rpc_url, "");

    let loaded: Fixture = read_json(&fixture_path).unwrap();
    assert_eq!(loaded, fixture);
    assert_eq!(loaded.context, sample_context());
}

#[test]
fn test_build_with_missing_context_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = execute_build(BuildArgs {
        context_file: Some(temp_dir.path().join("missing.json")),
        output: temp_dir.path().join("fixture.json"),
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_replay_classifies_outcomes() {
    let node = MockNode::new(|method| match method.name.as_str() {
        "eth_chainId" => result(json!("0x13a")),
        "eth_syncing" => result(json!(false)),
        "Filecoin.ChainHead" => rpc_error(-32601, "method not found"),
        _ => transport_failure(),
    });

    let methods = vec![
        RpcMethod::new("eth_chainId", vec![]),
        RpcMethod::new("eth_syncing", vec![]),
        RpcMethod::new("Filecoin.ChainHead", vec![]),
        RpcMethod::new("net_version", vec![]),
    ];

    let report = replay_requests(&node, &methods);

    assert_eq!(node.calls(), vec!["eth_chainId", "eth_syncing", "Filecoin.ChainHead", "net_version"]);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.rpc_errors(), 1);
    assert_eq!(report.transport_failures(), 1);
    assert!(!report.all_succeeded());
    assert_eq!(report.records[2].status, Some(200));
    assert_eq!(report.records[3].status, None);
    assert!(matches!(
        &report.records[2].outcome,
        ReplayOutcome::RpcError(err) if err["code"] == -32601
    ));
}

#[test]
fn test_select_methods_filters_and_rejects_unknown() {
    let fixture = Fixture::new("http://localhost:1234/rpc/v1", sample_context());

    let all = select_methods(&fixture, &[]).unwrap();
    assert_eq!(all.len(), 44);

    let only = select_methods(&fixture, &["eth_call".to_string(), "eth_chainId".to_string()]).unwrap();
    let names: Vec<&str> = only.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["eth_call", "eth_chainId"]);

    assert!(select_methods(&fixture, &["eth_bogus".to_string()]).is_err());
}
