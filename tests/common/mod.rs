//! Scripted node shared by integration tests.

#![allow(dead_code)]

use fil_rpc_fixtures::rpc::{RpcMethod, RpcResponse, RpcTransport};
use fil_rpc_fixtures::utils::RpcError;
use serde_json::{json, Value};
use std::cell::RefCell;

type Handler = Box<dyn Fn(&RpcMethod) -> Result<Value, RpcError>>;

/// Answers each call with the body returned by `handler` and records the
/// method names in call order.
pub struct MockNode {
    handler: Handler,
    calls: RefCell<Vec<String>>,
}

impl MockNode {
    pub fn new(handler: impl Fn(&RpcMethod) -> Result<Value, RpcError> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == name).count()
    }
}

impl RpcTransport for MockNode {
    fn send(&self, method: &RpcMethod) -> Result<RpcResponse, RpcError> {
        self.calls.borrow_mut().push(method.name.clone());
        let body = (self.handler)(method)?;
        Ok(RpcResponse { status: 200, body })
    }
}

pub fn result(value: Value) -> Result<Value, RpcError> {
    Ok(json!({"jsonrpc": "2.0", "id": 1, "result": value}))
}

pub fn rpc_error(code: i64, message: &str) -> Result<Value, RpcError> {
    Ok(json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}}))
}

/// A transport-level failure, as produced by an unparsable body
pub fn transport_failure() -> Result<Value, RpcError> {
    let err = serde_json::from_str::<Value>("<html>bad gateway</html>").unwrap_err();
    Err(RpcError::InvalidJson(err))
}

/// Responses of a healthy mainnet node
pub fn mainnet_response(method: &RpcMethod) -> Result<Value, RpcError> {
    match method.name.as_str() {
        "Filecoin.StateNetworkName" => result(json!("mainnet")),
        "eth_getBlockByNumber" => result(json!({
            "transactions": [{"from": "0xabc", "hash": "0x123"}],
            "hash": "0xblockHash",
        })),
        "Filecoin.ChainHead" => result(json!({
            "Height": 1000,
            "Cids": [{"/": "bafy..."}],
        })),
        "eth_blockNumber" => result(json!("0x100")),
        "Filecoin.ChainGetParentMessages" => result(json!([
            {"Message": {"From": "t1abc"}, "Cid": {"/": "bafymsgcid"}},
        ])),
        "Filecoin.StateLookupID" => result(json!("f0123")),
        "Filecoin.MsigGetAvailableBalance" => result(json!("1000")),
        other => panic!("Unhandled RPC method: {}", other),
    }
}
