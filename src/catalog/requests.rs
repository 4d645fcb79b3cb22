//! Fixed catalog of Ethereum and Filecoin requests parameterized by a context.

use crate::discovery::RpcContext;
use crate::rpc::RpcMethod;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Positional parameters for one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParams {
    pub params: Vec<Value>,
}

/// Method name to parameters, sorted by method name
pub type RpcMethodMap = BTreeMap<String, RequestParams>;

/// Build the request catalog for `context`
///
/// **Public** - main entry point for catalog generation
///
/// Only substitutes context values into constant templates. Nothing is
/// validated here: an empty tipset key shows up as `null` where its first
/// block is referenced.
pub fn build_requests(context: &RpcContext) -> RpcMethodMap {
    let ctx = context;
    let tipset_key = json!(ctx.filecoin_tipset_key);
    let parent_block = ctx
        .filecoin_tipset_key
        .first()
        .map(|cid| json!(cid))
        .unwrap_or(Value::Null);
    let message_cid = json!(ctx.filecoin_message_cid);

    let entries: Vec<(&str, Vec<Value>)> = vec![
        ("Filecoin.ChainHead", vec![]),
        ("Filecoin.StateMinerPower", vec![json!(ctx.filecoin_miner_id), json!([])]),
        ("Filecoin.StateMinerInfo", vec![json!(ctx.filecoin_miner_id), json!([])]),
        ("eth_chainId", vec![]),
        (
            "eth_call",
            vec![
                json!({
                    "data": ctx.eth_contract_call_data,
                    "from": ctx.eth_address,
                    "gas": "0x0",
                    "gasPrice": "0x0",
                    "to": ctx.eth_contract_address,
                    "value": "0x0",
                }),
                json!("latest"),
            ],
        ),
        ("eth_gasPrice", vec![]),
        ("eth_getBalance", vec![json!(ctx.eth_address), json!("latest")]),
        ("eth_getBlockByNumber", vec![json!("latest"), json!(false)]),
        ("eth_blockNumber", vec![]),
        (
            "eth_getLogs",
            vec![json!({"fromBlock": "latest", "address": ctx.eth_zero_address})],
        ),
        ("eth_getTransactionReceipt", vec![json!(ctx.eth_transaction_hash)]),
        ("eth_getBlockByHash", vec![json!(ctx.eth_block_hash), json!(false)]),
        (
            "Filecoin.ChainGetTipSetByHeight",
            vec![json!(ctx.filecoin_tipset_height), Value::Null],
        ),
        ("Filecoin.WalletBalance", vec![json!(ctx.filecoin_address)]),
        (
            "Filecoin.StateMinerPartitions",
            vec![json!(ctx.filecoin_miner_id), json!(0), Value::Null],
        ),
        ("eth_getTransactionByHash", vec![json!(ctx.eth_transaction_hash)]),
        ("eth_getBlockReceipts", vec![json!(ctx.eth_block_number)]),
        (
            "Filecoin.StateLookupID",
            vec![json!(ctx.filecoin_address), tipset_key.clone()],
        ),
        // 0x4 blocks, reward percentiles 25/50/75
        ("eth_feeHistory", vec![json!("0x4"), json!("latest"), json!([25, 50, 75])]),
        ("Filecoin.ChainGetParentReceipts", vec![parent_block.clone()]),
        ("Filecoin.ChainGetParentMessages", vec![parent_block]),
        ("Filecoin.ChainGetTipSet", vec![tipset_key.clone()]),
        ("net_version", vec![]),
        ("eth_getTransactionCount", vec![json!(ctx.eth_address), json!("latest")]),
        ("Filecoin.ChainReadObj", vec![message_cid.clone()]),
        ("eth_maxPriorityFeePerGas", vec![]),
        (
            "eth_getStorageAt",
            vec![json!(ctx.eth_address), json!("0x0"), json!("latest")],
        ),
        (
            "eth_estimateGas",
            vec![json!({
                "from": ctx.eth_address,
                "to": ctx.eth_address,
                "value": "0x0",
                "data": "0x",
            })],
        ),
        (
            "Filecoin.StateSearchMsg",
            vec![tipset_key, message_cid, json!(3000), json!(true)],
        ),
        (
            "Filecoin.MsigGetAvailableBalance",
            vec![json!(ctx.filecoin_multisig_address), Value::Null],
        ),
        ("Filecoin.StateMinerSectorCount", vec![json!(ctx.filecoin_miner_id), json!([])]),
        (
            "Filecoin.StateMinerSectors",
            vec![json!(ctx.filecoin_miner_id), json!([]), json!([])],
        ),
        ("Filecoin.ChainGetGenesis", vec![]),
        (
            "Filecoin.MsigGetPending",
            vec![json!(ctx.filecoin_multisig_address), Value::Null],
        ),
        (
            "Filecoin.StateCall",
            vec![
                json!({
                    "To": ctx.filecoin_actor_id,
                    "From": ctx.filecoin_actor_id,
                    "Value": "0",
                    "Method": 0,
                    "Params": "",
                }),
                json!([]),
            ],
        ),
        ("web3_clientVersion", vec![]),
        ("Filecoin.MpoolGetNonce", vec![json!(ctx.filecoin_actor_id)]),
        (
            "Filecoin.StateVerifiedClientStatus",
            vec![json!(ctx.filecoin_actor_id), json!([])],
        ),
        (
            "Filecoin.EthGetMessageCidByTransactionHash",
            vec![json!(ctx.eth_transaction_hash)],
        ),
        (
            "Filecoin.GasEstimateMessageGas",
            vec![
                json!({
                    "Version": 0,
                    "To": ctx.filecoin_actor_id,
                    "From": ctx.filecoin_address,
                    "Nonce": 0,
                    "Value": "1000000000000000000",
                    "GasLimit": 0,
                    "GasFeeCap": "0",
                    "GasPremium": "0",
                    "Method": 0,
                    "Params": "",
                }),
                json!({"MaxFee": "5000000000000000000"}),
                Value::Null,
            ],
        ),
        ("eth_syncing", vec![]),
        ("Filecoin.StateNetworkName", vec![]),
        ("eth_getCode", vec![json!(ctx.eth_address), json!("latest")]),
        (
            "Filecoin.StateMinerAvailableBalance",
            vec![json!(ctx.filecoin_actor_id), json!([])],
        ),
    ];

    entries
        .into_iter()
        .map(|(name, params)| (name.to_string(), RequestParams { params }))
        .collect()
}

/// Flatten a catalog into sendable methods, in method-name order
pub fn to_methods(requests: &RpcMethodMap) -> Vec<RpcMethod> {
    requests
        .iter()
        .map(|(name, entry)| RpcMethod::new(name.clone(), entry.params.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::CidLink;

    fn context_with_tipset_key(key: Vec<CidLink>) -> RpcContext {
        RpcContext {
            eth_address: "0xabc".to_string(),
            eth_block_number: "0x1a".to_string(),
            eth_block_hash: "0xblockhash".to_string(),
            eth_transaction_hash: "0xtxhash".to_string(),
            eth_zero_address: "0x0000000000000000000000000000000000000000".to_string(),
            filecoin_address: "f1xyz".to_string(),
            filecoin_miner_id: "f01234".to_string(),
            filecoin_actor_id: "f09999".to_string(),
            filecoin_tipset_height: 12345,
            filecoin_tipset_key: key,
            filecoin_message_cid: CidLink::new("bafymsgcid"),
            filecoin_multisig_address: "f024757".to_string(),
            eth_contract_address: "0xcontract".to_string(),
            eth_contract_call_data: "0xcalldata".to_string(),
        }
    }

    #[test]
    fn test_empty_tipset_key_yields_null_parent() {
        let requests = build_requests(&context_with_tipset_key(vec![]));
        assert_eq!(
            requests["Filecoin.ChainGetParentMessages"].params,
            vec![Value::Null]
        );
        assert_eq!(requests["Filecoin.ChainGetTipSet"].params, vec![json!([])]);
    }

    #[test]
    fn test_to_methods_preserves_params() {
        let requests = build_requests(&context_with_tipset_key(vec![CidLink::new("bafykey1")]));
        let methods = to_methods(&requests);

        assert_eq!(methods.len(), requests.len());
        let parents = methods
            .iter()
            .find(|m| m.name == "Filecoin.ChainGetParentReceipts")
            .unwrap();
        assert_eq!(parents.params, vec![json!({"/": "bafykey1"})]);
    }
}
