//! The record of values discovered from a live node.

use serde::{Deserialize, Serialize};

/// An IPLD link in Lotus JSON form: `{"/": "bafy..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidLink {
    #[serde(rename = "/")]
    pub cid: String,
}

impl CidLink {
    pub fn new(cid: impl Into<String>) -> Self {
        Self { cid: cid.into() }
    }
}

/// Everything the request catalog needs, discovered in one run.
///
/// Serialized field names match the keys used in fixture files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcContext {
    pub eth_address: String,
    pub eth_block_number: String,
    pub eth_block_hash: String,
    pub eth_transaction_hash: String,
    pub eth_zero_address: String,
    pub filecoin_address: String,
    pub filecoin_miner_id: String,
    pub filecoin_actor_id: String,
    pub filecoin_tipset_height: i64,
    pub filecoin_tipset_key: Vec<CidLink>,
    pub filecoin_message_cid: CidLink,
    pub filecoin_multisig_address: String,
    pub eth_contract_address: String,
    pub eth_contract_call_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cid_link_uses_slash_key() {
        let link = CidLink::new("bafymsgcid");
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({"/": "bafymsgcid"}));
    }

    #[test]
    fn test_context_keys_are_camel_case() {
        let context = RpcContext {
            eth_address: "0xabc".to_string(),
            eth_block_number: "0x1a".to_string(),
            eth_block_hash: "0xblockhash".to_string(),
            eth_transaction_hash: "0xtxhash".to_string(),
            eth_zero_address: "0x0000000000000000000000000000000000000000".to_string(),
            filecoin_address: "f1xyz".to_string(),
            filecoin_miner_id: "f01234".to_string(),
            filecoin_actor_id: "f09999".to_string(),
            filecoin_tipset_height: 12345,
            filecoin_tipset_key: vec![CidLink::new("bafykey1")],
            filecoin_message_cid: CidLink::new("bafymsgcid"),
            filecoin_multisig_address: "f024757".to_string(),
            eth_contract_address: "0xcontract".to_string(),
            eth_contract_call_data: "0xcalldata".to_string(),
        };

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["filecoinTipsetHeight"], 12345);
        assert_eq!(value["filecoinTipsetKey"], json!([{"/": "bafykey1"}]));
        assert_eq!(value["ethContractCallData"], "0xcalldata");
    }
}
