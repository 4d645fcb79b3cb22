//! Discovery run: walks a live node to collect valid request parameters.
//!
//! The run:
//! 1. Reads the latest ETH block (transaction hash, block hash, sender)
//! 2. Resolves the network name and its miner/contract profile
//! 3. Reads the Filecoin chain head (height, tipset key)
//! 4. Reads the ETH block number
//! 5. Reads the parent messages of the head
//! 6. Takes the first parent message CID
//! 7. Resolves a sender to an actor ID (left empty when none resolves)
//! 8. Probes the multisig candidates

use super::context::{CidLink, RpcContext};
use super::network::{profile_for, NetworkProfile};
use crate::rpc::{RpcMethod, RpcResponse, RpcTransport};
use crate::utils::config::{
    ACTOR_ID_PREFIX, ETH_ZERO_ADDRESS, MULTISIG_CANDIDATES, RESERVED_ETH_SENDER_PREFIX,
};
use crate::utils::error::DiscoveryError;
use log::{debug, info, warn};
use serde_json::{json, Value};

/// Run a full discovery against `transport`
///
/// **Public** - main entry point for context discovery
pub fn fetch_rpc_context<T: RpcTransport + ?Sized>(
    transport: &T,
) -> Result<RpcContext, DiscoveryError> {
    ContextDiscovery::new(transport).run()
}

/// State of one discovery run.
///
/// The network name is looked up at most once per run and reused by every
/// lookup that depends on it.
pub struct ContextDiscovery<'a, T: RpcTransport + ?Sized> {
    transport: &'a T,
    network_name: Option<String>,
}

impl<'a, T: RpcTransport + ?Sized> ContextDiscovery<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            network_name: None,
        }
    }

    /// Network reported by `Filecoin.StateNetworkName`, memoized
    pub fn network_name(&mut self) -> Result<String, DiscoveryError> {
        if let Some(name) = &self.network_name {
            return Ok(name.clone());
        }

        let response = self.call("Filecoin.StateNetworkName", vec![])?;
        let name = response
            .result()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(DiscoveryError::NetworkName)?
            .to_string();

        info!("Connected to network: {}", name);
        self.network_name = Some(name.clone());
        Ok(name)
    }

    pub fn network_profile(&mut self) -> Result<NetworkProfile, DiscoveryError> {
        Ok(profile_for(&self.network_name()?))
    }

    pub fn miner_id(&mut self) -> Result<&'static str, DiscoveryError> {
        Ok(self.network_profile()?.miner_id)
    }

    pub fn contract_address(&mut self) -> Result<&'static str, DiscoveryError> {
        Ok(self.network_profile()?.contract_address)
    }

    pub fn contract_call_data(&mut self) -> Result<&'static str, DiscoveryError> {
        Ok(self.network_profile()?.contract_call_data)
    }

    /// Execute every discovery step in order
    pub fn run(mut self) -> Result<RpcContext, DiscoveryError> {
        info!("Step 1/8: Reading latest ETH block...");
        let block_response =
            self.call("eth_getBlockByNumber", vec![json!("latest"), json!(true)])?;
        let block = block_response.result();
        let transactions: &[Value] = block
            .and_then(|b| b.get("transactions"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let eth_transaction_hash = first_transaction_hash(transactions)
            .ok_or(DiscoveryError::MissingField("ETH transaction hash"))?;
        let eth_block_hash = block
            .and_then(|b| b.get("hash"))
            .and_then(non_empty_str)
            .ok_or(DiscoveryError::MissingField("latest ETH block hash"))?;
        let eth_address = select_eth_address(transactions).unwrap_or_else(|| {
            warn!("Latest block has no transaction sender, using {}", ETH_ZERO_ADDRESS);
            ETH_ZERO_ADDRESS.to_string()
        });

        debug!(
            "Block {} has {} transactions, using sender {}",
            eth_block_hash,
            transactions.len(),
            eth_address
        );

        info!("Step 2/8: Resolving network profile...");
        let profile = self.network_profile()?;

        info!("Step 3/8: Reading Filecoin chain head...");
        let head_response = self.call("Filecoin.ChainHead", vec![])?;
        let (filecoin_tipset_height, filecoin_tipset_key) = parse_chain_head(&head_response)?;

        debug!(
            "Chain head at height {} with {} blocks",
            filecoin_tipset_height,
            filecoin_tipset_key.len()
        );

        info!("Step 4/8: Reading ETH block number...");
        let number_response = self.call("eth_blockNumber", vec![])?;
        let eth_block_number = number_response
            .result()
            .and_then(non_empty_str)
            .ok_or(DiscoveryError::MissingField("ETH block number"))?;

        info!("Step 5/8: Reading parent messages...");
        let parent_cid = filecoin_tipset_key
            .first()
            .ok_or(DiscoveryError::MissingField("tipset block CID"))?;
        let messages_response =
            self.call("Filecoin.ChainGetParentMessages", vec![json!(parent_cid)])?;
        let messages = messages_response
            .result()
            .and_then(Value::as_array)
            .ok_or(DiscoveryError::MissingField("Filecoin parent messages"))?;

        let senders: Vec<&str> = messages
            .iter()
            .filter_map(|m| m.get("Message")?.get("From")?.as_str())
            .collect();

        debug!("Collected {} parent message senders", senders.len());

        // Checked before the lookups so an empty message list is reported as such
        info!("Step 6/8: Selecting message CID...");
        let filecoin_message_cid = first_message_cid(messages)?;

        info!("Step 7/8: Resolving actor ID...");
        let (filecoin_address, filecoin_actor_id) =
            self.resolve_actor_id(&senders).unwrap_or_else(|| {
                warn!("No parent message sender resolved to an {} actor ID", ACTOR_ID_PREFIX);
                (String::new(), String::new())
            });

        info!("Step 8/8: Probing multisig candidates...");
        let filecoin_multisig_address = self.find_multisig_address(MULTISIG_CANDIDATES)?;

        Ok(RpcContext {
            eth_address,
            eth_block_number,
            eth_block_hash,
            eth_transaction_hash,
            eth_zero_address: ETH_ZERO_ADDRESS.to_string(),
            filecoin_address,
            filecoin_miner_id: profile.miner_id.to_string(),
            filecoin_actor_id,
            filecoin_tipset_height,
            filecoin_tipset_key,
            filecoin_message_cid,
            filecoin_multisig_address,
            eth_contract_address: profile.contract_address.to_string(),
            eth_contract_call_data: profile.contract_call_data.to_string(),
        })
    }

    /// First sender whose ID lookup yields a mainnet actor ID.
    ///
    /// Lookup failures are logged and skipped.
    fn resolve_actor_id(&self, senders: &[&str]) -> Option<(String, String)> {
        for address in senders {
            let method = RpcMethod::new("Filecoin.StateLookupID", vec![json!(address), Value::Null]);

            match self.transport.send(&method) {
                Ok(response) => {
                    let id = response
                        .result()
                        .and_then(Value::as_str)
                        .filter(|id| id.starts_with(ACTOR_ID_PREFIX));

                    if let Some(id) = id {
                        debug!("Resolved {} to {}", address, id);
                        return Some((address.to_string(), id.to_string()));
                    }
                    debug!("{} did not resolve to an {} actor ID", address, ACTOR_ID_PREFIX);
                }
                Err(e) => {
                    warn!("Error looking up ID for address {}: {}", address, e);
                }
            }
        }
        None
    }

    /// First candidate for which the node returns any result, zero included
    fn find_multisig_address(&self, candidates: &[&str]) -> Result<String, DiscoveryError> {
        for address in candidates {
            let method = RpcMethod::new(
                "Filecoin.MsigGetAvailableBalance",
                vec![json!(address), Value::Null],
            );

            match self.transport.send(&method) {
                Ok(response) if response.result().is_some() => {
                    debug!("Using multisig address {}", address);
                    return Ok(address.to_string());
                }
                Ok(response) => {
                    warn!(
                        "Address {} is not a valid multisig address: {}",
                        address,
                        response.error().cloned().unwrap_or(Value::Null)
                    );
                }
                Err(e) => {
                    warn!("Address {} is not a valid multisig address: {}", address, e);
                }
            }
        }
        Err(DiscoveryError::NoMultisig)
    }

    fn call(&self, name: &str, params: Vec<Value>) -> Result<RpcResponse, DiscoveryError> {
        let method = RpcMethod::new(name, params);
        self.transport
            .send(&method)
            .map_err(|source| DiscoveryError::Rpc {
                method: method.name,
                source,
            })
    }
}

/// Prefer a sender that is not a masked actor address, else the first sender
fn select_eth_address(transactions: &[Value]) -> Option<String> {
    transactions
        .iter()
        .filter_map(|tx| tx.get("from").and_then(non_empty_str))
        .find(|from| !from.starts_with(RESERVED_ETH_SENDER_PREFIX))
        .or_else(|| transactions.first()?.get("from").and_then(non_empty_str))
}

/// Hydrated blocks carry objects; non-hydrated ones carry bare hashes
fn first_transaction_hash(transactions: &[Value]) -> Option<String> {
    let first = transactions.first()?;
    match first {
        Value::String(_) => non_empty_str(first),
        _ => first.get("hash").and_then(non_empty_str),
    }
}

fn parse_chain_head(response: &RpcResponse) -> Result<(i64, Vec<CidLink>), DiscoveryError> {
    let tipset = response.result();

    let height = tipset
        .and_then(|t| t.get("Height"))
        .and_then(Value::as_i64)
        .ok_or(DiscoveryError::MissingField("Filecoin tipset height"))?;

    let cids = tipset
        .and_then(|t| t.get("Cids"))
        .filter(|cids| cids.is_array())
        .ok_or(DiscoveryError::MissingField("Filecoin tipset key"))?;

    let key = serde_json::from_value(cids.clone()).map_err(|e| DiscoveryError::MalformedField {
        field: "Filecoin tipset key",
        reason: e.to_string(),
    })?;

    Ok((height, key))
}

fn first_message_cid(messages: &[Value]) -> Result<CidLink, DiscoveryError> {
    let cid = messages
        .first()
        .and_then(|m| m.get("Cid"))
        .filter(|cid| !cid.is_null())
        .ok_or(DiscoveryError::MissingField("Filecoin message CID"))?;

    serde_json::from_value(cid.clone()).map_err(|e| DiscoveryError::MalformedField {
        field: "Filecoin message CID",
        reason: e.to_string(),
    })
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
