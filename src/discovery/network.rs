//! Per-network constants selected by `Filecoin.StateNetworkName`.

use crate::utils::config::{
    MAINNET_CONTRACT, MAINNET_CONTRACT_CALL_DATA, MAINNET_MINER, MAINNET_NETWORK_NAME,
    TESTNET_CONTRACT, TESTNET_CONTRACT_CALL_DATA, TESTNET_MINER,
};

/// Known-good miner and contract for a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    pub miner_id: &'static str,
    pub contract_address: &'static str,
    pub contract_call_data: &'static str,
}

pub const MAINNET: NetworkProfile = NetworkProfile {
    miner_id: MAINNET_MINER,
    contract_address: MAINNET_CONTRACT,
    contract_call_data: MAINNET_CONTRACT_CALL_DATA,
};

pub const TESTNET: NetworkProfile = NetworkProfile {
    miner_id: TESTNET_MINER,
    contract_address: TESTNET_CONTRACT,
    contract_call_data: TESTNET_CONTRACT_CALL_DATA,
};

/// Anything that is not mainnet (calibnet, butterfly, devnets) is treated as a testnet
pub fn profile_for(network_name: &str) -> NetworkProfile {
    if network_name == MAINNET_NETWORK_NAME {
        MAINNET
    } else {
        TESTNET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_for_mainnet() {
        assert_eq!(profile_for("mainnet").miner_id, "f01000");
    }

    #[test]
    fn test_profile_for_other_networks() {
        assert_eq!(profile_for("calibrationnet").miner_id, "t01000");
        assert_eq!(profile_for("").miner_id, "t01000");
    }
}
