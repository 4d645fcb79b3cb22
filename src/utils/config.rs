//! Configuration and constants for the CLI.

/// Default Lotus-compatible RPC endpoint
pub const DEFAULT_RPC_URL: &str = "http://localhost:1234/rpc/v1";

/// Environment variable read by `--rpc` when the flag is omitted
pub const RPC_URL_ENV: &str = "FIL_RPC_URL";

/// Current fixture file schema version
pub const FIXTURE_SCHEMA_VERSION: &str = "1.0.0";

/// JSON-RPC ids are drawn from `0..MAX_REQUEST_ID`
pub const MAX_REQUEST_ID: u64 = 100_000;

pub const MAINNET_NETWORK_NAME: &str = "mainnet";

pub const MAINNET_MINER: &str = "f01000";
pub const TESTNET_MINER: &str = "t01000";

pub const MAINNET_MULTISIG: &str = "f024757";
pub const TESTNET_MULTISIG: &str = "t043496";

/// Probed in order by `Filecoin.MsigGetAvailableBalance`
pub const MULTISIG_CANDIDATES: &[&str] = &[MAINNET_MULTISIG, TESTNET_MULTISIG];

pub const MAINNET_CONTRACT: &str = "0x0c1d86d34e469770339b53613f3a2343accd62cb";
pub const TESTNET_CONTRACT: &str = "0x0c1d86d34e469770339b53613f3a2343accd62cb";

// getBalance(address) selector followed by the padded holder address
pub const MAINNET_CONTRACT_CALL_DATA: &str =
    "0xf8b2cb4f000000000000000000000000cbff24ded1ce6b53712078759233ac8f91ea71b6";
pub const TESTNET_CONTRACT_CALL_DATA: &str =
    "0xf8b2cb4f000000000000000000000000cbff24ded1ce6b53712078759233ac8f91ea71b6";

pub const ETH_ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Senders with this prefix are masked f0 actor addresses, not real EOAs
pub const RESERVED_ETH_SENDER_PREFIX: &str = "0xff";

/// Prefix of a resolved mainnet actor ID
pub const ACTOR_ID_PREFIX: &str = "f0";
