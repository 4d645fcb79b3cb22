//! The on-disk fixture: a discovered context plus the catalog built from it.

use crate::catalog::{build_requests, RpcMethodMap};
use crate::discovery::RpcContext;
use crate::utils::config::FIXTURE_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Fixture schema version
    pub version: String,

    /// RFC 3339 UTC timestamp
    pub generated_at: String,

    /// Node the context was discovered from (empty when loaded from file)
    pub rpc_url: String,

    pub context: RpcContext,

    pub requests: RpcMethodMap,
}

impl Fixture {
    /// Build the catalog for `context` and stamp it
    pub fn new(rpc_url: impl Into<String>, context: RpcContext) -> Self {
        let requests = build_requests(&context);
        Self {
            version: FIXTURE_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            rpc_url: rpc_url.into(),
            context,
            requests,
        }
    }
}
