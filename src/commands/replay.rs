//! Replay command implementation.
//!
//! Sends every catalog request from a fixture to a node, one at a time,
//! and reports what came back.

use super::models::ReplayArgs;
use super::utils::{connect, validate_rpc_args};
use crate::catalog::to_methods;
use crate::output::{read_json, Fixture};
use crate::rpc::{RpcMethod, RpcTransport};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde_json::Value;
use std::time::Instant;

/// What a single replayed request produced
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOutcome {
    /// The node answered with a `result` member
    Success,
    /// The node answered without a result; carries the `error` member, if any
    RpcError(Value),
    /// No decodable answer at all
    TransportFailure(String),
}

#[derive(Debug, Clone)]
pub struct ReplayRecord {
    pub method: String,
    pub status: Option<u16>,
    pub outcome: ReplayOutcome,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub records: Vec<ReplayRecord>,
}

impl ReplayReport {
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, ReplayOutcome::Success))
    }

    pub fn rpc_errors(&self) -> usize {
        self.count(|o| matches!(o, ReplayOutcome::RpcError(_)))
    }

    pub fn transport_failures(&self) -> usize {
        self.count(|o| matches!(o, ReplayOutcome::TransportFailure(_)))
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.records.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} requests: {} ok, {} rpc errors, {} transport failures",
            self.records.len(),
            self.succeeded(),
            self.rpc_errors(),
            self.transport_failures()
        )
    }

    fn count(&self, pred: impl Fn(&ReplayOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Send `methods` sequentially; failures are recorded, never propagated
pub fn replay_requests<T: RpcTransport + ?Sized>(
    transport: &T,
    methods: &[RpcMethod],
) -> ReplayReport {
    let mut report = ReplayReport::default();

    for method in methods {
        let start = Instant::now();
        let response = transport.send(method);
        let elapsed_ms = start.elapsed().as_millis();

        let (status, outcome) = match response {
            Ok(response) => {
                let outcome = if response.result().is_some() {
                    ReplayOutcome::Success
                } else {
                    ReplayOutcome::RpcError(response.error().cloned().unwrap_or(Value::Null))
                };
                (Some(response.status), outcome)
            }
            Err(e) => (None, ReplayOutcome::TransportFailure(e.to_string())),
        };

        match &outcome {
            ReplayOutcome::Success => debug!("✓ {} ({} ms)", method.name, elapsed_ms),
            ReplayOutcome::RpcError(err) => warn!("✗ {}: {}", method.name, err),
            ReplayOutcome::TransportFailure(err) => warn!("✗ {}: {}", method.name, err),
        }

        report.records.push(ReplayRecord {
            method: method.name.clone(),
            status,
            outcome,
            elapsed_ms,
        });
    }

    report
}

/// Pick the methods to replay, keeping catalog order
///
/// Unknown names in `only` are an error so typos do not silently replay nothing.
pub fn select_methods(fixture: &Fixture, only: &[String]) -> Result<Vec<RpcMethod>> {
    if let Some(unknown) = only.iter().find(|name| !fixture.requests.contains_key(*name)) {
        anyhow::bail!("Method {} is not in the fixture", unknown);
    }

    Ok(to_methods(&fixture.requests)
        .into_iter()
        .filter(|m| only.is_empty() || only.contains(&m.name))
        .collect())
}

/// Execute the replay command
///
/// **Public** - main entry point called from main.rs
pub fn execute_replay(args: ReplayArgs) -> Result<ReplayReport> {
    validate_rpc_args(&args.rpc_url, args.timeout_secs)?;

    let fixture: Fixture = read_json(&args.input)
        .with_context(|| format!("Failed to read fixture from {}", args.input.display()))?;
    let methods = select_methods(&fixture, &args.methods)?;

    info!("Replaying {} requests against {}", methods.len(), args.rpc_url);

    let client = connect(&args.rpc_url, args.timeout_secs)?;
    let report = replay_requests(&client, &methods);

    println!("\n{}", "=".repeat(80));
    println!("REPLAY SUMMARY");
    println!("{}", "=".repeat(80));
    for record in &report.records {
        let status = record
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "---".to_string());
        let mark = match record.outcome {
            ReplayOutcome::Success => "ok",
            ReplayOutcome::RpcError(_) => "rpc error",
            ReplayOutcome::TransportFailure(_) => "failed",
        };
        println!(
            "{:<48} {:>4} {:>8} ms  {}",
            record.method, status, record.elapsed_ms, mark
        );
    }
    println!("{}", "=".repeat(80));
    println!("{}", report.summary());

    if args.fail_on_error && !report.all_succeeded() {
        anyhow::bail!("Replay finished with failures: {}", report.summary());
    }

    Ok(report)
}
