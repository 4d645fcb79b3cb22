//! Filecoin RPC Fixtures
//!
//! Discovers live, valid parameter values from a node that serves both the
//! Ethereum and Filecoin JSON-RPC APIs, and builds a fixed catalog of
//! requests populated with them for replay, load testing or conformance
//! checks.
//!
//! This crate provides the core implementation for the
//! `rpc-fixtures` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! rpc-fixtures build --rpc http://localhost:1234/rpc/v1 -o fixture.json
//! rpc-fixtures replay --rpc http://localhost:1234/rpc/v1 -i fixture.json
//! ```

pub mod catalog;
pub mod commands;
pub mod discovery;
pub mod output;
pub mod rpc;
pub mod utils;
