//! Request catalog built from a discovered context.

pub mod requests;

pub use requests::{build_requests, to_methods, RequestParams, RpcMethodMap};
