//! JSON value layer for the bitcoind JSON-RPC wire format.
//!
//! The node speaks loosely-typed JSON: almost every field of every result is
//! optional, numbers and strings are used interchangeably by different node
//! versions, and object key order is meaningful for debugging output. This
//! crate provides [`JToken`], an ordered JSON tree parsed through
//! `serde_json`, together with the strict accessors the decoding layer
//! builds on.

pub mod error;
pub mod j_token;

pub use error::JsonError;
pub use j_token::{JObject, JToken};
