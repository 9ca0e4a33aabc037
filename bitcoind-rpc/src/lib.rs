// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// lib.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Bitcoind RPC Client Library
//!
//! This crate provides a synchronous JSON-RPC client for bitcoind-family
//! nodes, typed decoding of the node's loosely-typed JSON results into
//! domain records, and a push-notification bridge that accepts the node's
//! `blocknotify`/`walletnotify` identifiers over a TCP socket, resolves
//! them through the RPC client, and republishes the enriched records to
//! registered observers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bitcoind_rpc::{Endpoint, RpcClient};
//!
//! let endpoint = Endpoint::new("127.0.0.1", 8332, "user", "password")?;
//! let client = RpcClient::new(endpoint);
//! let height = client.get_block_count()?;
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod notify;
pub mod schema;
pub mod session;
pub mod transport;

pub use client::{models, AddNodeCommand, RpcClient};
pub use endpoint::Endpoint;
pub use error::{ClientError, ClientResult};
pub use notify::{
    block_notification_handler, enriched_handler, transaction_notification_handler,
    NotificationHandler, NotificationListener,
};
pub use session::{NodeHandle, RetryPolicy, Session};
pub use transport::HttpTransport;

// Re-export commonly used types
pub use client::models::{RpcRequest, RpcResponse, RpcResponseError};
