// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// session.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Session establishment against a freshly started node.
//!
//! A spawned node takes a while to open its RPC port, so construction
//! polls a cheap status call with a bounded, linearly growing backoff.
//! This probe loop is the only place in the crate that ever retries.

use std::io;
use std::thread;
use std::time::Duration;

use crate::client::RpcClient;
use crate::error::{ClientError, ClientResult};

/// Handle on the node process supplied by whoever spawned it. The
/// supervisor's destroy operation, seen through one narrow seam.
pub trait NodeHandle: Send {
    /// Terminates the node process.
    fn destroy(&mut self) -> io::Result<()>;
}

impl NodeHandle for std::process::Child {
    fn destroy(&mut self) -> io::Result<()> {
        self.kill()
    }
}

/// Bounds on the liveness-probe loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempt ceiling.
    pub attempts: u32,

    /// Backoff unit: attempt `n` sleeps `n × base_delay` before the next
    /// probe.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            base_delay: Duration::from_secs(2),
        }
    }
}

/// A live connection to one node: the RPC client plus, when this process
/// spawned the node, the handle to it.
pub struct Session {
    client: RpcClient,
    node: Option<Box<dyn NodeHandle>>,
}

impl Session {
    /// Establishes a session by probing `getblockcount` until the node
    /// answers.
    ///
    /// Exhausting the attempt ceiling fails construction; a supplied node
    /// handle is then destroyed exactly once so no orphan process is left
    /// behind.
    pub fn establish(
        client: RpcClient,
        policy: RetryPolicy,
        mut node: Option<Box<dyn NodeHandle>>,
    ) -> ClientResult<Self> {
        for attempt in 1..=policy.attempts {
            match client.get_block_count() {
                Ok(height) => {
                    tracing::info!(height, attempt, "node reachable, session established");
                    return Ok(Self { client, node });
                }
                Err(err) => {
                    tracing::debug!(attempt, %err, "liveness probe failed");
                }
            }
            if attempt < policy.attempts {
                thread::sleep(policy.base_delay * attempt);
            }
        }

        if let Some(handle) = node.as_mut() {
            tracing::warn!("node never became reachable, terminating it");
            if let Err(err) = handle.destroy() {
                tracing::warn!(%err, "failed to terminate node process");
            }
        }
        Err(ClientError::transport(format!(
            "node did not become reachable within {} attempts",
            policy.attempts
        )))
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    /// Whether this session owns the node process it talks to.
    pub fn owns_node(&self) -> bool {
        self.node.is_some()
    }

    /// Orderly shutdown: asks the node to stop over RPC. Subsequent calls
    /// on the client fail with a transport error once the node is gone.
    pub fn stop(&self) -> ClientResult<String> {
        self.client.stop()
    }

    /// Releases the client, dropping the node handle without destroying
    /// the process.
    pub fn into_client(self) -> RpcClient {
        self.client
    }
}
