// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// error.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for RPC operations.

use bitcoind_json::JToken;
use thiserror::Error;

/// Errors surfaced by the RPC client and the notification bridge.
///
/// Every failure is fatal to the call that raised it; nothing below the
/// session-establishment probe loop retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP failure below the JSON-RPC layer: connection
    /// refused, timeout, malformed HTTP, or a status code outside the
    /// node's reply space.
    #[error("transport failure: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint answered, but not with a well-formed JSON-RPC reply:
    /// empty or malformed body, or a correlation id that does not match
    /// the request.
    #[error("protocol violation: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// An application-level error reported by the node. The code space is
    /// the node's own and is preserved verbatim so callers can branch on it.
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// Node-supplied error code.
        code: i32,
        /// Node-supplied error message.
        message: String,
        /// Optional additional error payload.
        data: Option<JToken>,
    },

    /// A JSON value had an unexpected shape while decoding a result.
    /// Indicates a client/node protocol version mismatch.
    #[error("type mismatch for '{context}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Field or method the value belongs to.
        context: String,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type actually found.
        found: &'static str,
    },

    /// Raised by the client itself for RPC methods it deliberately does
    /// not support.
    #[error("method not implemented: {method}")]
    NotImplemented {
        /// Method name.
        method: String,
    },
}

impl ClientError {
    /// Create a transport error without an underlying cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error wrapping its cause.
    pub fn transport_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a type-mismatch error.
    pub fn type_mismatch(
        context: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Create a not-implemented error.
    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented {
            method: method.into(),
        }
    }
}

/// Result type for RPC operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
