// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// endpoint.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The network address and credentials identifying one node's RPC service.

use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// One node's RPC endpoint: target URL, Basic-auth credentials, and the
/// request timeout. Immutable once handed to a client; owned by exactly
/// one [`crate::RpcClient`].
#[derive(Clone)]
pub struct Endpoint {
    url: Url,
    user: String,
    password: String,
    timeout: Duration,
}

impl Endpoint {
    /// Timeout applied when none is configured. Covers connect and read
    /// combined.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates an HTTP endpoint from host and port.
    pub fn new(
        host: &str,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> ClientResult<Self> {
        let url = Url::parse(&format!("http://{host}:{port}/"))
            .map_err(|err| ClientError::transport_with(format!("invalid endpoint address: {host}:{port}"), err))?;
        Ok(Self::from_url(url, user, password))
    }

    /// Creates an endpoint from a pre-built URL.
    pub fn from_url(url: Url, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url,
            user: user.into(),
            password: password.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the request timeout. Consumes the endpoint so the value is
    /// fixed before a client takes ownership.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn user(&self) -> &str {
        &self.user
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

// Credentials stay out of log output.
impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
