// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// transport.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! One synchronous HTTP POST per RPC call.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Instant;

use crate::endpoint::Endpoint;
use crate::error::{ClientError, ClientResult};

/// HTTP transport for the RPC engine.
///
/// Every call builds a fresh client and connection: credentials are scoped
/// to a single request and no connection state is shared between
/// concurrent callers. One timeout covers connect and read combined.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: Endpoint,
}

impl HttpTransport {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Posts one request envelope and returns the raw response body.
    ///
    /// The node reports RPC-level errors with status 500 and a JSON-RPC
    /// error envelope in the body, so 500 passes through as a normal
    /// reply. Every other non-2xx status is a transport failure whose
    /// message carries the status code. Single attempt, no retry.
    pub fn post(&self, body: Vec<u8>) -> ClientResult<Vec<u8>> {
        let client = Client::builder()
            .timeout(self.endpoint.timeout())
            .build()
            .map_err(|err| ClientError::transport_with("failed to build http client", err))?;

        let started = Instant::now();
        let response = client
            .post(self.endpoint.url().clone())
            .basic_auth(self.endpoint.user(), Some(self.endpoint.password()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|err| {
                ClientError::transport_with(format!("http post failed: {err}"), err)
            })?;

        let status = response.status();
        let payload = response
            .bytes()
            .map_err(|err| ClientError::transport_with("failed to read response body", err))?
            .to_vec();

        if status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!(
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                bytes = payload.len(),
                "rpc http round-trip"
            );
            Ok(payload)
        } else {
            Err(ClientError::transport(format!(
                "http status {} from rpc endpoint",
                status.as_u16()
            )))
        }
    }
}
