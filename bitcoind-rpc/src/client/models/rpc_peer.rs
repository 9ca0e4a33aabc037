// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_peer.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::JToken;
use serde::{Deserialize, Serialize};

use crate::client::fields;
use crate::error::ClientResult;
use crate::schema::fields as names;

/// One `getpeerinfo` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcPeer {
    /// Peer address as host:port.
    pub addr: String,

    /// Service flags, hex-encoded.
    pub services: String,

    /// Unix time of the last send.
    pub last_send: i64,

    /// Unix time of the last receive.
    pub last_recv: i64,

    /// Total bytes sent.
    pub bytes_sent: i64,

    /// Total bytes received.
    pub bytes_recv: i64,

    /// Unix time the connection was established.
    pub conn_time: i64,

    /// Peer protocol version.
    pub version: i64,

    /// Peer user agent.
    pub subver: String,

    /// Whether the peer connected to us.
    pub inbound: bool,

    /// Peer's best height when it connected.
    pub starting_height: i64,

    /// Misbehavior score.
    pub ban_score: i64,
}

impl RpcPeer {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "peer")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            addr: fields::string_field(obj, names::ADDR)?,
            services: fields::string_field(obj, names::SERVICES)?,
            last_send: fields::long_field(obj, names::LAST_SEND)?,
            last_recv: fields::long_field(obj, names::LAST_RECV)?,
            bytes_sent: fields::long_field(obj, names::BYTES_SENT)?,
            bytes_recv: fields::long_field(obj, names::BYTES_RECV)?,
            conn_time: fields::long_field(obj, names::CONN_TIME)?,
            version: fields::long_field(obj, names::VERSION)?,
            subver: fields::string_field(obj, names::SUBVER)?,
            inbound: fields::bool_field(obj, names::INBOUND)?,
            starting_height: fields::long_field(obj, names::STARTING_HEIGHT)?,
            ban_score: fields::long_field(obj, names::BAN_SCORE)?,
        })
    }
}
