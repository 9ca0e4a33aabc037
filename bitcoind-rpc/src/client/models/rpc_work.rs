// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_work.rs file belongs to the bitcoind-rs project and is free
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

/// The `getwork` result handed to external miners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcWork {
    /// Precomputed SHA-256 midstate, hex-encoded.
    pub midstate: String,

    /// Block header data to work on, hex-encoded.
    pub data: String,

    /// Scratch buffer layout, hex-encoded.
    pub hash1: String,

    /// Little-endian target threshold, hex-encoded.
    pub target: String,
}

impl RpcWork {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "work")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            midstate: fields::string_field(obj, names::MIDSTATE)?,
            data: fields::string_field(obj, names::DATA_HEX)?,
            hash1: fields::string_field(obj, names::HASH1)?,
            target: fields::string_field(obj, names::TARGET)?,
        })
    }
}
