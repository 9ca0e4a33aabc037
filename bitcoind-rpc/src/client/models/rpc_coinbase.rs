// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_coinbase.rs file belongs to the bitcoind-rs project and is free
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

/// The `coinbasetxn` member of a block template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcCoinbase {
    /// Serialized coinbase transaction, hex-encoded.
    pub data: String,

    /// Transaction hash.
    pub hash: String,

    /// Fee delta.
    pub fee: i64,
}

impl RpcCoinbase {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "coinbasetxn")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            data: fields::string_field(obj, names::DATA_HEX)?,
            hash: fields::string_field(obj, names::HASH)?,
            fee: fields::long_field(obj, names::FEE)?,
        })
    }
}
