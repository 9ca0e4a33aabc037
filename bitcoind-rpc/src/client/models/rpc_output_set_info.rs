// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_output_set_info.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::JToken;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::fields;
use crate::error::ClientResult;
use crate::schema::fields as names;

/// The `gettxoutsetinfo` result: a summary of the UTXO set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcOutputSetInfo {
    /// Height the summary was computed at.
    pub height: i64,

    /// Hash of the block at that height.
    pub best_block: String,

    /// Transactions with unspent outputs.
    pub transactions: i64,

    /// Unspent outputs.
    pub tx_outs: i64,

    /// Serialized UTXO set size in bytes.
    pub bytes_serialized: i64,

    /// Hash of the serialized UTXO set.
    pub hash_serialized: String,

    /// Total coin amount in the set.
    pub total_amount: Decimal,
}

impl RpcOutputSetInfo {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "txoutsetinfo")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            height: fields::long_field(obj, names::HEIGHT)?,
            best_block: fields::string_field(obj, names::BEST_BLOCK)?,
            transactions: fields::long_field(obj, names::TRANSACTIONS)?,
            tx_outs: fields::long_field(obj, names::TX_OUTS)?,
            bytes_serialized: fields::long_field(obj, names::BYTES_SERIALIZED)?,
            hash_serialized: fields::string_field(obj, names::HASH_SERIALIZED)?,
            total_amount: fields::decimal_field(obj, names::TOTAL_AMOUNT)?,
        })
    }
}
