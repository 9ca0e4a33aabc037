// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_raw_transaction.rs file belongs to the bitcoind-rs project and is free
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

use super::rpc_script::{RpcScript, RpcScriptPubKey};

/// A verbose `getrawtransaction` / `decoderawtransaction` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcRawTransaction {
    /// Serialized transaction, hex-encoded.
    pub hex: String,

    /// Transaction id.
    pub tx_id: String,

    /// Transaction version.
    pub version: i64,

    /// Lock time.
    pub lock_time: i64,

    /// Inputs in transaction order.
    pub vin: Vec<RpcTransactionInput>,

    /// Outputs in transaction order.
    pub vout: Vec<RpcTransactionOutput>,

    /// Hash of the containing block, empty while unconfirmed.
    pub block_hash: String,

    /// Confirmations; 0 while unconfirmed.
    pub confirmations: i64,

    /// Transaction timestamp.
    pub time: i64,

    /// Timestamp of the containing block.
    pub block_time: i64,
}

impl RpcRawTransaction {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "rawtransaction")? else {
            return Ok(Self::default());
        };
        let mut vin = Vec::new();
        for item in fields::array_field(obj, names::VIN)? {
            vin.push(RpcTransactionInput::from_json(item)?);
        }
        let mut vout = Vec::new();
        for item in fields::array_field(obj, names::VOUT)? {
            vout.push(RpcTransactionOutput::from_json(item)?);
        }
        Ok(Self {
            hex: fields::string_field(obj, names::HEX)?,
            tx_id: fields::string_field(obj, names::TX_ID)?,
            version: fields::long_field(obj, names::VERSION)?,
            lock_time: fields::long_field(obj, names::LOCK_TIME)?,
            vin,
            vout,
            block_hash: fields::string_field(obj, names::BLOCK_HASH)?,
            confirmations: fields::long_field(obj, names::CONFIRMATIONS)?,
            time: fields::long_field(obj, names::TIME)?,
            block_time: fields::long_field(obj, names::BLOCK_TIME)?,
        })
    }
}

/// One transaction input. Coinbase inputs carry the `coinbase` script
/// instead of an outpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTransactionInput {
    /// Funding transaction id, empty on coinbase inputs.
    pub tx_id: String,

    /// Funding output index.
    pub vout: i64,

    /// Unlocking script.
    pub script_sig: RpcScript,

    /// Coinbase script, hex-encoded; empty on regular inputs.
    pub coinbase: String,

    /// Input sequence number.
    pub sequence: i64,
}

impl RpcTransactionInput {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "vin")? else {
            return Ok(Self::default());
        };
        let script_sig = match fields::object_field(obj, names::SCRIPT_SIG)? {
            Some(script) => RpcScript::from_object(script)?,
            None => RpcScript::default(),
        };
        Ok(Self {
            tx_id: fields::string_field(obj, names::TX_ID)?,
            vout: fields::long_field(obj, names::VOUT)?,
            script_sig,
            coinbase: fields::string_field(obj, names::COINBASE)?,
            sequence: fields::long_field(obj, names::SEQUENCE)?,
        })
    }
}

/// One transaction output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTransactionOutput {
    /// Output value.
    pub value: Decimal,

    /// Output index.
    pub n: i64,

    /// Public-key script, raw or decoded depending on the node version.
    pub script_pub_key: RpcScriptPubKey,
}

impl RpcTransactionOutput {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "vout")? else {
            return Ok(Self::default());
        };
        let script_pub_key = match obj.get(names::SCRIPT_PUB_KEY) {
            Some(token) => RpcScriptPubKey::from_json(token)?,
            None => RpcScriptPubKey::default(),
        };
        Ok(Self {
            value: fields::decimal_field(obj, names::VALUE)?,
            n: fields::long_field(obj, names::N)?,
            script_pub_key,
        })
    }
}
