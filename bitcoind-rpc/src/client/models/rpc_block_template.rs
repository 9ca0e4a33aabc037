// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_block_template.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::JToken;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::client::fields;
use crate::error::{ClientError, ClientResult};
use crate::schema::fields as names;

use super::rpc_coinbase::RpcCoinbase;

/// The `getblocktemplate` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcBlockTemplate {
    /// Block version to use.
    pub version: i64,

    /// Hash of the block to build on.
    pub previous_block_hash: String,

    /// Non-coinbase transactions to include, in template order.
    pub transactions: Vec<RpcTemplateTransaction>,

    /// Extra data to include in the coinbase, keyed by feature name.
    pub coinbase_aux: IndexMap<String, String>,

    /// Coinbase output value available, in base units.
    pub coinbase_value: i64,

    /// Ready-made coinbase transaction, when the node provides one.
    pub coinbase_txn: RpcCoinbase,

    /// Little-endian target threshold, hex-encoded.
    pub target: String,

    /// Earliest time a solved block may carry.
    pub min_time: i64,

    /// Template aspects the miner may mutate.
    pub mutable: Vec<String>,

    /// Valid nonce range, hex-encoded.
    pub nonce_range: String,

    /// Signature-operation limit for the block.
    pub sigop_limit: i64,

    /// Size limit for the block.
    pub size_limit: i64,

    /// Current node time.
    pub cur_time: i64,

    /// Compact difficulty target.
    pub bits: String,

    /// Height of the block being built.
    pub height: i64,
}

impl RpcBlockTemplate {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "blocktemplate")? else {
            return Ok(Self::default());
        };

        let mut transactions = Vec::new();
        for item in fields::array_field(obj, names::TRANSACTIONS)? {
            transactions.push(RpcTemplateTransaction::from_json(item)?);
        }

        let mut coinbase_aux = IndexMap::new();
        if let Some(aux) = fields::object_field(obj, names::COINBASE_AUX)? {
            for (key, value) in aux {
                match value {
                    JToken::String(text) => {
                        coinbase_aux.insert(key.clone(), text.clone());
                    }
                    other => {
                        return Err(ClientError::type_mismatch(
                            key.clone(),
                            "string",
                            other.type_name(),
                        ));
                    }
                }
            }
        }

        let coinbase_txn = match fields::object_field(obj, names::COINBASE_TXN)? {
            Some(txn) => RpcCoinbase::from_json(&JToken::Object(txn.clone()))?,
            None => RpcCoinbase::default(),
        };

        Ok(Self {
            version: fields::long_field(obj, names::VERSION)?,
            previous_block_hash: fields::string_field(obj, names::PREVIOUS_BLOCK_HASH)?,
            transactions,
            coinbase_aux,
            coinbase_value: fields::long_field(obj, names::COINBASE_VALUE)?,
            coinbase_txn,
            target: fields::string_field(obj, names::TARGET)?,
            min_time: fields::long_field(obj, names::MIN_TIME)?,
            mutable: fields::string_array_field(obj, names::MUTABLE)?,
            nonce_range: fields::string_field(obj, names::NONCE_RANGE)?,
            sigop_limit: fields::long_field(obj, names::SIGOP_LIMIT)?,
            size_limit: fields::long_field(obj, names::SIZE_LIMIT)?,
            cur_time: fields::long_field(obj, names::CUR_TIME)?,
            bits: fields::string_field(obj, names::BITS)?,
            height: fields::long_field(obj, names::HEIGHT)?,
        })
    }
}

/// One non-coinbase transaction inside a block template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTemplateTransaction {
    /// Serialized transaction, hex-encoded.
    pub data: String,

    /// Transaction hash.
    pub hash: String,

    /// 1-based indexes of template transactions this one depends on.
    pub depends: Vec<i64>,

    /// Fee in base units.
    pub fee: i64,

    /// Signature-operation count.
    pub sigops: i64,
}

impl RpcTemplateTransaction {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "template transaction")? else {
            return Ok(Self::default());
        };
        let mut depends = Vec::new();
        for item in fields::array_field(obj, names::DEPENDS)? {
            match item {
                JToken::Number(value) => depends.push(*value as i64),
                other => {
                    return Err(ClientError::type_mismatch(
                        names::DEPENDS,
                        "number",
                        other.type_name(),
                    ));
                }
            }
        }
        Ok(Self {
            data: fields::string_field(obj, names::DATA_HEX)?,
            hash: fields::string_field(obj, names::HASH)?,
            depends,
            fee: fields::long_field(obj, names::FEE)?,
            sigops: fields::long_field(obj, names::SIGOPS)?,
        })
    }
}
