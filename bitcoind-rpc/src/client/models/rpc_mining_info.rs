// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_mining_info.rs file belongs to the bitcoind-rs project and is free
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

/// The `getmininginfo` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcMiningInfo {
    /// Current chain height.
    pub blocks: i64,

    /// Size of the block being assembled.
    pub current_block_size: i64,

    /// Transactions in the block being assembled.
    pub current_block_tx: i64,

    /// Current difficulty.
    pub difficulty: f64,

    /// Node error status line, empty when healthy.
    pub errors: String,

    /// Processor limit for generation.
    pub gen_proc_limit: i64,

    /// Whether the node is generating.
    pub generate: bool,

    /// Hash rate of the built-in miner.
    pub hashes_per_sec: i64,

    /// Transactions waiting in the memory pool.
    pub pooled_tx: i64,

    /// Whether the node runs on testnet.
    pub testnet: bool,
}

impl RpcMiningInfo {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "mininginfo")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            blocks: fields::long_field(obj, names::BLOCKS)?,
            current_block_size: fields::long_field(obj, names::CURRENT_BLOCK_SIZE)?,
            current_block_tx: fields::long_field(obj, names::CURRENT_BLOCK_TX)?,
            difficulty: fields::double_field(obj, names::DIFFICULTY)?,
            errors: fields::string_field(obj, names::ERRORS)?,
            gen_proc_limit: fields::long_field(obj, names::GEN_PROC_LIMIT)?,
            generate: fields::bool_field(obj, names::GENERATE)?,
            hashes_per_sec: fields::long_field(obj, names::HASHES_PER_SEC)?,
            pooled_tx: fields::long_field(obj, names::POOLED_TX)?,
            testnet: fields::bool_field(obj, names::TESTNET)?,
        })
    }
}
