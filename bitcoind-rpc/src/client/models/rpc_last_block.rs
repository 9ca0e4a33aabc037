// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_last_block.rs file belongs to the bitcoind-rs project and is free
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

use super::rpc_transaction::RpcTransaction;

/// The `listsinceblock` result: wallet transactions since a block, plus
/// the cursor to resume from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcLastBlock {
    /// Hash to pass to the next `listsinceblock` call.
    pub last_block: String,

    /// Wallet transactions since the requested block, in node order.
    pub transactions: Vec<RpcTransaction>,
}

impl RpcLastBlock {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "sinceblock")? else {
            return Ok(Self::default());
        };
        let mut transactions = Vec::new();
        for item in fields::array_field(obj, names::TRANSACTIONS)? {
            transactions.push(RpcTransaction::from_json(item)?);
        }
        Ok(Self {
            last_block: fields::string_field(obj, names::LAST_BLOCK)?,
            transactions,
        })
    }
}
