// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_transaction.rs file belongs to the bitcoind-rs project and is free
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

/// A wallet transaction as returned by `gettransaction`.
///
/// Also the payload delivered for wallet notifications; a degraded
/// notification carries only `tx_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTransaction {
    /// Net amount for the wallet.
    pub amount: Decimal,

    /// Fee paid, negative by node convention.
    pub fee: Decimal,

    /// Confirmations; 0 while unconfirmed.
    pub confirmations: i64,

    /// Hash of the containing block, empty while unconfirmed.
    pub block_hash: String,

    /// Index within the containing block.
    pub block_index: i64,

    /// Timestamp of the containing block.
    pub block_time: i64,

    /// Transaction id.
    pub tx_id: String,

    /// Transaction timestamp.
    pub time: i64,

    /// Unix time the wallet first saw the transaction.
    pub time_received: i64,

    /// Wallet comment.
    pub comment: String,

    /// Per-address movements, in node order.
    pub details: Vec<RpcTransactionDetail>,
}

impl RpcTransaction {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "transaction")? else {
            return Ok(Self::default());
        };
        let mut details = Vec::new();
        for item in fields::array_field(obj, names::DETAILS)? {
            details.push(RpcTransactionDetail::from_json(item)?);
        }
        Ok(Self {
            amount: fields::decimal_field(obj, names::AMOUNT)?,
            fee: fields::decimal_field(obj, names::FEE)?,
            confirmations: fields::long_field(obj, names::CONFIRMATIONS)?,
            block_hash: fields::string_field(obj, names::BLOCK_HASH)?,
            block_index: fields::long_field(obj, names::BLOCK_INDEX)?,
            block_time: fields::long_field(obj, names::BLOCK_TIME)?,
            tx_id: fields::string_field(obj, names::TX_ID)?,
            time: fields::long_field(obj, names::TIME)?,
            time_received: fields::long_field(obj, names::TIME_RECEIVED)?,
            comment: fields::string_field(obj, names::COMMENT)?,
            details,
        })
    }
}

/// One movement within a wallet transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcTransactionDetail {
    /// Account label.
    pub account: String,

    /// Address involved.
    pub address: String,

    /// Movement category: "send", "receive", "generate", "immature".
    pub category: String,

    /// Amount moved.
    pub amount: Decimal,

    /// Fee share, present on send details.
    pub fee: Decimal,
}

impl RpcTransactionDetail {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "detail")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            account: fields::string_field(obj, names::ACCOUNT)?,
            address: fields::string_field(obj, names::ADDRESS)?,
            category: fields::string_field(obj, names::CATEGORY)?,
            amount: fields::decimal_field(obj, names::AMOUNT)?,
            fee: fields::decimal_field(obj, names::FEE)?,
        })
    }
}
