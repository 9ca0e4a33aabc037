// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_account.rs file belongs to the bitcoind-rs project and is free
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

/// One `listreceivedbyaccount` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcAccount {
    /// Account label.
    pub account: String,

    /// Total received by the account.
    pub amount: Decimal,

    /// Confirmations of the most recent included transaction.
    pub confirmations: i64,
}

impl RpcAccount {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "account")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            account: fields::string_field(obj, names::ACCOUNT)?,
            amount: fields::decimal_field(obj, names::AMOUNT)?,
            confirmations: fields::long_field(obj, names::CONFIRMATIONS)?,
        })
    }
}
