// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_node_info.rs file belongs to the bitcoind-rs project and is free
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

/// The `getinfo` result: overall node and wallet status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcNodeInfo {
    /// Node version.
    pub version: i64,

    /// P2P protocol version.
    pub protocol_version: i64,

    /// Wallet format version.
    pub wallet_version: i64,

    /// Total wallet balance.
    pub balance: Decimal,

    /// Current chain height.
    pub blocks: i64,

    /// Clock offset against connected peers.
    pub time_offset: i64,

    /// Peer connection count.
    pub connections: i64,

    /// Configured proxy, empty when none.
    pub proxy: String,

    /// Current difficulty.
    pub difficulty: f64,

    /// Whether the node runs on testnet.
    pub testnet: bool,

    /// Unix time of the oldest key in the key pool.
    pub key_pool_oldest: i64,

    /// Number of pre-generated keys.
    pub key_pool_size: i64,

    /// Configured transaction fee.
    pub pay_tx_fee: Decimal,

    /// Node error status line, empty when healthy.
    pub errors: String,
}

impl RpcNodeInfo {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "info")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            version: fields::long_field(obj, names::VERSION)?,
            protocol_version: fields::long_field(obj, names::PROTOCOL_VERSION)?,
            wallet_version: fields::long_field(obj, names::WALLET_VERSION)?,
            balance: fields::decimal_field(obj, names::BALANCE)?,
            blocks: fields::long_field(obj, names::BLOCKS)?,
            time_offset: fields::long_field(obj, names::TIME_OFFSET)?,
            connections: fields::long_field(obj, names::CONNECTIONS)?,
            proxy: fields::string_field(obj, names::PROXY)?,
            difficulty: fields::double_field(obj, names::DIFFICULTY)?,
            testnet: fields::bool_field(obj, names::TESTNET)?,
            key_pool_oldest: fields::long_field(obj, names::KEY_POOL_OLDEST)?,
            key_pool_size: fields::long_field(obj, names::KEY_POOL_SIZE)?,
            pay_tx_fee: fields::decimal_field(obj, names::PAY_TX_FEE)?,
            errors: fields::string_field(obj, names::ERRORS)?,
        })
    }
}
