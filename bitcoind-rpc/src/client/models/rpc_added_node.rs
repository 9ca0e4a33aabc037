// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_added_node.rs file belongs to the bitcoind-rs project and is free
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

/// One `getaddednodeinfo` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcAddedNode {
    /// The node as it was added.
    pub added_node: String,

    /// Whether any connection to it is open.
    pub connected: bool,

    /// Resolved addresses and their connection state.
    pub addresses: Vec<RpcAddedNodeAddress>,
}

impl RpcAddedNode {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "addednode")? else {
            return Ok(Self::default());
        };
        let mut addresses = Vec::new();
        for item in fields::array_field(obj, names::ADDRESSES)? {
            addresses.push(RpcAddedNodeAddress::from_json(item)?);
        }
        Ok(Self {
            added_node: fields::string_field(obj, names::ADDED_NODE)?,
            connected: fields::bool_field(obj, names::CONNECTED)?,
            addresses,
        })
    }
}

/// One resolved address of an added node. The node reports the per-address
/// connection state as a string: "inbound", "outbound", or "false".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcAddedNodeAddress {
    /// Resolved address as host:port.
    pub address: String,

    /// Connection direction, or "false" when not connected.
    pub connected: String,
}

impl RpcAddedNodeAddress {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "addednode address")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            address: fields::string_field(obj, names::ADDRESS)?,
            connected: fields::string_field(obj, names::CONNECTED)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_addresses() {
        let token = JToken::parse(
            r#"{
                "addednode": "192.168.0.201",
                "connected": true,
                "addresses": [
                    {"address": "192.168.0.201:8333", "connected": "outbound"},
                    {"address": "192.168.0.201:18333", "connected": "false"}
                ]
            }"#,
        )
        .unwrap();
        let node = RpcAddedNode::from_json(&token).unwrap();
        assert!(node.connected);
        assert_eq!(node.addresses.len(), 2);
        assert_eq!(node.addresses[0].connected, "outbound");
        assert_eq!(node.addresses[1].connected, "false");
    }

    #[test]
    fn null_decodes_to_zero_value() {
        assert_eq!(
            RpcAddedNode::from_json(&JToken::Null).unwrap(),
            RpcAddedNode::default()
        );
    }
}
