// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// mod.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Domain records decoded from RPC results.
//!
//! Each record is a flat value object: every field is independently
//! optional on the wire and decodes to a documented default when absent.
//! Nested records are owned by value. Each mapper accepts JSON null and
//! returns the zero-value record; a value of the wrong JSON type fails
//! with a type mismatch.

mod rpc_account;
mod rpc_added_node;
mod rpc_address;
mod rpc_block;
mod rpc_block_template;
mod rpc_coinbase;
mod rpc_last_block;
mod rpc_mining_info;
mod rpc_node_info;
mod rpc_output_set_info;
mod rpc_peer;
mod rpc_raw_transaction;
mod rpc_request;
mod rpc_response;
mod rpc_script;
mod rpc_transaction;
mod rpc_work;

pub use rpc_account::RpcAccount;
pub use rpc_added_node::{RpcAddedNode, RpcAddedNodeAddress};
pub use rpc_address::RpcAddress;
pub use rpc_block::RpcBlock;
pub use rpc_block_template::{RpcBlockTemplate, RpcTemplateTransaction};
pub use rpc_coinbase::RpcCoinbase;
pub use rpc_last_block::RpcLastBlock;
pub use rpc_mining_info::RpcMiningInfo;
pub use rpc_node_info::RpcNodeInfo;
pub use rpc_output_set_info::RpcOutputSetInfo;
pub use rpc_peer::RpcPeer;
pub use rpc_raw_transaction::{RpcRawTransaction, RpcTransactionInput, RpcTransactionOutput};
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use rpc_script::{RpcScript, RpcScriptPubKey};
pub use rpc_transaction::{RpcTransaction, RpcTransactionDetail};
pub use rpc_work::RpcWork;

use bitcoind_json::JToken;
use indexmap::IndexMap;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::client::fields;
use crate::error::{ClientError, ClientResult};

/// Decodes the `listaccounts` result: an object whose keys are account
/// labels and whose values are balances. Entry order follows the node's
/// output; callers treat it as a map.
pub fn account_balances_from_json(token: &JToken) -> ClientResult<IndexMap<String, Decimal>> {
    let Some(obj) = fields::expect_object(token, "listaccounts")? else {
        return Ok(IndexMap::new());
    };
    let mut balances = IndexMap::with_capacity(obj.len());
    for (account, value) in obj {
        let amount = match value {
            JToken::Null => Decimal::ZERO,
            JToken::Number(number) => Decimal::from_f64(*number)
                .ok_or_else(|| ClientError::type_mismatch(account.clone(), "decimal number", "number"))?,
            other => {
                return Err(ClientError::type_mismatch(
                    account.clone(),
                    "number",
                    other.type_name(),
                ));
            }
        };
        balances.insert(account.clone(), amount);
    }
    Ok(balances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_balances_keep_entry_order() {
        let token = JToken::parse(r#"{"":1.5,"savings":0.25,"mining":10}"#).unwrap();
        let balances = account_balances_from_json(&token).unwrap();
        let keys: Vec<&String> = balances.keys().collect();
        assert_eq!(keys, ["", "savings", "mining"]);
        assert_eq!(balances["mining"], Decimal::from(10));
    }

    #[test]
    fn account_balances_null_is_empty() {
        assert!(account_balances_from_json(&JToken::Null).unwrap().is_empty());
    }

    #[test]
    fn account_balances_reject_non_object() {
        assert!(matches!(
            account_balances_from_json(&JToken::Number(4.0)),
            Err(ClientError::TypeMismatch { .. })
        ));
    }
}
