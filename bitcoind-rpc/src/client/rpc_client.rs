// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_client.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::{JObject, JToken};
use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::client::fields;
use crate::client::models::{
    self, RpcAccount, RpcAddedNode, RpcAddress, RpcBlock, RpcBlockTemplate, RpcLastBlock,
    RpcMiningInfo, RpcNodeInfo, RpcOutputSetInfo, RpcPeer, RpcRawTransaction, RpcRequest,
    RpcResponse, RpcTransaction, RpcWork,
};
use crate::endpoint::Endpoint;
use crate::error::{ClientError, ClientResult};
use crate::schema::methods;
use crate::transport::HttpTransport;

/// Command argument for [`RpcClient::add_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddNodeCommand {
    Add,
    Remove,
    OneTry,
}

impl AddNodeCommand {
    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::OneTry => "onetry",
        }
    }
}

/// The RPC client: one endpoint, one credential pair, one synchronous
/// call at a time per caller.
///
/// Calls are self-contained (fresh correlation id, fresh connection),
/// so a single client can be shared across threads without locking.
#[derive(Debug)]
pub struct RpcClient {
    transport: HttpTransport,
}

impl RpcClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            transport: HttpTransport::new(endpoint),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.transport.endpoint()
    }

    /// Performs one JSON-RPC call and returns the raw `result` member.
    ///
    /// The reply's correlation id must equal the request's; a stale or
    /// foreign reply from a misbehaving or proxied endpoint fails the
    /// call. A present `error` object is surfaced verbatim as
    /// [`ClientError::Rpc`]. The result may be JSON null; typed wrappers
    /// map that to their default. Failed calls are never retried here.
    pub fn call(&self, method: &str, params: Option<Vec<JToken>>) -> ClientResult<JToken> {
        let request = RpcRequest::new(method, params);
        tracing::debug!(method, id = %request.id, "rpc call");

        let body = self.transport.post(request.to_bytes())?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ClientError::protocol("empty response"));
        }

        let token = JToken::parse_bytes(&body)
            .map_err(|err| ClientError::protocol(format!("malformed response body: {err}")))?;
        let response = RpcResponse::from_json(&token)?;

        if !response.id_matches(&request.id) {
            return Err(ClientError::protocol(format!(
                "id mismatch: sent {}, received {}",
                request.id, response.id
            )));
        }
        if let Some(error) = response.error {
            return Err(error.into());
        }
        Ok(response.result)
    }

    // Chain queries

    /// Returns the number of blocks in the longest chain (`getblockcount`).
    pub fn get_block_count(&self) -> ClientResult<i64> {
        let result = self.call(methods::GET_BLOCK_COUNT, None)?;
        result_long(&result, methods::GET_BLOCK_COUNT)
    }

    /// Returns the hash of the block at the given height (`getblockhash`).
    pub fn get_block_hash(&self, height: i64) -> ClientResult<String> {
        let result = self.call(
            methods::GET_BLOCK_HASH,
            Some(vec![JToken::Number(height as f64)]),
        )?;
        result_string(&result, methods::GET_BLOCK_HASH)
    }

    /// Returns the block with the given hash (`getblock`).
    pub fn get_block(&self, hash: &str) -> ClientResult<RpcBlock> {
        let result = self.call(
            methods::GET_BLOCK,
            Some(vec![JToken::String(hash.to_string())]),
        )?;
        RpcBlock::from_json(&result)
    }

    /// Returns the proof-of-work difficulty (`getdifficulty`).
    pub fn get_difficulty(&self) -> ClientResult<f64> {
        let result = self.call(methods::GET_DIFFICULTY, None)?;
        result_double(&result, methods::GET_DIFFICULTY)
    }

    /// Returns a summary of the UTXO set (`gettxoutsetinfo`).
    pub fn get_tx_out_set_info(&self) -> ClientResult<RpcOutputSetInfo> {
        let result = self.call(methods::GET_TX_OUT_SET_INFO, None)?;
        RpcOutputSetInfo::from_json(&result)
    }

    // Node queries

    /// Returns the open connection count (`getconnectioncount`).
    pub fn get_connection_count(&self) -> ClientResult<i64> {
        let result = self.call(methods::GET_CONNECTION_COUNT, None)?;
        result_long(&result, methods::GET_CONNECTION_COUNT)
    }

    /// Returns overall node and wallet status (`getinfo`).
    pub fn get_info(&self) -> ClientResult<RpcNodeInfo> {
        let result = self.call(methods::GET_INFO, None)?;
        RpcNodeInfo::from_json(&result)
    }

    /// Returns the connected peers (`getpeerinfo`).
    pub fn get_peer_info(&self) -> ClientResult<Vec<RpcPeer>> {
        let result = self.call(methods::GET_PEER_INFO, None)?;
        result_records(&result, methods::GET_PEER_INFO, RpcPeer::from_json)
    }

    /// Returns state of manually added nodes (`getaddednodeinfo`).
    pub fn get_added_node_info(
        &self,
        dns: bool,
        node: Option<&str>,
    ) -> ClientResult<Vec<RpcAddedNode>> {
        let mut params = vec![JToken::Boolean(dns)];
        if let Some(node) = node {
            params.push(JToken::String(node.to_string()));
        }
        let result = self.call(methods::GET_ADDED_NODE_INFO, Some(params))?;
        result_records(&result, methods::GET_ADDED_NODE_INFO, RpcAddedNode::from_json)
    }

    /// Adds, removes, or probes a manual peer (`addnode`).
    pub fn add_node(&self, node: &str, command: AddNodeCommand) -> ClientResult<()> {
        self.call(
            methods::ADD_NODE,
            Some(vec![
                JToken::String(node.to_string()),
                JToken::String(command.as_str().to_string()),
            ]),
        )?;
        Ok(())
    }

    /// Tells the node to shut down (`stop`). Further calls on this client
    /// fail with a transport error once the node is gone.
    pub fn stop(&self) -> ClientResult<String> {
        let result = self.call(methods::STOP, None)?;
        result_string(&result, methods::STOP)
    }

    // Mining

    /// Returns mining status (`getmininginfo`).
    pub fn get_mining_info(&self) -> ClientResult<RpcMiningInfo> {
        let result = self.call(methods::GET_MINING_INFO, None)?;
        RpcMiningInfo::from_json(&result)
    }

    /// Returns whether the built-in miner is running (`getgenerate`).
    pub fn get_generate(&self) -> ClientResult<bool> {
        let result = self.call(methods::GET_GENERATE, None)?;
        result_bool(&result, methods::GET_GENERATE)
    }

    /// Starts or stops the built-in miner (`setgenerate`).
    pub fn set_generate(&self, generate: bool, gen_proc_limit: i64) -> ClientResult<()> {
        self.call(
            methods::SET_GENERATE,
            Some(vec![
                JToken::Boolean(generate),
                JToken::Number(gen_proc_limit as f64),
            ]),
        )?;
        Ok(())
    }

    /// Returns the built-in miner's hash rate (`gethashespersec`).
    pub fn get_hashes_per_sec(&self) -> ClientResult<i64> {
        let result = self.call(methods::GET_HASHES_PER_SEC, None)?;
        result_long(&result, methods::GET_HASHES_PER_SEC)
    }

    /// Fetches work for an external miner (`getwork` without data).
    pub fn get_work(&self) -> ClientResult<RpcWork> {
        let result = self.call(methods::GET_WORK, None)?;
        RpcWork::from_json(&result)
    }

    /// Submits solved work (`getwork` with data). True means accepted.
    pub fn submit_work(&self, data: &str) -> ClientResult<bool> {
        let result = self.call(
            methods::GET_WORK,
            Some(vec![JToken::String(data.to_string())]),
        )?;
        result_bool(&result, methods::GET_WORK)
    }

    /// Fetches a block template for external assembly (`getblocktemplate`).
    pub fn get_block_template(&self) -> ClientResult<RpcBlockTemplate> {
        let result = self.call(methods::GET_BLOCK_TEMPLATE, None)?;
        RpcBlockTemplate::from_json(&result)
    }

    /// Submits an assembled block (`submitblock`). The returned string is
    /// empty on acceptance and carries the rejection reason otherwise.
    pub fn submit_block(&self, hex: &str) -> ClientResult<String> {
        let result = self.call(
            methods::SUBMIT_BLOCK,
            Some(vec![JToken::String(hex.to_string())]),
        )?;
        result_string(&result, methods::SUBMIT_BLOCK)
    }

    // Transactions

    /// Returns a verbose raw transaction (`getrawtransaction`).
    pub fn get_raw_transaction(&self, tx_id: &str) -> ClientResult<RpcRawTransaction> {
        let result = self.call(
            methods::GET_RAW_TRANSACTION,
            Some(vec![
                JToken::String(tx_id.to_string()),
                JToken::Number(1.0),
            ]),
        )?;
        RpcRawTransaction::from_json(&result)
    }

    /// Returns the serialized form of a transaction (`getrawtransaction`
    /// without the verbose flag).
    pub fn get_raw_transaction_hex(&self, tx_id: &str) -> ClientResult<String> {
        let result = self.call(
            methods::GET_RAW_TRANSACTION,
            Some(vec![JToken::String(tx_id.to_string())]),
        )?;
        result_string(&result, methods::GET_RAW_TRANSACTION)
    }

    /// Decodes a serialized transaction (`decoderawtransaction`).
    pub fn decode_raw_transaction(&self, hex: &str) -> ClientResult<RpcRawTransaction> {
        let result = self.call(
            methods::DECODE_RAW_TRANSACTION,
            Some(vec![JToken::String(hex.to_string())]),
        )?;
        RpcRawTransaction::from_json(&result)
    }

    /// Returns a wallet transaction (`gettransaction`).
    pub fn get_transaction(&self, tx_id: &str) -> ClientResult<RpcTransaction> {
        let result = self.call(
            methods::GET_TRANSACTION,
            Some(vec![JToken::String(tx_id.to_string())]),
        )?;
        RpcTransaction::from_json(&result)
    }

    /// Deliberately unsupported: building transactions from outpoints is
    /// left to wallet tooling.
    pub fn create_raw_transaction(&self) -> ClientResult<String> {
        Err(ClientError::not_implemented(
            methods::CREATE_RAW_TRANSACTION,
        ))
    }

    /// Deliberately unsupported, like [`Self::create_raw_transaction`].
    pub fn sign_raw_transaction(&self) -> ClientResult<String> {
        Err(ClientError::not_implemented(methods::SIGN_RAW_TRANSACTION))
    }

    // Wallet queries

    /// Returns wallet transactions since a block (`listsinceblock`).
    pub fn list_since_block(
        &self,
        block_hash: Option<&str>,
        target_confirmations: i64,
    ) -> ClientResult<RpcLastBlock> {
        let params = block_hash.map(|hash| {
            vec![
                JToken::String(hash.to_string()),
                JToken::Number(target_confirmations as f64),
            ]
        });
        let result = self.call(methods::LIST_SINCE_BLOCK, params)?;
        RpcLastBlock::from_json(&result)
    }

    /// Returns per-account balances (`listaccounts`).
    pub fn list_accounts(&self, min_conf: i64) -> ClientResult<IndexMap<String, Decimal>> {
        let result = self.call(
            methods::LIST_ACCOUNTS,
            Some(vec![JToken::Number(min_conf as f64)]),
        )?;
        models::account_balances_from_json(&result)
    }

    /// Returns totals received per account (`listreceivedbyaccount`).
    pub fn list_received_by_account(
        &self,
        min_conf: i64,
        include_empty: bool,
    ) -> ClientResult<Vec<RpcAccount>> {
        let result = self.call(
            methods::LIST_RECEIVED_BY_ACCOUNT,
            Some(vec![
                JToken::Number(min_conf as f64),
                JToken::Boolean(include_empty),
            ]),
        )?;
        result_records(
            &result,
            methods::LIST_RECEIVED_BY_ACCOUNT,
            RpcAccount::from_json,
        )
    }

    /// Returns totals received per address (`listreceivedbyaddress`).
    pub fn list_received_by_address(
        &self,
        min_conf: i64,
        include_empty: bool,
    ) -> ClientResult<Vec<RpcAddress>> {
        let result = self.call(
            methods::LIST_RECEIVED_BY_ADDRESS,
            Some(vec![
                JToken::Number(min_conf as f64),
                JToken::Boolean(include_empty),
            ]),
        )?;
        result_records(
            &result,
            methods::LIST_RECEIVED_BY_ADDRESS,
            RpcAddress::from_json,
        )
    }

    /// Returns the account a given address belongs to (`getaccount`).
    pub fn get_account(&self, address: &str) -> ClientResult<String> {
        let result = self.call(
            methods::GET_ACCOUNT,
            Some(vec![JToken::String(address.to_string())]),
        )?;
        result_string(&result, methods::GET_ACCOUNT)
    }

    /// Returns the current receiving address of an account
    /// (`getaccountaddress`).
    pub fn get_account_address(&self, account: &str) -> ClientResult<String> {
        let result = self.call(
            methods::GET_ACCOUNT_ADDRESS,
            Some(vec![JToken::String(account.to_string())]),
        )?;
        result_string(&result, methods::GET_ACCOUNT_ADDRESS)
    }

    /// Returns every address of an account (`getaddressesbyaccount`).
    pub fn get_addresses_by_account(&self, account: &str) -> ClientResult<Vec<String>> {
        let result = self.call(
            methods::GET_ADDRESSES_BY_ACCOUNT,
            Some(vec![JToken::String(account.to_string())]),
        )?;
        let Some(items) = fields::expect_array(&result, methods::GET_ADDRESSES_BY_ACCOUNT)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| result_string(item, methods::GET_ADDRESSES_BY_ACCOUNT))
            .collect()
    }

    /// Returns a balance (`getbalance`): the whole wallet's, or one
    /// account's when a label is given.
    pub fn get_balance(&self, account: Option<&str>, min_conf: i64) -> ClientResult<Decimal> {
        let params = account.map(|label| {
            vec![
                JToken::String(label.to_string()),
                JToken::Number(min_conf as f64),
            ]
        });
        let result = self.call(methods::GET_BALANCE, params)?;
        result_decimal(&result, methods::GET_BALANCE)
    }

    /// Creates a fresh receiving address (`getnewaddress`).
    pub fn get_new_address(&self, account: Option<&str>) -> ClientResult<String> {
        let params = account.map(|label| vec![JToken::String(label.to_string())]);
        let result = self.call(methods::GET_NEW_ADDRESS, params)?;
        result_string(&result, methods::GET_NEW_ADDRESS)
    }

    /// Checks whether an address is well-formed for this network
    /// (`validateaddress`).
    pub fn validate_address(&self, address: &str) -> ClientResult<bool> {
        let result = self.call(
            methods::VALIDATE_ADDRESS,
            Some(vec![JToken::String(address.to_string())]),
        )?;
        match fields::expect_object(&result, methods::VALIDATE_ADDRESS)? {
            Some(obj) => fields::bool_field(obj, crate::schema::fields::IS_VALID),
            None => Ok(false),
        }
    }

    // Wallet spending

    /// Sends coins to an address (`sendtoaddress`), returning the tx id.
    pub fn send_to_address(
        &self,
        address: &str,
        amount: Decimal,
        comment: Option<&str>,
        comment_to: Option<&str>,
    ) -> ClientResult<String> {
        let mut params = vec![
            JToken::String(address.to_string()),
            decimal_param(amount),
        ];
        if let Some(comment) = comment {
            params.push(JToken::String(comment.to_string()));
            if let Some(comment_to) = comment_to {
                params.push(JToken::String(comment_to.to_string()));
            }
        }
        let result = self.call(methods::SEND_TO_ADDRESS, Some(params))?;
        result_string(&result, methods::SEND_TO_ADDRESS)
    }

    /// Sends coins from one account (`sendfrom`), returning the tx id.
    pub fn send_from(
        &self,
        from_account: &str,
        to_address: &str,
        amount: Decimal,
        min_conf: i64,
    ) -> ClientResult<String> {
        let result = self.call(
            methods::SEND_FROM,
            Some(vec![
                JToken::String(from_account.to_string()),
                JToken::String(to_address.to_string()),
                decimal_param(amount),
                JToken::Number(min_conf as f64),
            ]),
        )?;
        result_string(&result, methods::SEND_FROM)
    }

    /// Sends to several addresses in one transaction (`sendmany`),
    /// returning the tx id.
    pub fn send_many(
        &self,
        from_account: &str,
        amounts: &IndexMap<String, Decimal>,
        min_conf: i64,
    ) -> ClientResult<String> {
        let mut outputs = JObject::new();
        for (address, amount) in amounts {
            outputs.insert(address.clone(), decimal_param(*amount));
        }
        let result = self.call(
            methods::SEND_MANY,
            Some(vec![
                JToken::String(from_account.to_string()),
                JToken::Object(outputs),
                JToken::Number(min_conf as f64),
            ]),
        )?;
        result_string(&result, methods::SEND_MANY)
    }

    /// Sets the per-kilobyte transaction fee (`settxfee`).
    pub fn set_tx_fee(&self, amount: Decimal) -> ClientResult<bool> {
        let result = self.call(methods::SET_TX_FEE, Some(vec![decimal_param(amount)]))?;
        result_bool(&result, methods::SET_TX_FEE)
    }

    // Wallet maintenance

    /// Copies the wallet file to the given destination (`backupwallet`).
    pub fn backup_wallet(&self, destination: &str) -> ClientResult<()> {
        self.call(
            methods::BACKUP_WALLET,
            Some(vec![JToken::String(destination.to_string())]),
        )?;
        Ok(())
    }

    /// Exports the private key of an address (`dumpprivkey`).
    pub fn dump_priv_key(&self, address: &str) -> ClientResult<String> {
        let result = self.call(
            methods::DUMP_PRIV_KEY,
            Some(vec![JToken::String(address.to_string())]),
        )?;
        result_string(&result, methods::DUMP_PRIV_KEY)
    }

    /// Imports a private key (`importprivkey`).
    pub fn import_priv_key(&self, key: &str, label: Option<&str>) -> ClientResult<()> {
        let mut params = vec![JToken::String(key.to_string())];
        if let Some(label) = label {
            params.push(JToken::String(label.to_string()));
        }
        self.call(methods::IMPORT_PRIV_KEY, Some(params))?;
        Ok(())
    }

    /// Encrypts the wallet (`encryptwallet`). The node restarts afterwards.
    pub fn encrypt_wallet(&self, passphrase: &str) -> ClientResult<String> {
        let result = self.call(
            methods::ENCRYPT_WALLET,
            Some(vec![JToken::String(passphrase.to_string())]),
        )?;
        result_string(&result, methods::ENCRYPT_WALLET)
    }

    /// Unlocks the wallet for a number of seconds (`walletpassphrase`).
    pub fn wallet_passphrase(&self, passphrase: &str, timeout_secs: i64) -> ClientResult<()> {
        self.call(
            methods::WALLET_PASSPHRASE,
            Some(vec![
                JToken::String(passphrase.to_string()),
                JToken::Number(timeout_secs as f64),
            ]),
        )?;
        Ok(())
    }

    /// Locks the wallet again (`walletlock`).
    pub fn wallet_lock(&self) -> ClientResult<()> {
        self.call(methods::WALLET_LOCK, None)?;
        Ok(())
    }

    /// Tops up the pre-generated key pool (`keypoolrefill`).
    pub fn key_pool_refill(&self) -> ClientResult<()> {
        self.call(methods::KEY_POOL_REFILL, None)?;
        Ok(())
    }

    /// Signs a message with an address key (`signmessage`).
    pub fn sign_message(&self, address: &str, message: &str) -> ClientResult<String> {
        let result = self.call(
            methods::SIGN_MESSAGE,
            Some(vec![
                JToken::String(address.to_string()),
                JToken::String(message.to_string()),
            ]),
        )?;
        result_string(&result, methods::SIGN_MESSAGE)
    }

    /// Verifies a signed message (`verifymessage`).
    pub fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> ClientResult<bool> {
        let result = self.call(
            methods::VERIFY_MESSAGE,
            Some(vec![
                JToken::String(address.to_string()),
                JToken::String(signature.to_string()),
                JToken::String(message.to_string()),
            ]),
        )?;
        result_bool(&result, methods::VERIFY_MESSAGE)
    }
}

fn decimal_param(amount: Decimal) -> JToken {
    JToken::Number(amount.to_f64().unwrap_or_default())
}

// Result coercions: a JSON-null result maps to the type's default, any
// other unexpected shape is a protocol-version mismatch.

fn result_string(token: &JToken, context: &str) -> ClientResult<String> {
    match token {
        JToken::Null => Ok(String::new()),
        JToken::String(text) => Ok(text.clone()),
        other => Err(ClientError::type_mismatch(
            context,
            "string",
            other.type_name(),
        )),
    }
}

fn result_long(token: &JToken, context: &str) -> ClientResult<i64> {
    match token {
        JToken::Null => Ok(0),
        JToken::Number(value) => Ok(*value as i64),
        other => Err(ClientError::type_mismatch(
            context,
            "number",
            other.type_name(),
        )),
    }
}

fn result_double(token: &JToken, context: &str) -> ClientResult<f64> {
    match token {
        JToken::Null => Ok(0.0),
        JToken::Number(value) => Ok(*value),
        other => Err(ClientError::type_mismatch(
            context,
            "number",
            other.type_name(),
        )),
    }
}

fn result_decimal(token: &JToken, context: &str) -> ClientResult<Decimal> {
    use rust_decimal::prelude::FromPrimitive;
    match token {
        JToken::Null => Ok(Decimal::ZERO),
        JToken::Number(value) => Decimal::from_f64(*value)
            .ok_or_else(|| ClientError::type_mismatch(context, "decimal number", "number")),
        other => Err(ClientError::type_mismatch(
            context,
            "number",
            other.type_name(),
        )),
    }
}

fn result_bool(token: &JToken, context: &str) -> ClientResult<bool> {
    match token {
        JToken::Null => Ok(false),
        JToken::Boolean(value) => Ok(*value),
        other => Err(ClientError::type_mismatch(
            context,
            "boolean",
            other.type_name(),
        )),
    }
}

fn result_records<T>(
    token: &JToken,
    context: &str,
    decode: impl Fn(&JToken) -> ClientResult<T>,
) -> ClientResult<Vec<T>> {
    let Some(items) = fields::expect_array(token, context)? else {
        return Ok(Vec::new());
    };
    items.iter().map(decode).collect()
}
