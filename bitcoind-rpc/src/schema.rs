// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// schema.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The wire schema: every RPC method name and JSON field name the client
//! exchanges with the node, in one place.
//!
//! The encoder-side wrappers consume [`methods`], the domain mappers
//! consume [`fields`]. Default values for absent fields live in the typed
//! extraction helpers of [`crate::client::fields`]: 0 for numbers, empty
//! string, `false`, empty list.

/// JSON-RPC protocol version constant carried in every request envelope.
pub const PROTOCOL_VERSION: &str = "2.0";

/// RPC method names understood by the node.
pub mod methods {
    pub const ADD_NODE: &str = "addnode";
    pub const BACKUP_WALLET: &str = "backupwallet";
    pub const CREATE_RAW_TRANSACTION: &str = "createrawtransaction";
    pub const DECODE_RAW_TRANSACTION: &str = "decoderawtransaction";
    pub const DUMP_PRIV_KEY: &str = "dumpprivkey";
    pub const ENCRYPT_WALLET: &str = "encryptwallet";
    pub const GET_ACCOUNT: &str = "getaccount";
    pub const GET_ACCOUNT_ADDRESS: &str = "getaccountaddress";
    pub const GET_ADDED_NODE_INFO: &str = "getaddednodeinfo";
    pub const GET_ADDRESSES_BY_ACCOUNT: &str = "getaddressesbyaccount";
    pub const GET_BALANCE: &str = "getbalance";
    pub const GET_BLOCK: &str = "getblock";
    pub const GET_BLOCK_COUNT: &str = "getblockcount";
    pub const GET_BLOCK_HASH: &str = "getblockhash";
    pub const GET_BLOCK_TEMPLATE: &str = "getblocktemplate";
    pub const GET_CONNECTION_COUNT: &str = "getconnectioncount";
    pub const GET_DIFFICULTY: &str = "getdifficulty";
    pub const GET_GENERATE: &str = "getgenerate";
    pub const GET_HASHES_PER_SEC: &str = "gethashespersec";
    pub const GET_INFO: &str = "getinfo";
    pub const GET_MINING_INFO: &str = "getmininginfo";
    pub const GET_NEW_ADDRESS: &str = "getnewaddress";
    pub const GET_PEER_INFO: &str = "getpeerinfo";
    pub const GET_RAW_TRANSACTION: &str = "getrawtransaction";
    pub const GET_TRANSACTION: &str = "gettransaction";
    pub const GET_TX_OUT_SET_INFO: &str = "gettxoutsetinfo";
    pub const GET_WORK: &str = "getwork";
    pub const IMPORT_PRIV_KEY: &str = "importprivkey";
    pub const KEY_POOL_REFILL: &str = "keypoolrefill";
    pub const LIST_ACCOUNTS: &str = "listaccounts";
    pub const LIST_RECEIVED_BY_ACCOUNT: &str = "listreceivedbyaccount";
    pub const LIST_RECEIVED_BY_ADDRESS: &str = "listreceivedbyaddress";
    pub const LIST_SINCE_BLOCK: &str = "listsinceblock";
    pub const SEND_FROM: &str = "sendfrom";
    pub const SEND_MANY: &str = "sendmany";
    pub const SEND_TO_ADDRESS: &str = "sendtoaddress";
    pub const SET_GENERATE: &str = "setgenerate";
    pub const SET_TX_FEE: &str = "settxfee";
    pub const SIGN_MESSAGE: &str = "signmessage";
    pub const SIGN_RAW_TRANSACTION: &str = "signrawtransaction";
    pub const STOP: &str = "stop";
    pub const SUBMIT_BLOCK: &str = "submitblock";
    pub const VALIDATE_ADDRESS: &str = "validateaddress";
    pub const VERIFY_MESSAGE: &str = "verifymessage";
    pub const WALLET_LOCK: &str = "walletlock";
    pub const WALLET_PASSPHRASE: &str = "walletpassphrase";
}

/// JSON field names appearing in envelopes and results.
pub mod fields {
    // Envelope members.
    pub const JSONRPC: &str = "jsonrpc";
    pub const METHOD: &str = "method";
    pub const PARAMS: &str = "params";
    pub const ID: &str = "id";
    pub const RESULT: &str = "result";
    pub const ERROR: &str = "error";
    pub const CODE: &str = "code";
    pub const MESSAGE: &str = "message";
    pub const DATA: &str = "data";

    // Shared across records.
    pub const ACCOUNT: &str = "account";
    pub const ADDRESS: &str = "address";
    pub const ADDRESSES: &str = "addresses";
    pub const AMOUNT: &str = "amount";
    pub const CONFIRMATIONS: &str = "confirmations";
    pub const HASH: &str = "hash";
    pub const TIME: &str = "time";
    pub const VERSION: &str = "version";

    // Blocks.
    pub const BITS: &str = "bits";
    pub const DIFFICULTY: &str = "difficulty";
    pub const HEIGHT: &str = "height";
    pub const MERKLE_ROOT: &str = "merkleroot";
    pub const NEXT_BLOCK_HASH: &str = "nextblockhash";
    pub const NONCE: &str = "nonce";
    pub const PREVIOUS_BLOCK_HASH: &str = "previousblockhash";
    pub const SIZE: &str = "size";
    pub const TX: &str = "tx";

    // Peers.
    pub const ADDR: &str = "addr";
    pub const BAN_SCORE: &str = "banscore";
    pub const BYTES_RECV: &str = "bytesrecv";
    pub const BYTES_SENT: &str = "bytessent";
    pub const CONN_TIME: &str = "conntime";
    pub const INBOUND: &str = "inbound";
    pub const LAST_RECV: &str = "lastrecv";
    pub const LAST_SEND: &str = "lastsend";
    pub const SERVICES: &str = "services";
    pub const STARTING_HEIGHT: &str = "startingheight";
    pub const SUBVER: &str = "subver";

    // Node and mining status.
    pub const BALANCE: &str = "balance";
    pub const BLOCKS: &str = "blocks";
    pub const CONNECTIONS: &str = "connections";
    pub const CURRENT_BLOCK_SIZE: &str = "currentblocksize";
    pub const CURRENT_BLOCK_TX: &str = "currentblocktx";
    pub const ERRORS: &str = "errors";
    pub const GENERATE: &str = "generate";
    pub const GEN_PROC_LIMIT: &str = "genproclimit";
    pub const HASHES_PER_SEC: &str = "hashespersec";
    pub const KEY_POOL_OLDEST: &str = "keypoololdest";
    pub const KEY_POOL_SIZE: &str = "keypoolsize";
    pub const PAY_TX_FEE: &str = "paytxfee";
    pub const POOLED_TX: &str = "pooledtx";
    pub const PROTOCOL_VERSION: &str = "protocolversion";
    pub const PROXY: &str = "proxy";
    pub const TESTNET: &str = "testnet";
    pub const TIME_OFFSET: &str = "timeoffset";
    pub const WALLET_VERSION: &str = "walletversion";

    // Transactions.
    pub const BLOCK_HASH: &str = "blockhash";
    pub const BLOCK_INDEX: &str = "blockindex";
    pub const BLOCK_TIME: &str = "blocktime";
    pub const CATEGORY: &str = "category";
    pub const COMMENT: &str = "comment";
    pub const DETAILS: &str = "details";
    pub const FEE: &str = "fee";
    pub const TIME_RECEIVED: &str = "timereceived";
    pub const TX_ID: &str = "txid";

    // Raw transactions and scripts.
    pub const ASM: &str = "asm";
    pub const COINBASE: &str = "coinbase";
    pub const HEX: &str = "hex";
    pub const LOCK_TIME: &str = "locktime";
    pub const N: &str = "n";
    pub const REQ_SIGS: &str = "reqSigs";
    pub const SCRIPT_PUB_KEY: &str = "scriptPubKey";
    pub const SCRIPT_SIG: &str = "scriptSig";
    pub const SEQUENCE: &str = "sequence";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const VIN: &str = "vin";
    pub const VOUT: &str = "vout";

    // UTXO set summary.
    pub const BEST_BLOCK: &str = "bestblock";
    pub const BYTES_SERIALIZED: &str = "bytes_serialized";
    pub const HASH_SERIALIZED: &str = "hash_serialized";
    pub const TOTAL_AMOUNT: &str = "total_amount";
    pub const TRANSACTIONS: &str = "transactions";
    pub const TX_OUTS: &str = "txouts";

    // listsinceblock.
    pub const LAST_BLOCK: &str = "lastblock";

    // getwork.
    pub const DATA_HEX: &str = "data";
    pub const HASH1: &str = "hash1";
    pub const MIDSTATE: &str = "midstate";
    pub const TARGET: &str = "target";

    // Block template.
    pub const COINBASE_AUX: &str = "coinbaseaux";
    pub const COINBASE_TXN: &str = "coinbasetxn";
    pub const COINBASE_VALUE: &str = "coinbasevalue";
    pub const CUR_TIME: &str = "curtime";
    pub const DEPENDS: &str = "depends";
    pub const MIN_TIME: &str = "mintime";
    pub const MUTABLE: &str = "mutable";
    pub const NONCE_RANGE: &str = "noncerange";
    pub const SIGOPS: &str = "sigops";
    pub const SIGOP_LIMIT: &str = "sigoplimit";
    pub const SIZE_LIMIT: &str = "sizelimit";

    // Added nodes.
    pub const ADDED_NODE: &str = "addednode";
    pub const CONNECTED: &str = "connected";

    // validateaddress.
    pub const IS_VALID: &str = "isvalid";
}
