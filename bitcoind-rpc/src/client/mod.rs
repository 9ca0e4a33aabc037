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

//! The RPC call surface: engine, typed field helpers, and domain models.

pub mod fields;
pub mod models;
mod rpc_client;

pub use rpc_client::{AddNodeCommand, RpcClient};
