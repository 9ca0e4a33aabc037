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

//! The push-notification bridge.
//!
//! The node's `blocknotify`/`walletnotify` hooks forward one hex
//! identifier per line over a bare TCP socket. The listener republishes
//! each line to its subscribers; the enrichers resolve identifiers into
//! full records through the RPC client before delivery.

mod enrich;
mod listener;

pub use enrich::{block_notification_handler, enriched_handler, transaction_notification_handler};
pub use listener::{NotificationHandler, NotificationListener};
