// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// listener.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use parking_lot::Mutex;
use std::io::{self, BufRead, BufReader};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A subscriber callback. Invoked synchronously on the listener thread,
/// so handlers must stay fast or hand work off internally.
pub type NotificationHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Accepts the node-side notifier's connections and fans raw
/// notification lines out to subscribers.
///
/// The port is bound at construction; [`run`](Self::run) is started once
/// on a dedicated thread and serves one connection at a time. There is
/// no stop API: the listener runs until its socket fails, which in
/// practice means process shutdown.
pub struct NotificationListener {
    listener: TcpListener,
    subscribers: Mutex<Vec<(u64, NotificationHandler)>>,
    next_token: AtomicU64,
}

impl NotificationListener {
    /// Binds the notification port.
    pub fn bind(addr: impl ToSocketAddrs) -> io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            subscribers: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(1),
        })
    }

    /// The bound address, useful when binding port 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Registers a subscriber. Subscribers are invoked in subscription
    /// order. Returns a token for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, handler: F) -> u64
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscribe_handler(Arc::new(handler))
    }

    /// Registers an already-shared handler, e.g. one built by
    /// [`crate::notify::enriched_handler`].
    pub fn subscribe_handler(&self, handler: NotificationHandler) -> u64 {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((token, handler));
        token
    }

    /// Removes a subscriber. Returns whether the token was registered.
    pub fn unsubscribe(&self, token: u64) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(registered, _)| *registered != token);
        subscribers.len() != before
    }

    /// The accept/receive loop.
    ///
    /// Serves one connection at a time: read newline-delimited lines
    /// until the peer closes or sends a blank line, publish each line,
    /// then return to accepting. A read failure on one connection is
    /// logged and never terminates the loop; an accept failure is
    /// unrecoverable and stops the listener.
    pub fn run(&self) {
        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(connection) => connection,
                Err(err) => {
                    tracing::error!(%err, "notification accept failed, stopping listener");
                    return;
                }
            };
            tracing::debug!(%peer, "notifier connected");
            if let Err(err) = self.receive(stream) {
                tracing::warn!(%peer, %err, "notification connection dropped");
            }
        }
    }

    fn receive(&self, stream: TcpStream) -> io::Result<()> {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            let line = line?;
            let payload = line.trim();
            if payload.is_empty() {
                break;
            }
            self.publish(payload);
        }
        Ok(())
    }

    /// Delivers one payload to every subscriber, synchronously and in
    /// subscription order. Iterates a snapshot so subscribers may
    /// subscribe/unsubscribe concurrently without racing the walk.
    fn publish(&self, payload: &str) {
        let snapshot: Vec<NotificationHandler> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        tracing::debug!(payload, subscribers = snapshot.len(), "publishing notification");
        for handler in snapshot {
            handler(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::thread;
    use std::time::Duration;

    fn collect_into(sink: Arc<Mutex<Vec<String>>>) -> impl Fn(&str) + Send + Sync {
        move |payload: &str| sink.lock().push(payload.to_string())
    }

    fn wait_for<F: Fn() -> bool>(ready: F) {
        for _ in 0..100 {
            if ready() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("condition not reached within a second");
    }

    #[test]
    fn publishes_lines_to_subscribers_in_order() {
        let listener = Arc::new(NotificationListener::bind("127.0.0.1:0").unwrap());
        let addr = listener.local_addr().unwrap();

        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            listener.subscribe(move |payload| {
                order.lock().push(format!("{tag}:{payload}"));
            });
        }

        let runner = Arc::clone(&listener);
        thread::spawn(move || runner.run());

        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"00000000abc\n").unwrap();
        drop(stream);

        wait_for(|| order.lock().len() == 2);
        assert_eq!(
            *order.lock(),
            ["first:00000000abc", "second:00000000abc"]
        );
    }

    #[test]
    fn survives_one_bad_connection_and_keeps_accepting() {
        let listener = Arc::new(NotificationListener::bind("127.0.0.1:0").unwrap());
        let addr = listener.local_addr().unwrap();

        let received = Arc::new(Mutex::new(Vec::new()));
        listener.subscribe(collect_into(Arc::clone(&received)));

        let runner = Arc::clone(&listener);
        thread::spawn(move || runner.run());

        // First peer disappears mid-line without a newline.
        let mut first = TcpStream::connect(addr).unwrap();
        first.write_all(b"truncated").unwrap();
        drop(first);

        let mut second = TcpStream::connect(addr).unwrap();
        second.write_all(b"deadbeef\n").unwrap();
        drop(second);

        wait_for(|| received.lock().contains(&"deadbeef".to_string()));
    }

    #[test]
    fn blank_line_ends_the_connection_but_not_the_listener() {
        let listener = Arc::new(NotificationListener::bind("127.0.0.1:0").unwrap());
        let addr = listener.local_addr().unwrap();

        let received = Arc::new(Mutex::new(Vec::new()));
        listener.subscribe(collect_into(Arc::clone(&received)));

        let runner = Arc::clone(&listener);
        thread::spawn(move || runner.run());

        let mut first = TcpStream::connect(addr).unwrap();
        first.write_all(b"aa11\n\nignored-after-blank\n").unwrap();
        drop(first);

        let mut second = TcpStream::connect(addr).unwrap();
        second.write_all(b"bb22\n").unwrap();
        drop(second);

        wait_for(|| received.lock().contains(&"bb22".to_string()));
        let seen = received.lock().clone();
        assert!(seen.contains(&"aa11".to_string()));
        assert!(!seen.contains(&"ignored-after-blank".to_string()));
    }

    #[test]
    fn unsubscribed_handlers_stop_receiving() {
        let listener = Arc::new(NotificationListener::bind("127.0.0.1:0").unwrap());
        let addr = listener.local_addr().unwrap();

        let kept = Arc::new(Mutex::new(Vec::new()));
        let dropped = Arc::new(Mutex::new(Vec::new()));
        listener.subscribe(collect_into(Arc::clone(&kept)));
        let token = listener.subscribe(collect_into(Arc::clone(&dropped)));
        assert!(listener.unsubscribe(token));
        assert!(!listener.unsubscribe(token));

        let runner = Arc::clone(&listener);
        thread::spawn(move || runner.run());

        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"cc33\n").unwrap();
        drop(stream);

        wait_for(|| !kept.lock().is_empty());
        assert!(dropped.lock().is_empty());
    }
}
