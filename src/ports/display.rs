//! One-way outbound display channel
//!
//! The core publishes label updates for a separate overlay consumer and
//! never waits on or reads from the channel. A hung or absent consumer
//! must not stall the control loop, so sends ignore errors.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::types::Vec2;

/// Notification payloads understood by the overlay consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUpdate {
    /// Replace all on-screen labels with (text, position) pairs
    Labels(Vec<(String, Vec2)>),
    /// Remove all on-screen labels
    Clear,
}

/// Non-blocking sender half of the display channel
#[derive(Clone)]
pub struct DisplaySink {
    tx: Option<Sender<DisplayUpdate>>,
}

impl DisplaySink {
    /// Create a connected sink and its consumer end
    pub fn channel() -> (Self, Receiver<DisplayUpdate>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Create a sink that discards every update (headless runs)
    pub fn disconnected() -> Self {
        Self { tx: None }
    }

    /// Send an update; a closed or absent consumer is ignored
    pub fn send(&self, update: DisplayUpdate) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(update);
        }
    }

    pub fn labels(&self, labels: Vec<(String, Vec2)>) {
        self.send(DisplayUpdate::Labels(labels));
    }

    pub fn clear(&self) {
        self.send(DisplayUpdate::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_reaches_consumer() {
        let (sink, rx) = DisplaySink::channel();
        sink.clear();
        assert_eq!(rx.recv().unwrap(), DisplayUpdate::Clear);
    }

    #[test]
    fn test_send_after_consumer_drop_is_silent() {
        let (sink, rx) = DisplaySink::channel();
        drop(rx);
        sink.labels(vec![("Ahri".into(), Vec2::new(10, 10))]);
    }

    #[test]
    fn test_disconnected_sink_is_silent() {
        DisplaySink::disconnected().clear();
    }
}
