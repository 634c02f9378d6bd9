//! Delayed reveal of the "next" control
//!
//! Each answer schedules a fire-and-forget timer task. When it fires, the
//! ticket is sent back to the UI loop over a channel, which wakes the loop
//! immediately; the controller decides whether the ticket still applies.

use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::controller::RevealTicket;

/// Timer tasks plus the channel they report back on
#[derive(Debug)]
pub struct RevealScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<RevealTicket>,
    rx: mpsc::UnboundedReceiver<RevealTicket>,
}

impl RevealScheduler {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { delay, tx, rx }
    }

    /// Spawn a timer that delivers `ticket` after the delay
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, ticket: RevealTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver only disappears when the app is shutting down
            let _ = tx.send(ticket);
        });
    }

    /// Wait for the next fired timer
    ///
    /// Never yields `None` in practice: the scheduler keeps a sender alive.
    pub async fn recv(&mut self) -> Option<RevealTicket> {
        self.rx.recv().await
    }
}
