//! Event sources for the app loop
//!
//! Terminal input is read on a dedicated thread and forwarded over a tokio
//! channel, so the loop can wait on key presses and reveal timers together
//! and wake as soon as either arrives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::controller::RevealTicket;

/// Something the app loop has to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Key press
    Key(KeyEvent),
    /// A reveal timer fired
    Reveal(RevealTicket),
    /// Terminal was resized and needs a redraw
    Resize,
    /// The input thread stopped; nothing more can be read
    InputClosed,
}

/// Background thread forwarding terminal input
pub struct InputReader {
    rx: mpsc::UnboundedReceiver<Event>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputReader {
    /// Start reading input. `poll_interval` bounds how long the thread takes
    /// to notice that it should stop.
    pub fn spawn(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            while !thread_stop.load(Ordering::Relaxed) {
                let event = match event::poll(poll_interval) {
                    Ok(true) => event::read(),
                    Ok(false) => continue,
                    Err(e) => Err(e),
                };
                match event {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal input failed");
                        break;
                    }
                }
            }
        });

        Self {
            rx,
            stop,
            handle: Some(handle),
        }
    }

    pub fn events(&mut self) -> &mut mpsc::UnboundedReceiver<Event> {
        &mut self.rx
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Translate a raw terminal event. Release/repeat key events some terminals
/// report, mouse and focus events yield `None`.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}
