//! A cancellable periodic timer.
//!
//! The ticker thread never touches playback state. It only sends a unit
//! message per period; the owner drains them and calls
//! `PlaybackController::tick` on its own thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start a thread that emits one tick every `period`.
    pub fn spawn(period: Duration) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel::<()>();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let join = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            break;
                        }
                    }
                    // Explicit stop or the owner went away.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            ticks: tick_rx,
            stop: Some(stop_tx),
            join: Some(join),
        }
    }

    /// Number of ticks delivered since the last call. Never blocks.
    pub fn pending(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Cancel the timer and join its thread. Safe to call more than once.
    pub fn stop(&mut self) {
        // Dropping the sender wakes the thread immediately.
        self.stop.take();
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
