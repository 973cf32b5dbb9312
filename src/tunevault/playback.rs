//! Playback progress ticking.
//!
//! The one long-lived operation in the crate: a background thread that
//! reports elapsed seconds once per second until the song duration is
//! reached or the clock is stopped. Everything else in the library is
//! single-shot.

use log::debug;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// A cancellable once-per-second progress clock.
///
/// `stop()` is synchronous: it signals the tick thread and joins it, so no
/// callback can fire after `stop` returns. Dropping the clock stops it the
/// same way.
pub struct ProgressClock {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressClock {
    /// Start ticking from `start_second` up to `duration` seconds. The
    /// callback receives each elapsed-seconds value in order, ending with
    /// `duration` itself, after which the thread exits on its own. A clock
    /// started at or past `duration` exits without ticking at all.
    pub fn start<F>(start_second: u32, duration: u32, mut on_tick: F) -> Self
    where
        F: FnMut(u32) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut elapsed = start_second;
            loop {
                // Bound check first: a clock started at or past the end
                // must exit without ever ticking beyond the duration.
                if elapsed >= duration {
                    debug!("progress clock reached end of song ({}s)", duration);
                    return;
                }
                match stop_rx.recv_timeout(TICK) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        debug!("progress clock stopped at {}s", elapsed);
                        return;
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                }
                elapsed += 1;
                on_tick(elapsed);
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stop the clock and wait for the tick thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Send fails once the thread has already exited; either way the
        // join below is what provides the no-tick-after-return guarantee.
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressClock {
    fn drop(&mut self) {
        self.shutdown();
    }
}
