use crossbeam_channel::{Receiver, select};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;
use unixtime_core::ports::Clock;

/// Wall-clock readings delivered by the periodic timer
pub type TickReceiver = Receiver<i64>;

/// A background thread that reads the clock once per interval.
///
/// Dropping the ticker stops the thread and joins it. The receiving end of
/// the tick channel is owned by the ticker, so readings still queued at that
/// point are discarded with it.
pub struct Ticker {
    stop_tx: Option<crossbeam_channel::Sender<()>>,
    ticks: TickReceiver,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let (tick_tx, tick_rx) = crossbeam_channel::unbounded();

        let handle = std::thread::spawn(move || {
            let timer = crossbeam_channel::tick(interval);
            loop {
                select! {
                    recv(timer) -> _ => {
                        if tick_tx.send(clock.now()).is_err() {
                            // Receiver dropped, stop ticking
                            break;
                        }
                    }
                    // Sender side dropped: the ticker was stopped
                    recv(stop_rx) -> _ => break,
                }
            }
            debug!("Ticker thread exiting");
        });

        debug!("Ticker started with interval {:?}", interval);
        Self {
            stop_tx: Some(stop_tx),
            ticks: tick_rx,
            handle: Some(handle),
        }
    }

    /// Readings that have arrived since the last drain, oldest first
    pub fn drain(&self) -> Vec<i64> {
        self.ticks.try_iter().collect()
    }

    /// Channel the readings arrive on
    pub fn receiver(&self) -> &TickReceiver {
        &self.ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnecting the stop channel wakes the thread's select
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
