//! Wall-clock tick source for computer vs computer games.

use std::time::Duration;

use cardwar_engine::scheduler::{TickScheduler, TimerHandle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Arms a tokio interval per game and forwards each tick, tagged with the
/// game's generation, over a channel.
///
/// Must be used from inside a tokio runtime: arming spawns a task.
#[derive(Debug)]
pub struct IntervalScheduler {
    ticks: mpsc::UnboundedSender<u64>,
}

impl IntervalScheduler {
    pub fn new(ticks: mpsc::UnboundedSender<u64>) -> Self {
        Self { ticks }
    }

    /// Creates a scheduler together with the receiving end of its ticks.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, generation: u64, every: Duration) -> Box<dyn TimerHandle> {
        let ticks = self.ticks.clone();
        let task = tokio::spawn(async move {
            // first tick after one full interval
            let mut interval = time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(generation).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, every = ?every, "interval armed");
        Box::new(IntervalTimer {
            task,
            cancelled: false,
        })
    }
}

struct IntervalTimer {
    task: JoinHandle<()>,
    cancelled: bool,
}

impl TimerHandle for IntervalTimer {
    fn cancel(&mut self) {
        self.task.abort();
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
