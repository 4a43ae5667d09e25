//! Seam between the game controller and whatever drives automated rounds.
//!
//! The controller arms a repeating timer when an automated session starts and
//! keeps the returned [`TimerHandle`] inside the session. Each tick carries the
//! generation id of the session that armed it so a tick that outlives its
//! session can be recognized and dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Default cadence of automated rounds.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1600);

pub trait TickScheduler {
    /// Start delivering `generation` every `every` until the handle is cancelled.
    fn schedule_repeating(&mut self, generation: u64, every: Duration) -> Box<dyn TimerHandle>;
}

pub trait TimerHandle {
    /// Stops further ticks. Must take effect before returning.
    fn cancel(&mut self);
    fn is_cancelled(&self) -> bool;
}

/// Timer armed through a [`ManualScheduler`].
#[derive(Debug, Clone)]
pub struct ArmedTimer {
    pub generation: u64,
    pub every: Duration,
    cancelled: Rc<Cell<bool>>,
}

impl ArmedTimer {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Scheduler that never fires on its own: it records every timer it arms and
/// the caller delivers ticks through `GameController::tick`.
///
/// Clones share the same record, so a test can keep one clone while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    armed: Rc<RefCell<Vec<ArmedTimer>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn armed(&self) -> Vec<ArmedTimer> {
        self.armed.borrow().clone()
    }

    /// Generations whose timer has not been cancelled.
    pub fn active_generations(&self) -> Vec<u64> {
        self.armed
            .borrow()
            .iter()
            .filter(|t| !t.is_cancelled())
            .map(|t| t.generation)
            .collect()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule_repeating(&mut self, generation: u64, every: Duration) -> Box<dyn TimerHandle> {
        let cancelled = Rc::new(Cell::new(false));
        self.armed.borrow_mut().push(ArmedTimer {
            generation,
            every,
            cancelled: Rc::clone(&cancelled),
        });
        Box::new(ManualTimer { cancelled })
    }
}

struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(&mut self) {
        self.cancelled.set(true);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl fmt::Debug for dyn TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_visible_through_clones() {
        let mut scheduler = ManualScheduler::new();
        let observer = scheduler.clone();
        let mut handle = scheduler.schedule_repeating(3, DEFAULT_TICK_INTERVAL);
        assert_eq!(observer.active_generations(), vec![3]);
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(observer.active_generations().is_empty());
        assert_eq!(observer.armed()[0].every, Duration::from_millis(1600));
    }
}
