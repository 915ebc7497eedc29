use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use futures::future::BoxFuture;
use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use crate::error::Error;
use super::{Cursor, Merge};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Fetching,
    Updated,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Fetching,
    Updated { merge: Merge, cursor: Cursor },
    Failed(Error),
}

impl Event {
    pub fn phase(&self) -> Phase {
        match self {
            Event::Fetching       => Phase::Fetching,
            Event::Updated { .. } => Phase::Updated,
            Event::Failed(_)      => Phase::Failed,
        }
    }
}

/// One unit of periodic work. Implementations must not apply results once
/// `alive` has been cleared.
pub trait Cycle: Send + Sync + 'static {
    fn cycle<'a>(&'a self, alive: &'a AtomicBool) -> BoxFuture<'a, ()>;
}

/// Handle to a recurring task; the task stops when the handle is stopped
/// or dropped.
pub struct Poller {
    alive: Arc<AtomicBool>,
    task:  JoinHandle<()>,
}

impl Poller {
    pub fn start<C: Cycle>(work: C, period: Duration) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag  = alive.clone();

        let task = tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                timer.tick().await;
                if !flag.load(Ordering::Acquire) {
                    break;
                }
                work.cycle(&flag).await;
            }

            debug!("poller stopped");
        });

        Self { alive, task }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Release);
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
