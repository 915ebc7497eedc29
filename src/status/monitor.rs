use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use futures::future::{BoxFuture, FutureExt};
use log::{debug, info, warn};
use crate::source::Engine;
use crate::sync::{Cycle, Poller};

/// Tracks whether the capture engine is online. Failed checks read as
/// offline and are never surfaced as errors.
pub struct Monitor {
    online: Arc<AtomicBool>,
    poller: Poller,
}

struct Check {
    engine: Arc<dyn Engine>,
    online: Arc<AtomicBool>,
}

impl Monitor {
    pub fn start(engine: Arc<dyn Engine>, period: Duration) -> Self {
        let online = Arc::new(AtomicBool::new(false));
        let check  = Check {
            engine: engine,
            online: online.clone(),
        };
        Self {
            online: online,
            poller: Poller::start(check, period),
        }
    }

    pub fn online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.poller.stop();
    }
}

impl Cycle for Check {
    fn cycle<'a>(&'a self, alive: &'a AtomicBool) -> BoxFuture<'a, ()> {
        async move {
            let online = match self.engine.status().await {
                Ok(status) => status.online,
                Err(e)     => {
                    debug!("status check failed: {}", e);
                    false
                }
            };

            if !alive.load(Ordering::Acquire) {
                return;
            }

            match (self.online.swap(online, Ordering::AcqRel), online) {
                (false, true) => info!("capture engine online"),
                (true, false) => warn!("capture engine offline"),
                _             => (),
            }
        }.boxed()
    }
}
