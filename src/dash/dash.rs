use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use futures::future::{BoxFuture, FutureExt};
use log::{debug, warn};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::broadcast;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::record::{Id, Record};
use crate::source::Source;
use crate::sync::{Cursor, Cycle, Dataset, Event, Phase, Poller, Protocols};
use crate::view::{DetailState, Focus, Overlay, ResultSet, Search, Ticket};

/// Client-side view state for one record kind.
///
/// Must be driven from a current-thread runtime: a stopped poller discards
/// its result only if `stop` cannot run between the liveness check and the
/// locked apply.
pub struct Dashboard<R: Record> {
    state:  Arc<Mutex<State<R>>>,
    source: Arc<dyn Source<R>>,
    events: broadcast::Sender<Event>,
}

struct State<R: Record> {
    dataset:   Dataset<R>,
    protocols: Protocols,
    cursor:    Cursor,
    phase:     Phase,
    error:     Option<Error>,
    revision:  u64,
    search:    Search<R>,
    focus:     Focus<R::Detail>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<R> {
    pub revision:  u64,
    pub cursor:    u64,
    pub query:     Option<String>,
    pub loading:   bool,
    pub error:     Option<String>,
    pub protocols: Vec<String>,
    pub records:   Vec<R>,
}

enum Pending {
    Poll,
    Focus(Ticket),
}

/// Rolls back in-flight markers if the owning future is dropped.
struct Inflight<'a, R: Record> {
    state:   &'a Mutex<State<R>>,
    pending: Option<Pending>,
}

impl<R: Record> Dashboard<R> {
    pub fn new(source: Arc<dyn Source<R>>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            state:  Arc::new(Mutex::new(State::new())),
            source: source,
            events: events,
        }
    }

    pub fn start(&self, period: Duration) -> Poller {
        Poller::start(self.clone(), period)
    }

    pub async fn poll_once(&self) -> Result<Outcome, Error> {
        let alive = AtomicBool::new(true);
        self.poll(&alive).await
    }

    pub(super) async fn poll(&self, alive: &AtomicBool) -> Result<Outcome, Error> {
        let cursor = {
            let mut state = self.state.lock();
            if state.phase == Phase::Fetching {
                debug!("poll still in flight, skipping");
                return Ok(Outcome::Skipped);
            }
            state.phase = Phase::Fetching;
            state.cursor
        };

        let mut inflight = Inflight::new(&self.state, Pending::Poll);
        self.emit(Event::Fetching);

        let result = self.source.since(cursor.value()).await;

        let mut state = self.state.lock();
        if !alive.load(Ordering::Acquire) {
            drop(state);
            debug!("poller stopped, discarding poll result");
            return Ok(Outcome::Stale);
        }

        inflight.disarm();
        state.phase = Phase::Idle;

        match result {
            Ok(batch) => {
                let cursor  = state.cursor.advance(&batch.records);
                let grew    = state.protocols.merge(batch.protocols);
                let merge   = state.dataset.merge(batch.records);
                let cleared = state.error.take().is_some();

                state.cursor = cursor;

                let changed = merge.changed() || grew || cleared;
                if changed {
                    state.revision += 1;
                }
                drop(state);

                debug!("merged {} new, {} updated, cursor {}", merge.added, merge.replaced, cursor.value());
                self.emit(Event::Updated { merge, cursor });

                Ok(if changed { Outcome::Applied } else { Outcome::Unchanged })
            }
            Err(e) => {
                let e = Error::Poll(e);
                warn!("{}", e);
                state.error     = Some(e.clone());
                state.revision += 1;
                drop(state);

                self.emit(Event::Failed(e.clone()));
                Err(e)
            }
        }
    }

    pub async fn submit_search(&self, query: &str) -> Result<Outcome, Error> {
        let ticket = self.state.lock().search.begin(query);
        let ticket = match ticket {
            Some(ticket) => ticket,
            None         => return Ok(Outcome::Skipped),
        };

        let result = self.source.search(query).await.map_err(Error::Search);

        let mut state = self.state.lock();
        let outcome   = state.search.complete(ticket, query, result);
        if outcome != Ok(Outcome::Stale) {
            state.revision += 1;
        }
        outcome
    }

    /// Resends the active query; polling never does this on its own.
    pub async fn refresh_search(&self) -> Result<Outcome, Error> {
        let query = self.state.lock().search.query().map(str::to_owned);
        match query {
            Some(query) => self.submit_search(&query).await,
            None        => Ok(Outcome::Skipped),
        }
    }

    pub fn reset_search(&self) {
        let mut state = self.state.lock();
        state.search.reset();
        state.revision += 1;
    }

    /// Loads the full payload of `id`. Repeated requests for the current
    /// target do nothing; a newer request supersedes an older one.
    pub async fn focus(&self, id: Id) -> Result<DetailState<R::Detail>, Error> {
        let ticket = {
            let mut state = self.state.lock();
            let ticket    = state.focus.begin(id);
            if ticket.is_some() {
                state.revision += 1;
            }
            ticket
        };

        let ticket = match ticket {
            Some(ticket) => ticket,
            None         => return Ok(self.detail()),
        };

        let mut inflight = Inflight::new(&self.state, Pending::Focus(ticket));

        let result = self.source.detail(id).await.map_err(Error::Detail);

        inflight.disarm();

        let mut state = self.state.lock();
        let outcome   = state.focus.complete(ticket, id, result);
        if outcome != Ok(Outcome::Stale) {
            state.revision += 1;
        }
        outcome.map(|_| state.focus.state().clone())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub fn dataset(&self) -> Vec<R> {
        self.state.lock().dataset.records().to_vec()
    }

    pub fn get(&self, id: Id) -> Option<R> {
        self.state.lock().dataset.get(id).cloned()
    }

    pub fn protocols(&self) -> Protocols {
        self.state.lock().protocols.clone()
    }

    pub fn cursor(&self) -> Cursor {
        self.state.lock().cursor
    }

    pub fn overlay(&self) -> Overlay<R> {
        self.state.lock().search.overlay().clone()
    }

    pub fn search_result(&self) -> Option<ResultSet<R>> {
        self.state.lock().search.overlay().result().cloned()
    }

    pub fn detail(&self) -> DetailState<R::Detail> {
        self.state.lock().focus.state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().phase == Phase::Fetching
    }

    pub fn last_error(&self) -> Option<Error> {
        self.state.lock().error.clone()
    }

    pub fn search_error(&self) -> Option<Error> {
        self.state.lock().search.error().cloned()
    }

    pub fn detail_error(&self) -> Option<Error> {
        self.state.lock().focus.error().cloned()
    }

    pub fn revision(&self) -> u64 {
        self.state.lock().revision
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        let state = self.state.lock();

        let (query, protocols, records) = match state.search.overlay() {
            Overlay::Active(set) => (Some(set.query.clone()), set.protocols.to_vec(), set.records.clone()),
            Overlay::Inactive    => (None, state.protocols.to_vec(), state.dataset.records().to_vec()),
        };

        Snapshot {
            revision:  state.revision,
            cursor:    state.cursor.value(),
            query:     query,
            loading:   state.phase == Phase::Fetching,
            error:     state.error.as_ref().map(ToString::to_string),
            protocols: protocols,
            records:   records,
        }
    }

    fn emit(&self, event: Event) {
        let _ = self.events.send(event);
    }
}

impl<R: Record> Clone for Dashboard<R> {
    fn clone(&self) -> Self {
        Self {
            state:  self.state.clone(),
            source: self.source.clone(),
            events: self.events.clone(),
        }
    }
}

impl<R: Record> Cycle for Dashboard<R> {
    fn cycle<'a>(&'a self, alive: &'a AtomicBool) -> BoxFuture<'a, ()> {
        async move {
            let _ = self.poll(alive).await;
        }.boxed()
    }
}

impl<R: Record> State<R> {
    fn new() -> Self {
        Self {
            dataset:   Dataset::new(),
            protocols: Protocols::new(),
            cursor:    Cursor::default(),
            phase:     Phase::Idle,
            error:     None,
            revision:  0,
            search:    Search::new(),
            focus:     Focus::new(),
        }
    }
}

impl<'a, R: Record> Inflight<'a, R> {
    fn new(state: &'a Mutex<State<R>>, pending: Pending) -> Self {
        Self { state, pending: Some(pending) }
    }

    fn disarm(&mut self) {
        self.pending = None;
    }
}

impl<R: Record> Drop for Inflight<'_, R> {
    fn drop(&mut self) {
        match self.pending.take() {
            Some(Pending::Poll) => {
                let mut state = self.state.lock();
                if state.phase == Phase::Fetching {
                    state.phase = Phase::Idle;
                }
            }
            Some(Pending::Focus(ticket)) => self.state.lock().focus.abandon(ticket),
            None                         => (),
        }
    }
}
