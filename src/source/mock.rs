use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use tokio::time::sleep;
use oracle_api::{Batch, Error, Packet, Status, Stream, StreamDetail};
use crate::record::{Id, Record, Timestamp};
use super::{Engine, Source};

type Reply<T> = (Duration, Result<T, Error>);

/// Scripted backend. Unscripted polls and searches return empty batches;
/// unscripted details return 404.
pub struct Mock<R: Record> {
    polls:    Mutex<VecDeque<Reply<Batch<R>>>>,
    searches: Mutex<HashMap<String, Reply<Batch<R>>>>,
    details:  Mutex<HashMap<Id, Reply<R::Detail>>>,
    cursors:  Mutex<Vec<Timestamp>>,
    pub polled:   AtomicUsize,
    pub searched: AtomicUsize,
    pub fetched:  AtomicUsize,
}

impl<R: Record> Mock<R> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            polls:    Mutex::new(VecDeque::new()),
            searches: Mutex::new(HashMap::new()),
            details:  Mutex::new(HashMap::new()),
            cursors:  Mutex::new(Vec::new()),
            polled:   AtomicUsize::new(0),
            searched: AtomicUsize::new(0),
            fetched:  AtomicUsize::new(0),
        })
    }

    pub fn poll(&self, result: Result<Batch<R>, Error>) {
        self.poll_after(Duration::from_secs(0), result);
    }

    pub fn poll_after(&self, delay: Duration, result: Result<Batch<R>, Error>) {
        self.polls.lock().push_back((delay, result));
    }

    pub fn search(&self, query: &str, delay: Duration, result: Result<Batch<R>, Error>) {
        self.searches.lock().insert(query.to_owned(), (delay, result));
    }

    pub fn detail(&self, id: Id, delay: Duration, result: Result<R::Detail, Error>) {
        self.details.lock().insert(id, (delay, result));
    }

    pub fn cursors(&self) -> Vec<Timestamp> {
        self.cursors.lock().clone()
    }

    pub fn polls(&self) -> usize {
        self.polled.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.searched.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetched.load(Ordering::SeqCst)
    }
}

impl<R: Record> Source<R> for Mock<R> {
    fn since(&self, cursor: Timestamp) -> BoxFuture<'_, Result<Batch<R>, Error>> {
        self.polled.fetch_add(1, Ordering::SeqCst);
        self.cursors.lock().push(cursor);
        let reply = self.polls.lock().pop_front();
        let reply = reply.unwrap_or_else(|| (Duration::from_secs(0), Ok(Batch::default())));
        delayed(reply)
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Batch<R>, Error>> {
        self.searched.fetch_add(1, Ordering::SeqCst);
        let reply = self.searches.lock().get(query).cloned();
        let reply = reply.unwrap_or_else(|| (Duration::from_secs(0), Ok(Batch::default())));
        delayed(reply)
    }

    fn detail(&self, id: Id) -> BoxFuture<'_, Result<R::Detail, Error>> {
        self.fetched.fetch_add(1, Ordering::SeqCst);
        let reply = self.details.lock().get(&id).cloned();
        let reply = reply.unwrap_or_else(|| (Duration::from_secs(0), Err(Error::Status(404))));
        delayed(reply)
    }
}

/// Scripted capture engine; once the script runs out every check fails.
pub struct Sniffer {
    replies: Mutex<VecDeque<Result<Status, Error>>>,
    pub checks: AtomicUsize,
}

impl Sniffer {
    pub fn new(replies: Vec<Result<Status, Error>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            checks:  AtomicUsize::new(0),
        })
    }
}

impl Engine for Sniffer {
    fn status(&self) -> BoxFuture<'_, Result<Status, Error>> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().pop_front();
        let reply = reply.unwrap_or_else(|| Err(Error::Other("connection refused".to_owned())));
        async move { reply }.boxed()
    }
}

fn delayed<'a, T: Send + 'a>((delay, result): Reply<T>) -> BoxFuture<'a, Result<T, Error>> {
    async move {
        if delay > Duration::from_secs(0) {
            sleep(delay).await;
        }
        result
    }.boxed()
}

pub fn stream(id: Id, start: Timestamp, end: Timestamp, protocol: &str) -> Stream {
    Stream {
        rowid:      id,
        start_time: start,
        end_time:   end,
        protocol:   protocol.to_owned(),
        ..Default::default()
    }
}

pub fn packet(id: Id, start: Timestamp, protocol: &str) -> Packet {
    Packet {
        rowid:      id,
        start_time: start,
        protocol:   protocol.to_owned(),
        ..Default::default()
    }
}

pub fn batch<R>(records: Vec<R>, protocols: &[&str]) -> Batch<R> {
    let protocols = protocols.iter().map(|p| p.to_string()).collect();
    Batch::new(records, protocols)
}

pub fn detail(id: Id, payload: &[u8]) -> StreamDetail {
    StreamDetail {
        stream:  stream(id, 0, 0, "TCP"),
        payload: payload.to_vec(),
    }
}
