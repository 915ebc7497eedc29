use futures::future::{BoxFuture, FutureExt};
use oracle_api::{Batch, Client, Error, Packet, Status, Stream};
use crate::record::{Id, Record, Timestamp};

pub trait Source<R: Record>: Send + Sync + 'static {
    fn since(&self, cursor: Timestamp) -> BoxFuture<'_, Result<Batch<R>, Error>>;

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Batch<R>, Error>>;

    fn detail(&self, id: Id) -> BoxFuture<'_, Result<R::Detail, Error>>;
}

pub trait Engine: Send + Sync + 'static {
    fn status(&self) -> BoxFuture<'_, Result<Status, Error>>;
}

impl Source<Packet> for Client {
    fn since(&self, cursor: Timestamp) -> BoxFuture<'_, Result<Batch<Packet>, Error>> {
        self.packets_since(cursor).boxed()
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Batch<Packet>, Error>> {
        self.search_packets(query).boxed()
    }

    fn detail(&self, id: Id) -> BoxFuture<'_, Result<<Packet as Record>::Detail, Error>> {
        self.packet_detail(id).boxed()
    }
}

impl Source<Stream> for Client {
    fn since(&self, cursor: Timestamp) -> BoxFuture<'_, Result<Batch<Stream>, Error>> {
        self.streams_since(cursor).boxed()
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Batch<Stream>, Error>> {
        self.search_streams(query).boxed()
    }

    fn detail(&self, id: Id) -> BoxFuture<'_, Result<<Stream as Record>::Detail, Error>> {
        self.stream_detail(id).boxed()
    }
}

impl Engine for Client {
    fn status(&self) -> BoxFuture<'_, Result<Status, Error>> {
        self.sniffer_status().boxed()
    }
}
