use std::fmt;
use oracle_api::{Packet, PacketDetail, Stream, StreamDetail};
use super::time::{clock, duration_millis};

pub type Id        = u64;
pub type Timestamp = u64;

/// A packet or stream summary as known to the client.
///
/// Identity is stable for the lifetime of the record; only the summary
/// fields (notably a stream's end time) may change between polls.
pub trait Record: Clone + Send + Sync + 'static {
    type Detail: Payload + Clone + Send + Sync + 'static;

    fn id(&self) -> Id;

    fn start(&self) -> Timestamp;

    fn end(&self) -> Timestamp;

    /// Timestamp the poll cursor advances to.
    fn latest(&self) -> Timestamp;

    fn protocol(&self) -> &str;

    fn src(&self) -> (&str, u16);

    fn dst(&self) -> (&str, u16);

    fn size(&self) -> &str;
}

pub trait Payload {
    fn payload(&self) -> &[u8];
}

impl Record for Packet {
    type Detail = PacketDetail;

    fn id(&self) -> Id {
        self.rowid
    }

    fn start(&self) -> Timestamp {
        self.start_time
    }

    fn end(&self) -> Timestamp {
        self.end_time.unwrap_or(self.start_time)
    }

    fn latest(&self) -> Timestamp {
        self.start_time
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn src(&self) -> (&str, u16) {
        (&self.src_ip, self.src_port)
    }

    fn dst(&self) -> (&str, u16) {
        (&self.dst_ip, self.dst_port)
    }

    fn size(&self) -> &str {
        &self.data_length_string
    }
}

impl Record for Stream {
    type Detail = StreamDetail;

    fn id(&self) -> Id {
        self.rowid
    }

    fn start(&self) -> Timestamp {
        self.start_time
    }

    fn end(&self) -> Timestamp {
        self.end_time
    }

    fn latest(&self) -> Timestamp {
        self.end_time
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn src(&self) -> (&str, u16) {
        (&self.src_ip, self.src_port)
    }

    fn dst(&self) -> (&str, u16) {
        (&self.dst_ip, self.dst_port)
    }

    fn size(&self) -> &str {
        &self.data_length_string
    }
}

impl Payload for PacketDetail {
    fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Payload for StreamDetail {
    fn payload(&self) -> &[u8] {
        &self.payload
    }
}

pub struct Row<'a, R>(pub &'a R);

impl<R: Record> fmt::Display for Row<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let r = self.0;
        let (src, sport) = r.src();
        let (dst, dport) = r.dst();
        write!(f, "#{} {} {:<6} {}:{} -> {}:{} {} ({}ms)",
               r.id(),
               clock(r.start()),
               r.protocol(),
               src, sport,
               dst, dport,
               r.size(),
               duration_millis(r.start(), r.end()),
        )
    }
}
