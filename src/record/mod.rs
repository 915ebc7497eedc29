pub use record::{Id, Payload, Record, Row, Timestamp};

pub mod time;

mod record;

#[cfg(test)]
mod test;
