pub use cursor::Cursor;
pub use dataset::{Dataset, Merge};
pub use poll::{Cycle, Event, Phase, Poller};
pub use protocols::Protocols;

mod cursor;
mod dataset;
mod poll;
mod protocols;
