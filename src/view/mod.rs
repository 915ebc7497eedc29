pub use focus::{DetailState, Focus};
pub use search::{Overlay, ResultSet, Search};

mod focus;
mod search;

/// Sequence number of an issued request; a completion is applied only if
/// its ticket is still the latest one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ticket(u64);

impl Ticket {
    fn next(self) -> Self {
        Ticket(self.0.wrapping_add(1))
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Ticket(0)
    }
}
