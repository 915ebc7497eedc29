use crate::record::{Record, Timestamp};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cursor(Timestamp);

impl Cursor {
    pub fn new(ts: Timestamp) -> Self {
        Cursor(ts)
    }

    pub fn advance<R: Record>(self, records: &[R]) -> Self {
        records.iter().map(R::latest).fold(self, |cursor, ts| {
            cursor.max(Cursor(ts))
        })
    }

    pub fn value(self) -> Timestamp {
        self.0
    }
}
