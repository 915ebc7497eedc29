pub use dash::{Dashboard, Snapshot};

mod dash;
