pub mod args;
pub mod config;
pub mod dash;
pub mod error;
pub mod outcome;
pub mod record;
pub mod source;
pub mod status;
pub mod sync;
pub mod view;

pub use config::Config;
pub use dash::{Dashboard, Snapshot};
pub use error::Error;
pub use outcome::Outcome;
