mod api;
mod client;
mod error;
mod serde;

pub use api::*;
pub use client::{Client, Urls};
pub use error::Error;
