pub use source::{Engine, Source};

mod source;

#[cfg(test)]
pub mod mock;
