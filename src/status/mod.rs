pub use monitor::Monitor;

mod monitor;
