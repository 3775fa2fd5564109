//! Adapters — implementations of the port traits over real I/O.

pub mod console;
pub mod hardware;
pub mod log_sink;
