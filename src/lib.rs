//! Byte-size rendering for the query view, plus the controller that owns the
//! query service.

pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod logging;
pub mod utils;

pub use controller::{QueryController, QueryService};
pub use format::{ByteCount, ByteFormatter, OverflowPolicy, Unit, format_bytes};
