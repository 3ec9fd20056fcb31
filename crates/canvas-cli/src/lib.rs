//! Library components of the canvas debugger CLI.

pub mod logging;
pub mod report;
