// Library root: exposes the command-line layer so integration tests can drive
// it without spawning the binary.

pub mod app;
pub mod config;
pub mod loader;
pub mod report;
