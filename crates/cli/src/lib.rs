//! Command-line entry point: runs the inventory demonstration.

pub mod demo;

pub use demo::run_demo;
