//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod error;
pub mod event;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use event::Event;
