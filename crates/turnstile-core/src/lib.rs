//! # Turnstile Core
//!
//! Core types for the Turnstile queue service.
//!
//! This crate provides the domain model shared across all Turnstile
//! components:
//! - Queue entries and their service-type tags
//! - The in-memory [`QueueStore`] with its ordering rules
//! - Common error types
//!
//! There is no I/O here; the HTTP surface lives in `turnstile-server`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{Entry, ServiceType};
pub use error::{Error, Result};
pub use store::QueueStore;
