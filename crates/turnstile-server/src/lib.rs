//! # Turnstile Server
//!
//! HTTP API server for the Turnstile queue service.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod handlers;
pub mod server;

pub use server::{Server, ServerConfig};
