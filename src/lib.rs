//! panto - review dashboard client
//!
//! Library backing the `panto` binary: session context, provider adapters for
//! the Panto backend, and the dashboard state machine.

pub mod auth;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod login;
pub mod navigation;
pub mod optimistic;
pub mod platform;
pub mod session;
pub mod types;
