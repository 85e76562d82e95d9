//! # Web Server
//!
//! Shared pieces of the camp signups server and its seed tool.

/// Environment-driven server configuration.
pub mod config;
