//! # Web Handlers for the Camp Signups backend
//!
//! This crate provides the actix-web handlers and route table for campers,
//! activities and signups.

/// Camper list, create, detail and patch handlers
mod camper_handlers;
pub use camper_handlers::*;

/// Activity list and delete handlers
mod activity_handlers;
pub use activity_handlers::*;

/// Signup creation handler
mod signup_handlers;
pub use signup_handlers::*;

/// Health check handler
mod admin_handlers;
pub use admin_handlers::*;

/// Route registration and extractor configuration
mod routes;
pub use routes::*;

#[cfg(test)]
mod test_support;
