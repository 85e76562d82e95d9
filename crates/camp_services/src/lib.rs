//! # Camp Services
//!
//! This crate provides the domain layer for the camp signups backend.
//! It includes the entity and view types, request validation, the error taxonomy,
//! and the services that persist campers, activities and signups.

/// Camper creation, lookup and partial updates.
pub mod camper_service;
/// Activity listing, creation and cascading deletion.
pub mod activity_service;
/// Signup creation.
pub mod signup_service;
/// Entities, request types, response views and errors.
pub mod types;

pub use activity_service::ActivityService;
pub use camper_service::CamperService;
pub use signup_service::SignupService;
