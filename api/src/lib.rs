//! Shared boundary between the client UI and the activities service.
//!
//! Holds the data model for the catalog payload, the typed HTTP client for
//! the three service endpoints, and the error taxonomy the UI discriminates
//! on when turning failures into user-visible status.

pub mod activity;
pub mod client;
mod endpoint;
pub mod error;

pub use activity::ActivityRecord;
pub use activity::Catalog;
pub use client::activities;
pub use client::signup;
pub use client::unregister;
pub use error::ApiError;
