//! Services Layer
//!
//! Read-side business logic for the public pages, independent of HTTP.

pub mod catalog_service;

pub use catalog_service::*;
