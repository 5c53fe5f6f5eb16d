//! AgriScale backend service

#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

/// Upload and view grants for photos in object storage
pub mod photo_storage;

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Configuration, errors and extractors shared by the routes
pub mod types;
