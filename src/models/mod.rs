//! Data models for the Skycast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Weather: The fetched snapshot and the assembled display record

pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use location::GeoLocation;
pub use weather::{DisplayRecord, WeatherSnapshot};
