//! Alumna - Poetic photo descriptions for an alumni network
//!
//! This library provides the description generator, the service wrapping it
//! and the HTTP API exposing it to the photo album front-end.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
