//! Data models
//!
//! This module contains the data structures shared by the generator, the
//! service layer and the HTTP API:
//! - Description styles and context labels
//! - Generated description records

mod poetry;

pub use poetry::{ContextTag, PoeticText, Style};
