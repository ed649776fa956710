//! Services layer - Business logic
//!
//! Services are responsible for:
//! - Implementing business rules
//! - Handling validation and error cases

pub mod poetry;

pub use poetry::{
    ContextDescription, GenerateInput, PoeticGenerator, PoetryService, PoetryServiceError,
};
