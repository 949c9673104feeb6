//! Utility functions for code generation, URL validation, and error classification.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - URL normalization and validation
//! - [`db_error`] - Unique-constraint violation classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
