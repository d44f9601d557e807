//! Test fixtures and data generators
//!
//! This module contains builders and generators for creating camera parameter test data.

pub mod builders;

pub use builders::*;
