//! ARFF text format definitions
//!
//! This module contains the attribute model, class selection and the header
//! scanner for ARFF text. Pure functions over in-memory text only.

pub mod attribute;
pub mod constants;
pub mod header;

// Re-export format definitions
pub use attribute::{Attribute, ClassSelector};
pub use header::{scan, RawArff};
