#![no_std]

//! ARFF Core - Attribute-Relation File Format definitions and parsing
//!
//! This crate provides the pure, I/O-free building blocks for reading ARFF
//! datasets: tokenizing, header scanning, type classification,
//! factorization of categorical values and the dataset generator that turns
//! retained data lines into a feature-major matrix and a label vector.
//!
//! Everything here operates on text that is already in memory. File access,
//! configuration and logging live in the `arff` crate.

extern crate alloc;

pub mod classify;
pub mod dataset;
pub mod error;
pub mod factorize;
pub mod format;
pub mod summary;
pub mod traits;
pub mod validation;

pub use classify::{classify, is_numeric_type, NumericFlags};
pub use dataset::{generate, ArffDataset, FeatureMatrix, GeneratedData};
pub use error::*;
pub use factorize::{factorize, Factorized, StateTable};
pub use format::*;
pub use summary::{summarize, ArffSummary};
pub use traits::TextSource;
pub use validation::{contains_missing_value, parse_float_prefix, split, trim, ResourceLimits};
