//! Abstract interfaces for ARFF sources
//!
//! Traits are pure interfaces; concrete file-backed sources live in the
//! `arff` crate.

pub mod source;

pub use source::TextSource;
