//! ARFF - Attribute-Relation File Format loader
//!
//! This library reads ARFF datasets into a feature-major numeric matrix and
//! an encoded label vector, with resource ceilings for untrusted input.
//!
//! ## Architecture
//!
//! - **arff-core**: Tokenizing, header scanning, classification,
//!   factorization and dataset generation over in-memory text (no I/O)
//! - **arff**: File access, the stateful loader, configuration and logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arff::{ArffFiles, LoaderConfig};
//!
//! fn example() -> arff::Result<()> {
//!     let config = LoaderConfig::from_env().with_max_samples(50_000);
//!     let mut loader = ArffFiles::with_config(config);
//!     loader.load("iris.arff")?;
//!
//!     for (attribute, column) in loader.attributes().iter().zip(loader.x()) {
//!         println!("{}: {} values", attribute.name, column.len());
//!     }
//!     println!("classes: {:?}", loader.labels());
//!
//!     let summary = ArffFiles::summary_with_class_name("iris.arff", "class")?;
//!     println!("{} samples", summary.num_samples);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): read files through a read-only memory map
//! - **serde** (default): serialize summaries and configuration
//! - **cli**: dependencies of the `arff_info` example

// Re-export core types
pub use arff_core::{
    // Parsing
    classify, factorize, generate, is_numeric_type, summarize,
    // Data model
    ArffDataset, ArffSummary, Attribute, ClassSelector, FeatureMatrix, NumericFlags, StateTable,
    // Error handling
    ArffError, ErrorCategory,
    // Limits and sources
    ResourceLimits, TextSource,
};
pub use arff_core::format::constants::VERSION;

pub mod config;
pub mod error;
pub mod file_io;
pub mod loader;
pub mod parallel;
pub mod summary;

pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use loader::ArffFiles;
pub use parallel::{load_many, summarize_many};
pub use summary::summarize_file;

#[cfg(feature = "serde")]
pub use summary::summary_to_json;
