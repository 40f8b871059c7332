//! Error types for ARFF operations

use alloc::string::String;

/// Broad classification of an [`ArffError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A caller-supplied argument was rejected before any parsing
    Precondition,
    /// The file could not be opened or read
    Io,
    /// The attribute declarations are malformed
    Header,
    /// A data row is malformed
    Data,
    /// A configured resource ceiling was exceeded
    ResourceLimit,
}

/// Errors that can occur while parsing an ARFF dataset
///
/// Every variant is fatal for the current load or summary call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArffError {
    /// The file path was empty
    EmptyPath,
    /// An explicit class attribute name was empty
    EmptyClassName,
    /// No `@attribute` declaration was found
    NoAttributes,
    /// No data line survived the scan
    NoSamples,
    /// Only the class attribute was declared
    NoFeatures,
    /// An `@attribute` line has no name
    EmptyAttributeName {
        /// The offending line
        line: String,
    },
    /// An `@attribute` line has no type
    EmptyAttributeType {
        /// The attribute name
        name: String,
    },
    /// Two attributes share the same name
    DuplicateAttribute {
        /// The repeated name
        name: String,
    },
    /// The requested class attribute is not declared
    ClassNotFound {
        /// The requested name
        name: String,
    },
    /// A data row has the wrong number of tokens
    TokenCountMismatch {
        /// Index of the sample among the retained lines
        sample: usize,
        /// Tokens found in the row
        found: usize,
        /// Tokens required (features + class)
        expected: usize,
    },
    /// A data row has an empty class value
    EmptyClassLabel {
        /// Index of the sample among the retained lines
        sample: usize,
    },
    /// A data row has an empty value for a categorical feature
    EmptyCategoricalValue {
        /// Index of the sample among the retained lines
        sample: usize,
        /// Feature name
        feature: String,
    },
    /// A value of a numeric feature is not a number
    InvalidNumericValue {
        /// Index of the sample among the retained lines
        sample: usize,
        /// Feature name
        feature: String,
        /// The text that failed to parse
        value: String,
    },
    /// The file is larger than the configured ceiling
    FileTooLarge {
        /// File size in bytes
        size: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },
    /// More samples than the configured ceiling
    TooManySamples {
        /// Retained sample count
        count: usize,
        /// Configured ceiling
        limit: usize,
    },
    /// More attributes than the configured ceiling
    TooManyFeatures {
        /// Declared attribute count
        count: usize,
        /// Configured ceiling
        limit: usize,
    },
}

impl ArffError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ArffError::EmptyPath | ArffError::EmptyClassName => ErrorCategory::Precondition,
            ArffError::NoAttributes
            | ArffError::NoFeatures
            | ArffError::EmptyAttributeName { .. }
            | ArffError::EmptyAttributeType { .. }
            | ArffError::DuplicateAttribute { .. }
            | ArffError::ClassNotFound { .. } => ErrorCategory::Header,
            ArffError::NoSamples
            | ArffError::TokenCountMismatch { .. }
            | ArffError::EmptyClassLabel { .. }
            | ArffError::EmptyCategoricalValue { .. }
            | ArffError::InvalidNumericValue { .. } => ErrorCategory::Data,
            ArffError::FileTooLarge { .. }
            | ArffError::TooManySamples { .. }
            | ArffError::TooManyFeatures { .. } => ErrorCategory::ResourceLimit,
        }
    }
}

impl core::fmt::Display for ArffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArffError::EmptyPath => write!(f, "File name cannot be empty"),
            ArffError::EmptyClassName => write!(f, "Class name cannot be empty"),
            ArffError::NoAttributes => write!(f, "No attributes found in file"),
            ArffError::NoSamples => write!(f, "No data samples found in file"),
            ArffError::NoFeatures => write!(f, "No feature attributes found"),
            ArffError::EmptyAttributeName { line } => {
                write!(f, "Empty attribute name in line: {line}")
            }
            ArffError::EmptyAttributeType { name } => {
                write!(f, "Empty attribute type for attribute: {name}")
            }
            ArffError::DuplicateAttribute { name } => {
                write!(f, "Duplicate attribute name: {name}")
            }
            ArffError::ClassNotFound { name } => {
                write!(f, "Class name '{name}' not found in attributes")
            }
            ArffError::TokenCountMismatch {
                sample,
                found,
                expected,
            } => write!(
                f,
                "Sample {sample} has {found} tokens, expected {expected}"
            ),
            ArffError::EmptyClassLabel { sample } => {
                write!(f, "Empty class label at sample {sample}")
            }
            ArffError::EmptyCategoricalValue { sample, feature } => write!(
                f,
                "Empty categorical value at sample {sample}, feature {feature}"
            ),
            ArffError::InvalidNumericValue {
                sample,
                feature,
                value,
            } => write!(
                f,
                "Invalid numeric value '{value}' at sample {sample}, feature {feature}"
            ),
            ArffError::FileTooLarge { size, limit } => write!(
                f,
                "File size ({size} bytes) exceeds maximum allowed size ({limit} bytes)"
            ),
            ArffError::TooManySamples { count, limit } => write!(
                f,
                "Number of samples ({count}) exceeds maximum allowed ({limit})"
            ),
            ArffError::TooManyFeatures { count, limit } => write!(
                f,
                "Number of features ({count}) exceeds maximum allowed ({limit})"
            ),
        }
    }
}

impl core::error::Error for ArffError {}

/// Result type for ARFF operations
pub type Result<T> = core::result::Result<T, ArffError>;
