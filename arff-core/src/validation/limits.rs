//! Resource ceilings for untrusted ARFF input
//!
//! Bounds the memory a single load may consume. The file size is checked
//! before reading, the sample and attribute counts right after the header
//! scan.

use crate::format::constants::{DEFAULT_MAX_FEATURES, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_SAMPLES};
use crate::{ArffError, Result};

/// Configured resource ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceLimits {
    /// Maximum file size in bytes
    pub max_file_size: u64,
    /// Maximum number of retained data lines
    pub max_samples: usize,
    /// Maximum number of declared attributes
    pub max_features: usize,
}

impl ResourceLimits {
    /// Create limits with explicit ceilings
    pub const fn new(max_file_size: u64, max_samples: usize, max_features: usize) -> Self {
        Self {
            max_file_size,
            max_samples,
            max_features,
        }
    }

    /// Limits that never trigger, for trusted input
    pub const fn unlimited() -> Self {
        Self::new(u64::MAX, usize::MAX, usize::MAX)
    }

    /// Set the file size ceiling
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set the sample ceiling
    pub const fn with_max_samples(mut self, samples: usize) -> Self {
        self.max_samples = samples;
        self
    }

    /// Set the attribute ceiling
    pub const fn with_max_features(mut self, features: usize) -> Self {
        self.max_features = features;
        self
    }

    /// Check a file size in bytes
    pub fn check_file_size(&self, size: u64) -> Result<()> {
        if size > self.max_file_size {
            return Err(ArffError::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Check a retained sample count
    pub fn check_samples(&self, count: usize) -> Result<()> {
        if count > self.max_samples {
            return Err(ArffError::TooManySamples {
                count,
                limit: self.max_samples,
            });
        }
        Ok(())
    }

    /// Check a declared attribute count
    pub fn check_features(&self, count: usize) -> Result<()> {
        if count > self.max_features {
            return Err(ArffError::TooManyFeatures {
                count,
                limit: self.max_features,
            });
        }
        Ok(())
    }

    /// Check both post-scan counts, samples first
    pub fn check_counts(&self, samples: usize, features: usize) -> Result<()> {
        self.check_samples(samples)?;
        self.check_features(features)
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_SAMPLES, DEFAULT_MAX_FEATURES)
    }
}
