//! Loader configuration
//!
//! Resource ceilings and the read strategy. Ceilings can be overridden from
//! the environment with `ARFF_MAX_FILE_SIZE`, `ARFF_MAX_SAMPLES` and
//! `ARFF_MAX_FEATURES`.

use arff_core::ResourceLimits;
use std::str::FromStr;

/// Environment variable overriding the file size ceiling in bytes
pub const ENV_MAX_FILE_SIZE: &str = "ARFF_MAX_FILE_SIZE";
/// Environment variable overriding the sample ceiling
pub const ENV_MAX_SAMPLES: &str = "ARFF_MAX_SAMPLES";
/// Environment variable overriding the attribute ceiling
pub const ENV_MAX_FEATURES: &str = "ARFF_MAX_FEATURES";

/// Configuration for [`ArffFiles`](crate::ArffFiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoaderConfig {
    /// Resource ceilings applied to every load
    pub limits: ResourceLimits,
    /// Read files through a memory map instead of a buffered read
    pub use_mmap: bool,
}

impl LoaderConfig {
    /// Create a config with the given ceilings
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Set the file size ceiling in bytes
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.limits.max_file_size = bytes;
        self
    }

    /// Set the sample ceiling
    pub fn with_max_samples(mut self, samples: usize) -> Self {
        self.limits.max_samples = samples;
        self
    }

    /// Set the attribute ceiling
    pub fn with_max_features(mut self, features: usize) -> Self {
        self.limits.max_features = features;
        self
    }

    /// Choose between memory mapping and a buffered read
    ///
    /// Ignored without the `mmap` feature.
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Defaults with overrides from the process environment
    ///
    /// Unset variables keep their default. Values that are not unsigned
    /// integers are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(bytes) = parse_override(&lookup, ENV_MAX_FILE_SIZE) {
            config.limits.max_file_size = bytes;
        }
        if let Some(samples) = parse_override(&lookup, ENV_MAX_SAMPLES) {
            config.limits.max_samples = samples;
        }
        if let Some(features) = parse_override(&lookup, ENV_MAX_FEATURES) {
            config.limits.max_features = features;
        }
        config
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed limit override");
            None
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            limits: ResourceLimits::default(),
            use_mmap: cfg!(feature = "mmap"),
        }
    }
}
