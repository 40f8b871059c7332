//! File-backed summaries

use crate::config::LoaderConfig;
use crate::file_io::{open_source, probe_size};
use crate::Result;
use arff_core::{summarize, ArffError, ArffSummary, ClassSelector};
use std::path::Path;

/// Summarize the ARFF file at `path`
///
/// Only the file size ceiling of `config` applies.
pub fn summarize_file(
    path: &Path,
    selector: &ClassSelector,
    config: &LoaderConfig,
) -> Result<ArffSummary> {
    if path.as_os_str().is_empty() {
        return Err(ArffError::EmptyPath.into());
    }
    selector.validate()?;

    let size = probe_size(path);
    if let Some(size) = size {
        config.limits.check_file_size(size)?;
    }

    let source = open_source(path, config.use_mmap, size)?;
    let summary = summarize(&source.text(), selector)?;
    tracing::debug!(
        path = %path.display(),
        samples = summary.num_samples,
        classes = summary.num_classes,
        "summarized ARFF file"
    );
    Ok(summary)
}

/// Render a summary as pretty-printed JSON
#[cfg(feature = "serde")]
pub fn summary_to_json(summary: &ArffSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
