//! Parallel loading of independent files
//!
//! Each file gets its own loader; nothing is shared between workers.

use crate::config::LoaderConfig;
use crate::loader::ArffFiles;
use crate::summary::summarize_file;
use crate::Result;
use arff_core::{ArffDataset, ArffSummary, ClassSelector};
use rayon::prelude::*;
use std::path::Path;

/// Load several files in parallel
///
/// Results are returned in the order of `paths`.
pub fn load_many<P>(
    paths: &[P],
    selector: &ClassSelector,
    config: &LoaderConfig,
) -> Vec<Result<ArffDataset>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let mut loader = ArffFiles::with_config(*config);
            loader.load_with(path, selector.clone())?;
            Ok(loader.into_dataset())
        })
        .collect()
}

/// Summarize several files in parallel
///
/// Results are returned in the order of `paths`.
pub fn summarize_many<P>(
    paths: &[P],
    selector: &ClassSelector,
    config: &LoaderConfig,
) -> Vec<Result<ArffSummary>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| summarize_file(path.as_ref(), selector, config))
        .collect()
}
