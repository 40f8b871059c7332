//! Stateful ARFF file loader
//!
//! [`ArffFiles`] owns the result of its most recent load. Every load starts
//! by clearing the previous result, so a failed load leaves the loader
//! empty rather than holding a mix of old and new data.

use crate::config::LoaderConfig;
use crate::file_io::{open_source, probe_size};
use crate::summary::summarize_file;
use crate::Result;
use arff_core::format::constants::VERSION;
use arff_core::{
    ArffDataset, ArffError, ArffSummary, Attribute, ClassSelector, FeatureMatrix, NumericFlags,
    StateTable,
};
use std::path::Path;

/// Loader for ARFF files
///
/// A loader is not meant to be shared between threads while a load is in
/// progress; use one instance per file for parallel work (see
/// [`load_many`](crate::load_many)).
///
/// ```rust,no_run
/// use arff::ArffFiles;
///
/// fn example() -> arff::Result<()> {
///     let mut loader = ArffFiles::new();
///     loader.load_with_class_name("iris.arff", "class")?;
///     println!("{} samples, {} features", loader.size(), loader.x().len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArffFiles {
    config: LoaderConfig,
    dataset: ArffDataset,
}

impl ArffFiles {
    /// Create a loader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with an explicit configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            dataset: ArffDataset::default(),
        }
    }

    /// Load `path` with the class as the last attribute
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_with(path, ClassSelector::Last)
    }

    /// Load `path` with the class as the last (`true`) or first attribute
    pub fn load_with_class_position(
        &mut self,
        path: impl AsRef<Path>,
        class_is_last: bool,
    ) -> Result<()> {
        self.load_with(path, ClassSelector::from_position(class_is_last))
    }

    /// Load `path` with the class attribute found by exact name
    pub fn load_with_class_name(&mut self, path: impl AsRef<Path>, class_name: &str) -> Result<()> {
        self.load_with(path, ClassSelector::named(class_name))
    }

    /// Load `path` with an explicit class selector
    pub fn load_with(&mut self, path: impl AsRef<Path>, selector: ClassSelector) -> Result<()> {
        self.dataset = ArffDataset::default();

        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ArffError::EmptyPath.into());
        }
        selector.validate()?;

        let size = probe_size(path);
        if let Some(size) = size {
            self.config.limits.check_file_size(size)?;
        }

        let source = open_source(path, self.config.use_mmap, size)?;
        let dataset = ArffDataset::from_source(&*source, &selector, &self.config.limits)?;
        tracing::info!(
            path = %path.display(),
            samples = dataset.num_samples(),
            features = dataset.num_features(),
            class = dataset.class_name(),
            "loaded ARFF file"
        );

        self.dataset = dataset;
        Ok(())
    }

    /// Summarize `path` with the class as the last attribute
    pub fn summary(path: impl AsRef<Path>) -> Result<ArffSummary> {
        summarize_file(path.as_ref(), &ClassSelector::Last, &LoaderConfig::default())
    }

    /// Summarize `path` with the class as the last (`true`) or first attribute
    pub fn summary_with_class_position(
        path: impl AsRef<Path>,
        class_is_last: bool,
    ) -> Result<ArffSummary> {
        summarize_file(
            path.as_ref(),
            &ClassSelector::from_position(class_is_last),
            &LoaderConfig::default(),
        )
    }

    /// Summarize `path` with the class attribute found by exact name
    pub fn summary_with_class_name(path: impl AsRef<Path>, class_name: &str) -> Result<ArffSummary> {
        summarize_file(
            path.as_ref(),
            &ClassSelector::named(class_name),
            &LoaderConfig::default(),
        )
    }

    /// Library version
    pub fn version() -> &'static str {
        VERSION
    }

    /// Configuration used by every load and summary call
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// The current dataset, empty before the first successful load
    pub fn dataset(&self) -> &ArffDataset {
        &self.dataset
    }

    /// Name of the class attribute
    pub fn class_name(&self) -> &str {
        self.dataset.class_name()
    }

    /// Declared type of the class attribute, e.g. `{a,b}` or `REAL`
    pub fn class_type(&self) -> &str {
        self.dataset.class_type()
    }

    /// Numeric flag of every feature attribute
    pub fn numeric_attributes(&self) -> &NumericFlags {
        self.dataset.numeric_attributes()
    }

    /// Codebooks of the categorical features and the class
    pub fn states(&self) -> &StateTable {
        self.dataset.states()
    }

    /// State labels of the class attribute
    pub fn labels(&self) -> &[String] {
        self.dataset.labels()
    }

    /// Feature attributes, class excluded
    pub fn attributes(&self) -> &[Attribute] {
        self.dataset.attributes()
    }

    /// Feature-major matrix, `x()[feature][sample]`
    pub fn x(&self) -> &FeatureMatrix {
        self.dataset.x()
    }

    /// Encoded class labels
    pub fn y(&self) -> &[u32] {
        self.dataset.y()
    }

    /// Retained data lines
    pub fn lines(&self) -> &[String] {
        self.dataset.lines()
    }

    /// Number of retained data lines
    pub fn size(&self) -> usize {
        self.dataset.lines().len()
    }

    /// Hand over the feature matrix, leaving it empty
    pub fn take_x(&mut self) -> FeatureMatrix {
        self.dataset.take_x()
    }

    /// Hand over the labels, leaving them empty
    pub fn take_y(&mut self) -> Vec<u32> {
        self.dataset.take_y()
    }

    /// Hand over the retained lines, leaving them empty
    pub fn take_lines(&mut self) -> Vec<String> {
        self.dataset.take_lines()
    }

    /// Hand over the state table, leaving it empty
    pub fn take_states(&mut self) -> StateTable {
        self.dataset.take_states()
    }

    /// Hand over the feature attributes, leaving them empty
    pub fn take_attributes(&mut self) -> Vec<Attribute> {
        self.dataset.take_attributes()
    }

    /// Hand over the numeric flags, leaving them empty
    pub fn take_numeric_attributes(&mut self) -> NumericFlags {
        self.dataset.take_numeric_attributes()
    }

    /// Consume the loader and return its dataset
    pub fn into_dataset(self) -> ArffDataset {
        self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    const WEATHER: &str = "@relation weather\n\
        @attribute outlook {sunny,overcast,rainy}\n\
        @attribute temperature REAL\n\
        @attribute play {yes,no}\n\
        @data\n\
        sunny,85,no\n\
        overcast,83,yes\n\
        rainy,?,yes\n\
        rainy,70,yes\n";

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_weather() {
        let file = write_fixture(WEATHER);
        let mut loader = ArffFiles::new();
        loader.load(file.path()).unwrap();

        assert_eq!(loader.size(), 3);
        assert_eq!(loader.class_name(), "play");
        assert_eq!(loader.class_type(), "{yes,no}");
        assert_eq!(loader.x().len(), 2);
        assert_eq!(loader.x()[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(loader.x()[1], vec![85.0, 83.0, 70.0]);
        assert_eq!(loader.y(), [0, 1, 1]);
        assert_eq!(loader.labels(), ["no", "yes"]);
        assert!(loader.numeric_attributes()["temperature"]);
        assert!(!loader.numeric_attributes()["outlook"]);
    }

    #[test]
    fn test_buffered_and_mapped_agree() {
        let file = write_fixture(WEATHER);
        let mut mapped = ArffFiles::with_config(LoaderConfig::default().with_mmap(true));
        let mut buffered = ArffFiles::with_config(LoaderConfig::default().with_mmap(false));
        mapped.load(file.path()).unwrap();
        buffered.load(file.path()).unwrap();
        assert_eq!(mapped.dataset(), buffered.dataset());
    }

    #[test]
    fn test_preconditions() {
        let mut loader = ArffFiles::new();
        let err = loader.load("").unwrap_err();
        assert_eq!(err.as_invalid(), Some(&ArffError::EmptyPath));

        let file = write_fixture(WEATHER);
        let err = loader.load_with_class_name(file.path(), "").unwrap_err();
        assert_eq!(err.as_invalid(), Some(&ArffError::EmptyClassName));

        let err = loader.load("/definitely/not/here.arff").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_file_size_limit() {
        let file = write_fixture(WEATHER);
        let size = WEATHER.len() as u64;
        let mut loader = ArffFiles::with_config(LoaderConfig::default().with_max_file_size(size - 1));
        let err = loader.load(file.path()).unwrap_err();
        assert_eq!(
            err.as_invalid(),
            Some(&ArffError::FileTooLarge {
                size,
                limit: size - 1
            })
        );

        let mut loader = ArffFiles::with_config(LoaderConfig::default().with_max_file_size(size));
        loader.load(file.path()).unwrap();
    }

    #[test]
    fn test_failed_load_clears_state() {
        let good = write_fixture(WEATHER);
        let bad = write_fixture("@attribute a REAL\n@attribute c {x}\n@data\nabc,x\n");
        let mut loader = ArffFiles::new();
        loader.load(good.path()).unwrap();
        assert_eq!(loader.size(), 3);

        assert!(loader.load(bad.path()).is_err());
        assert_eq!(loader.size(), 0);
        assert!(loader.x().is_empty());
        assert!(loader.y().is_empty());
        assert!(loader.states().is_empty());
        assert_eq!(loader.class_name(), "");
    }

    #[test]
    fn test_take_accessors_leave_empty() {
        let file = write_fixture(WEATHER);
        let mut loader = ArffFiles::new();
        loader.load_with_class_position(file.path(), false).unwrap();
        assert_eq!(loader.class_name(), "outlook");

        let x = loader.take_x();
        assert_eq!(x.len(), 2);
        assert!(loader.x().is_empty());

        let y = loader.take_y();
        assert_eq!(y, vec![0, 1, 2]);
        assert!(loader.y().is_empty());

        assert_eq!(loader.take_lines().len(), 3);
        assert_eq!(loader.size(), 0);

        assert!(loader.take_states().contains("outlook"));
        assert!(loader.states().is_empty());

        assert_eq!(loader.take_attributes().len(), 2);
        assert!(loader.attributes().is_empty());

        assert_eq!(loader.take_numeric_attributes().len(), 2);
        assert!(loader.numeric_attributes().is_empty());
    }

    #[test]
    fn test_into_dataset_and_version() {
        let file = write_fixture(WEATHER);
        let mut loader = ArffFiles::new();
        loader.load(file.path()).unwrap();
        let dataset = loader.into_dataset();
        assert_eq!(dataset.num_samples(), 3);
        assert_eq!(ArffFiles::version(), "1.1.0");
    }

    #[test]
    fn test_summary_entry_points() {
        let file = write_fixture(WEATHER);
        let summary = ArffFiles::summary(file.path()).unwrap();
        assert_eq!(summary.num_samples, 3);
        assert_eq!(summary.class_labels, vec!["no", "yes"]);

        let summary = ArffFiles::summary_with_class_position(file.path(), false).unwrap();
        assert_eq!(summary.class_name, "outlook");
        assert_eq!(summary.num_classes, 3);

        let summary = ArffFiles::summary_with_class_name(file.path(), "temperature").unwrap();
        assert_eq!(summary.class_type, "REAL");
        assert_eq!(summary.class_labels, vec!["70", "83", "85"]);
    }
}
