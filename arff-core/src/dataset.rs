//! Dataset generation from scanned ARFF text
//!
//! Turns the retained data lines into a feature-major matrix and an encoded
//! label vector. Intermediate results are passed along as values and only
//! assembled into an [`ArffDataset`] once every stage has succeeded.

use crate::classify::{classify, NumericFlags};
use crate::factorize::StateTable;
use crate::format::constants::DELIMITER;
use crate::format::{scan, Attribute, ClassSelector, RawArff};
use crate::traits::TextSource;
use crate::validation::{parse_float_prefix, split, ResourceLimits};
use crate::{ArffError, Result};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// Feature-major matrix: `x[feature][sample]`
pub type FeatureMatrix = Vec<Vec<f32>>;

/// Output of [`generate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedData {
    /// Feature-major values, categorical features replaced by their codes
    pub x: FeatureMatrix,
    /// Encoded class values, one per sample
    pub y: Vec<u32>,
}

/// Build the feature matrix and the label vector
///
/// `features` excludes the class attribute and `label_index` is the
/// position of the class value within each row. Every row must have
/// exactly `features.len() + 1` tokens. Categorical features and the class
/// are factorized into `states`.
pub fn generate(
    features: &[Attribute],
    lines: &[String],
    numeric: &NumericFlags,
    class_name: &str,
    label_index: usize,
    states: &mut StateTable,
) -> Result<GeneratedData> {
    let num_samples = lines.len();
    let num_features = features.len();

    if num_samples == 0 {
        return Err(ArffError::NoSamples);
    }
    if num_features == 0 {
        return Err(ArffError::NoFeatures);
    }

    let is_numeric: Vec<bool> = features
        .iter()
        .map(|feature| numeric.get(&feature.name).copied().unwrap_or(false))
        .collect();

    let mut x = vec![vec![0.0f32; num_samples]; num_features];
    let mut categorical: Vec<Vec<&str>> = is_numeric
        .iter()
        .map(|&flag| {
            if flag {
                Vec::new()
            } else {
                Vec::with_capacity(num_samples)
            }
        })
        .collect();
    let mut labels: Vec<&str> = Vec::with_capacity(num_samples);

    let expected = num_features + 1;
    for (sample, line) in lines.iter().enumerate() {
        let tokens = split(line, DELIMITER);
        if tokens.len() != expected {
            return Err(ArffError::TokenCountMismatch {
                sample,
                found: tokens.len(),
                expected,
            });
        }

        let mut feature_idx = 0;
        for (position, token) in tokens.into_iter().enumerate() {
            if position == label_index {
                if token.is_empty() {
                    return Err(ArffError::EmptyClassLabel { sample });
                }
                labels.push(token);
                continue;
            }

            let Some(feature) = features.get(feature_idx) else {
                return Err(ArffError::TokenCountMismatch {
                    sample,
                    found: position + 1,
                    expected,
                });
            };
            if is_numeric[feature_idx] {
                let value = parse_float_prefix(token).ok_or_else(|| ArffError::InvalidNumericValue {
                    sample,
                    feature: feature.name.clone(),
                    value: token.to_string(),
                })?;
                x[feature_idx][sample] = value;
            } else {
                if token.is_empty() {
                    return Err(ArffError::EmptyCategoricalValue {
                        sample,
                        feature: feature.name.clone(),
                    });
                }
                categorical[feature_idx].push(token);
            }
            feature_idx += 1;
        }
    }

    for (feature_idx, values) in categorical.iter().enumerate() {
        if is_numeric[feature_idx] {
            continue;
        }
        let codes = states.factorize(&features[feature_idx].name, values);
        for (cell, code) in x[feature_idx].iter_mut().zip(codes) {
            *cell = code as f32;
        }
    }

    let y = states.factorize(class_name, &labels);
    Ok(GeneratedData { x, y })
}

/// A fully parsed ARFF dataset
///
/// Feature attributes, the class attribute, per-attribute codebooks, the
/// feature-major matrix, the encoded labels and the retained raw lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArffDataset {
    attributes: Vec<Attribute>,
    class: Attribute,
    numeric: NumericFlags,
    states: StateTable,
    x: FeatureMatrix,
    y: Vec<u32>,
    lines: Vec<String>,
}

impl ArffDataset {
    /// Parse ARFF text held in memory
    ///
    /// The sample and attribute ceilings of `limits` are checked right
    /// after the header scan; the file size ceiling is the caller's concern.
    pub fn parse(text: &str, selector: &ClassSelector, limits: &ResourceLimits) -> Result<Self> {
        selector.validate()?;
        let raw = scan(text)?;
        limits.check_counts(raw.num_samples(), raw.num_attributes())?;
        Self::from_raw(raw, selector)
    }

    /// Parse the text of a [`TextSource`]
    pub fn from_source<S>(source: &S, selector: &ClassSelector, limits: &ResourceLimits) -> Result<Self>
    where
        S: TextSource + ?Sized,
    {
        Self::parse(&source.text(), selector, limits)
    }

    /// Build a dataset from an already scanned text
    pub fn from_raw(raw: RawArff, selector: &ClassSelector) -> Result<Self> {
        let RawArff {
            mut attributes,
            lines,
        } = raw;

        let mut states =
            StateTable::with_attributes(attributes.iter().map(|attribute| attribute.name.as_str()));
        let (class, label_index) = selector.extract(&mut attributes)?;
        let numeric = classify(&attributes);
        let GeneratedData { x, y } = generate(
            &attributes,
            &lines,
            &numeric,
            &class.name,
            label_index,
            &mut states,
        )?;

        Ok(Self {
            attributes,
            class,
            numeric,
            states,
            x,
            y,
            lines,
        })
    }

    /// Name of the class attribute
    pub fn class_name(&self) -> &str {
        &self.class.name
    }

    /// Declared type of the class attribute
    pub fn class_type(&self) -> &str {
        &self.class.type_string
    }

    /// The class attribute
    pub fn class(&self) -> &Attribute {
        &self.class
    }

    /// Feature attributes in declaration order, class excluded
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Numeric flag of every feature attribute
    pub fn numeric_attributes(&self) -> &NumericFlags {
        &self.numeric
    }

    /// Whether a feature is numeric, `None` for unknown names
    pub fn is_numeric(&self, feature: &str) -> Option<bool> {
        self.numeric.get(feature).copied()
    }

    /// Codebooks of every attribute, class included
    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// State labels of the class attribute
    pub fn labels(&self) -> &[String] {
        self.states.get(&self.class.name).unwrap_or_default()
    }

    /// Feature-major matrix
    pub fn x(&self) -> &FeatureMatrix {
        &self.x
    }

    /// Encoded class values
    pub fn y(&self) -> &[u32] {
        &self.y
    }

    /// Retained raw data lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of samples
    pub fn num_samples(&self) -> usize {
        self.lines.len()
    }

    /// Number of feature attributes
    pub fn num_features(&self) -> usize {
        self.attributes.len()
    }

    /// Move the feature matrix out, leaving it empty
    pub fn take_x(&mut self) -> FeatureMatrix {
        core::mem::take(&mut self.x)
    }

    /// Move the labels out, leaving them empty
    pub fn take_y(&mut self) -> Vec<u32> {
        core::mem::take(&mut self.y)
    }

    /// Move the raw lines out, leaving them empty
    pub fn take_lines(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }

    /// Move the codebooks out, leaving them empty
    pub fn take_states(&mut self) -> StateTable {
        core::mem::take(&mut self.states)
    }

    /// Move the feature attributes out, leaving them empty
    pub fn take_attributes(&mut self) -> Vec<Attribute> {
        core::mem::take(&mut self.attributes)
    }

    /// Move the numeric flags out, leaving them empty
    pub fn take_numeric_attributes(&mut self) -> NumericFlags {
        core::mem::take(&mut self.numeric)
    }
}
