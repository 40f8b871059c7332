//! Descriptive statistics without materializing the dataset
//!
//! A lighter pass than [`ArffDataset`](crate::ArffDataset): it counts the
//! samples and collects the distinct class values. It is best-effort on the
//! data section. Rows whose token count differs from the declared attribute
//! count are not rejected, the class value is simply read from whatever
//! token sits at the class position.

use crate::format::constants::{COMMENT_PREFIX, DELIMITER, DIRECTIVE_PREFIX};
use crate::format::header::{parse_line, ArffLine};
use crate::format::{Attribute, ClassSelector};
use crate::validation::{contains_missing_value, split};
use crate::{ArffError, Result};
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Summary of an ARFF file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArffSummary {
    /// Number of data rows with a class value
    pub num_samples: usize,
    /// Number of feature attributes, class excluded
    pub num_features: usize,
    /// Number of distinct class values
    pub num_classes: usize,
    /// Name of the class attribute
    pub class_name: String,
    /// Declared type of the class attribute
    pub class_type: String,
    /// Distinct class values, sorted
    pub class_labels: Vec<String>,
    /// Feature attributes in declaration order
    pub feature_info: Vec<Attribute>,
}

/// Summarize ARFF text held in memory
///
/// The header ends at the first data line. Attribute names are not checked
/// for duplicates here.
pub fn summarize(text: &str, selector: &ClassSelector) -> Result<ArffSummary> {
    selector.validate()?;

    let mut lines = text.lines();
    let mut attributes = Vec::new();
    let mut first_data = None;
    for line in lines.by_ref() {
        match parse_line(line)? {
            ArffLine::Attribute(attribute) => attributes.push(attribute),
            ArffLine::Data(data) => {
                first_data = Some(data);
                break;
            }
            ArffLine::Blank | ArffLine::Comment | ArffLine::Directive => {}
        }
    }

    if attributes.is_empty() {
        return Err(ArffError::NoAttributes);
    }
    let class_index = selector.resolve(&attributes)?;

    let mut classes = BTreeSet::new();
    let mut num_samples = 0;
    for line in first_data.into_iter().chain(lines.map(str::trim)) {
        if line.is_empty()
            || line.starts_with(DIRECTIVE_PREFIX)
            || line.starts_with(COMMENT_PREFIX)
            || contains_missing_value(line)
        {
            continue;
        }

        let tokens = split(line, DELIMITER);
        let value = match selector {
            ClassSelector::Last => tokens.last(),
            ClassSelector::First | ClassSelector::Named(_) => tokens.get(class_index),
        };
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            classes.insert(value.to_string());
            num_samples += 1;
        }
    }

    let class = attributes.remove(class_index);
    let class_labels: Vec<String> = classes.into_iter().collect();
    Ok(ArffSummary {
        num_samples,
        num_features: attributes.len(),
        num_classes: class_labels.len(),
        class_name: class.name,
        class_type: class.type_string,
        class_labels,
        feature_info: attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const TEXT: &str = "% weather\n\
        @relation weather\n\
        @attribute outlook {sunny,overcast,rainy}\n\
        @attribute temperature NUMERIC\n\
        @attribute play {yes,no}\n\
        @data\n\
        sunny,85,no\n\
        overcast,83,yes\n\
        % trailing comment\n\
        rainy,?,yes\n\
        rainy,70,'maybe'\n\
        \n\
        rainy,65\n";

    #[test]
    fn test_class_last() {
        let summary = summarize(TEXT, &ClassSelector::Last).unwrap();
        assert_eq!(summary.num_samples, 4);
        assert_eq!(summary.num_features, 2);
        assert_eq!(summary.num_classes, 4);
        assert_eq!(summary.class_name, "play");
        assert_eq!(summary.class_type, "{yes,no}");
        assert_eq!(summary.class_labels, vec!["65", "maybe", "no", "yes"]);
        assert_eq!(
            summary.feature_info,
            vec![
                Attribute::new("outlook", "{sunny,overcast,rainy}"),
                Attribute::new("temperature", "NUMERIC"),
            ]
        );
    }

    #[test]
    fn test_class_first() {
        let summary = summarize(TEXT, &ClassSelector::First).unwrap();
        assert_eq!(summary.class_name, "outlook");
        assert_eq!(summary.num_samples, 4);
        assert_eq!(summary.class_labels, vec!["overcast", "rainy", "sunny"]);
        assert_eq!(summary.feature_info.len(), 2);
    }

    #[test]
    fn test_named_class_tolerates_short_rows() {
        let summary = summarize(TEXT, &ClassSelector::named("play")).unwrap();
        assert_eq!(summary.num_samples, 3);
        assert_eq!(summary.class_labels, vec!["maybe", "no", "yes"]);
        assert_eq!(summary.num_classes, 3);
    }

    #[test]
    fn test_duplicates_not_checked() {
        let text = "@attribute a REAL\n@attribute a REAL\n@data\n1,x\n";
        let summary = summarize(text, &ClassSelector::Last).unwrap();
        assert_eq!(summary.num_samples, 1);
        assert_eq!(summary.class_labels, vec!["x"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            summarize("% nothing\n", &ClassSelector::Last),
            Err(ArffError::NoAttributes)
        );
        assert_eq!(
            summarize(TEXT, &ClassSelector::named("nope")),
            Err(ArffError::ClassNotFound {
                name: "nope".to_string()
            })
        );
        assert_eq!(
            summarize(TEXT, &ClassSelector::named("")),
            Err(ArffError::EmptyClassName)
        );
    }

    #[test]
    fn test_no_data_is_not_an_error() {
        let text = "@attribute a REAL\n@attribute c {x}\n@data\n";
        let summary = summarize(text, &ClassSelector::Last).unwrap();
        assert_eq!(summary.num_samples, 0);
        assert_eq!(summary.num_classes, 0);
        assert!(summary.class_labels.is_empty());
    }
}
