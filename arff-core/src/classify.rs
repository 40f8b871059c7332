//! Numeric vs categorical classification of feature attributes

use crate::format::constants::NUMERIC_TYPES;
use crate::Attribute;
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Mapping from feature name to "is numeric"
pub type NumericFlags = BTreeMap<String, bool>;

/// Whether a declared type string denotes a numeric attribute
///
/// Only the exact keywords `REAL`, `INTEGER` and `NUMERIC` count, in any
/// letter case.
pub fn is_numeric_type(type_string: &str) -> bool {
    NUMERIC_TYPES
        .iter()
        .any(|keyword| type_string.eq_ignore_ascii_case(keyword))
}

/// Classify every feature attribute
///
/// `features` must already exclude the class attribute.
pub fn classify(features: &[Attribute]) -> NumericFlags {
    features
        .iter()
        .map(|attribute| {
            (
                attribute.name.clone(),
                is_numeric_type(&attribute.type_string),
            )
        })
        .collect()
}
