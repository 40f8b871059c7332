//! ARFF header and body scanning
//!
//! The scanner walks the text line by line, collecting the ordered
//! attribute declarations and the raw data lines. Data lines are kept
//! untokenized; splitting happens later in the dataset generator.

use super::attribute::Attribute;
use super::constants::{ATTRIBUTE_KEYWORD, COMMENT_PREFIX, DIRECTIVE_PREFIX};
use crate::validation::{contains_missing_value, trim};
use crate::{ArffError, Result};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashSet;

/// One classified line of ARFF text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArffLine<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with `%`
    Comment,
    /// `@attribute` declaration
    Attribute(Attribute),
    /// Any other `@` line, e.g. `@relation` or `@data`
    Directive,
    /// Data row, surrounding whitespace removed
    Data(&'a str),
}

/// Classify a single line of ARFF text
///
/// Attribute declarations are recognised anywhere in the line, ignoring
/// case. The first whitespace-delimited word is the keyword, the second the
/// name and all remaining words joined with single spaces form the type.
pub fn parse_line(line: &str) -> Result<ArffLine<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ArffLine::Blank);
    }
    if trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(ArffLine::Comment);
    }
    if contains_ignore_case(trimmed, ATTRIBUTE_KEYWORD) {
        return parse_attribute(trimmed).map(ArffLine::Attribute);
    }
    if trimmed.starts_with(DIRECTIVE_PREFIX) {
        return Ok(ArffLine::Directive);
    }
    Ok(ArffLine::Data(trimmed))
}

fn parse_attribute(line: &str) -> Result<Attribute> {
    let mut words = line.split_whitespace();
    let _keyword = words.next();
    let name = trim(words.next().unwrap_or_default());
    if name.is_empty() {
        return Err(ArffError::EmptyAttributeName {
            line: line.to_string(),
        });
    }

    let type_string = words.collect::<Vec<_>>().join(" ");
    let type_string = trim(&type_string);
    if type_string.is_empty() {
        return Err(ArffError::EmptyAttributeType {
            name: name.to_string(),
        });
    }

    Ok(Attribute::new(name, type_string))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Attributes and retained data lines of an ARFF text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArff {
    /// Declared attributes in declaration order
    pub attributes: Vec<Attribute>,
    /// Data lines without an unquoted missing value, in file order
    pub lines: Vec<String>,
}

impl RawArff {
    /// Number of retained data lines
    pub fn num_samples(&self) -> usize {
        self.lines.len()
    }

    /// Number of declared attributes, class included
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }
}

/// Scan ARFF text into attributes and retained data lines
///
/// Rows holding an unquoted `?` are dropped silently. Fails when an
/// attribute is malformed or repeated, when no attribute is declared and
/// when no data line is retained.
pub fn scan(text: &str) -> Result<RawArff> {
    let mut raw = RawArff::default();
    let mut seen: HashSet<String> = HashSet::new();

    for line in text.lines() {
        match parse_line(line)? {
            ArffLine::Blank | ArffLine::Comment | ArffLine::Directive => {}
            ArffLine::Attribute(attribute) => {
                if !seen.insert(attribute.name.clone()) {
                    return Err(ArffError::DuplicateAttribute {
                        name: attribute.name,
                    });
                }
                raw.attributes.push(attribute);
            }
            ArffLine::Data(data) => {
                if !contains_missing_value(data) {
                    raw.lines.push(data.to_string());
                }
            }
        }
    }

    if raw.attributes.is_empty() {
        return Err(ArffError::NoAttributes);
    }
    if raw.lines.is_empty() {
        return Err(ArffError::NoSamples);
    }
    Ok(raw)
}
