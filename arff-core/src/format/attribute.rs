//! Attribute declarations and class attribute selection

use crate::{ArffError, Result};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A declared attribute: its name and the raw type string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name, unique within a file
    pub name: String,
    /// Type string as declared, tokens joined with single spaces
    pub type_string: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, type_string: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_string: type_string.into(),
        }
    }
}

/// How the class (label) attribute is chosen among the declared attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassSelector {
    /// The last declared attribute
    #[default]
    Last,
    /// The first declared attribute
    First,
    /// The attribute with exactly this name
    Named(String),
}

impl ClassSelector {
    /// Select by class position: `true` for last, `false` for first
    pub const fn from_position(class_is_last: bool) -> Self {
        if class_is_last {
            ClassSelector::Last
        } else {
            ClassSelector::First
        }
    }

    /// Select by exact attribute name
    pub fn named(name: impl Into<String>) -> Self {
        ClassSelector::Named(name.into())
    }

    /// Reject selectors that can never match
    pub fn validate(&self) -> Result<()> {
        match self {
            ClassSelector::Named(name) if name.is_empty() => Err(ArffError::EmptyClassName),
            _ => Ok(()),
        }
    }

    /// Resolve the declaration index of the class attribute
    pub fn resolve(&self, attributes: &[Attribute]) -> Result<usize> {
        self.validate()?;
        if attributes.is_empty() {
            return Err(ArffError::NoAttributes);
        }

        match self {
            ClassSelector::Last => Ok(attributes.len() - 1),
            ClassSelector::First => Ok(0),
            ClassSelector::Named(name) => attributes
                .iter()
                .position(|attribute| attribute.name == *name)
                .ok_or_else(|| ArffError::ClassNotFound {
                    name: name.to_string(),
                }),
        }
    }

    /// Remove the class attribute from `attributes`
    ///
    /// Returns the class attribute and its declaration index, which is also
    /// the position of the class value in every data row.
    pub fn extract(&self, attributes: &mut Vec<Attribute>) -> Result<(Attribute, usize)> {
        let index = self.resolve(attributes)?;
        Ok((attributes.remove(index), index))
    }
}

impl From<bool> for ClassSelector {
    fn from(class_is_last: bool) -> Self {
        Self::from_position(class_is_last)
    }
}

impl From<&str> for ClassSelector {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ClassSelector {
    fn from(name: String) -> Self {
        ClassSelector::Named(name)
    }
}
