//! Caller-supplied props.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{CLASS, CLASS_NAME};
use crate::value::ClassValue;

/// The variant choices and ad-hoc classes for one resolution.
///
/// An absent entry and an explicit [`ClassValue::Null`] are different: both
/// contribute no variant class, but only an absent entry is left out of the
/// props entirely.
///
/// # Example
///
/// ```rust
/// use cva::Props;
///
/// let props = Props::new()
///     .set("intent", "primary")
///     .set("margin", 4)
///     .class("mt-2");
///
/// assert_eq!(props.len(), 3);
/// assert!(props.get("size").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Props {
    values: IndexMap<String, ClassValue>,
}

impl Props {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning the updated props for chaining.
    pub fn set<V: Into<ClassValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a prop in place.
    pub fn insert<V: Into<ClassValue>>(&mut self, name: &str, value: V) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Sets the ad-hoc `class` prop.
    pub fn class<V: Into<ClassValue>>(self, classes: V) -> Self {
        self.set(CLASS, classes)
    }

    /// Sets the ad-hoc `className` prop.
    pub fn class_name<V: Into<ClassValue>>(self, classes: V) -> Self {
        self.set(CLASS_NAME, classes)
    }

    pub fn get(&self, name: &str) -> Option<&ClassValue> {
        self.values.get(name)
    }

    /// Iterates over props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<ClassValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, ClassValue>> for Props {
    fn from(values: IndexMap<String, ClassValue>) -> Self {
        Self { values }
    }
}
