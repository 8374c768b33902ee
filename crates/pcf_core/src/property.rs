//! Property bags exchanged with the host
//!
//! The host speaks in loosely typed name/value pairs. Controls work with typed
//! structs instead, converting at the boundary through [`FromPropertyBag`] and
//! [`IntoPropertyBag`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PcfError, Result};
use crate::manifest::{ControlManifest, PropertyType};

/// A single property value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Unset / not yet computed
    Null,
    Bool(bool),
    Whole(i64),
    Text(String),
}

impl PropertyValue {
    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Whole(_) => "whole",
            PropertyValue::Text(_) => "text",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_whole(&self) -> Option<i64> {
        match self {
            PropertyValue::Whole(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Whole(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Whole(value.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, Into::into)
    }
}

/// Ordered name → value map
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: IndexMap<String, PropertyValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a value, returning the previous one
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Text value of `name`, if present and textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_text)
    }

    /// Whole-number value of `name`, if present and numeric
    pub fn whole(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(PropertyValue::as_whole)
    }

    /// Text value of `name`; absent and null both read as `None`, any other
    /// type is an error
    pub fn optional_text(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name) {
            None | Some(PropertyValue::Null) => Ok(None),
            Some(PropertyValue::Text(s)) => Ok(Some(s)),
            Some(other) => Err(type_error(name, "text", other)),
        }
    }

    /// Text value of `name`, which must be present
    pub fn require_text(&self, name: &str) -> Result<&str> {
        self.optional_text(name)?
            .ok_or_else(|| PcfError::MissingProperty(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy with every missing input filled from its manifest default
    pub fn with_defaults(&self, manifest: &ControlManifest) -> Self {
        let mut bag = self.clone();
        for spec in manifest.inputs() {
            if bag.contains(&spec.name) {
                continue;
            }
            if let Some(default) = &spec.default {
                bag.set(spec.name.clone(), default.clone());
            }
        }
        bag
    }

    /// Check this bag as the inputs of `manifest`
    ///
    /// Every required input must be present and non-null, every present
    /// value must match its declared type, and no undeclared names may
    /// appear.
    pub fn check_inputs(&self, manifest: &ControlManifest) -> Result<()> {
        for (name, value) in self.iter() {
            let Some(spec) = manifest.property(name).filter(|p| p.usage.is_input()) else {
                return Err(PcfError::UnknownProperty(name.to_string()));
            };
            if value.is_null() {
                continue;
            }
            if !spec.of_type.accepts(value) {
                return Err(type_error(name, spec.of_type.as_str(), value));
            }
            if spec.of_type == PropertyType::Enum {
                let member = value.as_text().unwrap_or_default();
                if !spec.values.iter().any(|v| v == member) {
                    return Err(PcfError::UnknownEnumValue {
                        name: name.to_string(),
                        value: member.to_string(),
                    });
                }
            }
        }

        for spec in manifest.inputs().filter(|p| p.required) {
            if self.get(&spec.name).map_or(true, PropertyValue::is_null) {
                return Err(PcfError::MissingProperty(spec.name.clone()));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyBag {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn type_error(name: &str, expected: &'static str, found: &PropertyValue) -> PcfError {
    PcfError::PropertyType {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Typed inputs read out of a host property bag
pub trait FromPropertyBag: Sized {
    fn from_bag(bag: &PropertyBag) -> Result<Self>;
}

/// Typed outputs written into a host property bag
pub trait IntoPropertyBag {
    fn to_bag(&self) -> PropertyBag;
}
