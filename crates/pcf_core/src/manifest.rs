//! Control manifests
//!
//! A manifest declares what a control exchanges with its host: the input and
//! output properties (with their types and defaults) and the events the
//! control may raise. Manifests are written in TOML:
//!
//! ```toml
//! namespace = "Contoso"
//! constructor = "Salepitit"
//! version = "0.0.1"
//! display_name = "Salepitit"
//!
//! [[property]]
//! name = "Size"
//! usage = "input"
//! of_type = "enum"
//! values = ["default", "fill"]
//! default = "default"
//!
//! [[property]]
//! name = "PreferredWidth"
//! usage = "output"
//! of_type = "whole"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PcfError, Result};
use crate::property::PropertyValue;

/// Parsed control manifest
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlManifest {
    pub namespace: String,
    pub constructor: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertySpec>,
    #[serde(default, rename = "event")]
    pub events: Vec<EventSpec>,
}

fn default_version() -> String {
    "0.0.1".to_string()
}

/// Direction of a property relative to the control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyUsage {
    Input,
    Output,
    /// Read by the control and written back to the host
    Bound,
}

impl PropertyUsage {
    pub fn is_input(&self) -> bool {
        matches!(self, PropertyUsage::Input | PropertyUsage::Bound)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, PropertyUsage::Output | PropertyUsage::Bound)
    }
}

/// Declared property type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Whole,
    Text,
    Enum,
    TwoOptions,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Whole => "whole",
            PropertyType::Text => "text",
            PropertyType::Enum => "enum",
            PropertyType::TwoOptions => "two_options",
        }
    }

    /// Whether `value` has the representation this type uses
    pub fn accepts(&self, value: &PropertyValue) -> bool {
        matches!(
            (self, value),
            (_, PropertyValue::Null)
                | (PropertyType::Whole, PropertyValue::Whole(_))
                | (PropertyType::Text | PropertyType::Enum, PropertyValue::Text(_))
                | (PropertyType::TwoOptions, PropertyValue::Bool(_))
        )
    }
}

/// One `[[property]]` entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    pub usage: PropertyUsage,
    pub of_type: PropertyType,
    /// Members of an enum property
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropertyValue>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One `[[event]]` entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ControlManifest {
    /// Parse and validate a manifest
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: ControlManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PcfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            constructor = %manifest.constructor,
            "loaded control manifest"
        );
        Ok(manifest)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for spec in &self.properties {
            if !names.insert(spec.name.as_str()) {
                return Err(invalid(format!("duplicate property `{}`", spec.name)));
            }
            if spec.of_type == PropertyType::Enum && spec.values.is_empty() {
                return Err(invalid(format!("enum property `{}` has no values", spec.name)));
            }
            if spec.of_type != PropertyType::Enum && !spec.values.is_empty() {
                return Err(invalid(format!(
                    "property `{}` lists values but is not an enum",
                    spec.name
                )));
            }
            let Some(default) = &spec.default else {
                continue;
            };
            if !spec.usage.is_input() {
                return Err(invalid(format!(
                    "output property `{}` cannot have a default",
                    spec.name
                )));
            }
            if !spec.of_type.accepts(default) {
                return Err(invalid(format!(
                    "default of `{}` is {}, expected {}",
                    spec.name,
                    default.kind(),
                    spec.of_type.as_str()
                )));
            }
            if spec.of_type == PropertyType::Enum {
                let member = default.as_text().unwrap_or_default();
                if !spec.values.iter().any(|v| v == member) {
                    return Err(invalid(format!(
                        "default `{}` of `{}` is not one of its values",
                        member, spec.name
                    )));
                }
            }
        }

        let mut events = HashSet::new();
        for event in &self.events {
            if !events.insert(event.name.as_str()) {
                return Err(invalid(format!("duplicate event `{}`", event.name)));
            }
        }
        Ok(())
    }

    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.iter().filter(|p| p.usage.is_input())
    }

    pub fn outputs(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.iter().filter(|p| p.usage.is_output())
    }

    pub fn declares_event(&self, name: &str) -> bool {
        self.events.iter().any(|e| e.name == name)
    }

    /// Display name, falling back to the constructor
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.constructor)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| invalid(e.to_string()))
    }
}

fn invalid(message: String) -> PcfError {
    PcfError::ManifestInvalid(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = r#"
namespace = "Contoso"
constructor = "Confirm"
display_name = "Confirm prompt"

[[property]]
name = "prompt"
usage = "input"
of_type = "text"
required = true

[[property]]
name = "Result"
usage = "bound"
of_type = "two_options"

[[event]]
name = "onOk"

[[event]]
name = "onCancel"
"#;

    #[test]
    fn test_parse_basic_manifest() {
        let m = ControlManifest::from_toml_str(BASIC).unwrap();
        assert_eq!(m.constructor, "Confirm");
        assert_eq!(m.version, "0.0.1");
        assert_eq!(m.title(), "Confirm prompt");
        assert_eq!(m.inputs().count(), 2);
        assert_eq!(m.outputs().count(), 1);
        assert!(m.declares_event("onOk"));
        assert!(!m.declares_event("onClose"));
        assert!(m.property("prompt").unwrap().required);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let m = ControlManifest::from_toml_str(BASIC).unwrap();
        let again = ControlManifest::from_toml_str(&m.to_toml().unwrap()).unwrap();
        assert_eq!(m, again);
    }

    fn expect_invalid(src: &str, needle: &str) {
        match ControlManifest::from_toml_str(src) {
            Err(PcfError::ManifestInvalid(msg)) => {
                assert!(msg.contains(needle), "`{msg}` should mention `{needle}`")
            }
            other => panic!("expected invalid manifest, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_property_rejected() {
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[property]]
name = "A"
usage = "input"
of_type = "text"
[[property]]
name = "A"
usage = "output"
of_type = "whole"
"#,
            "duplicate property",
        );
    }

    #[test]
    fn test_duplicate_event_rejected() {
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[event]]
name = "onOk"
[[event]]
name = "onOk"
"#,
            "duplicate event",
        );
    }

    #[test]
    fn test_enum_rules() {
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[property]]
name = "Size"
usage = "input"
of_type = "enum"
"#,
            "has no values",
        );
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[property]]
name = "Size"
usage = "input"
of_type = "enum"
values = ["default", "fill"]
default = "huge"
"#,
            "not one of its values",
        );
    }

    #[test]
    fn test_default_rules() {
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[property]]
name = "Width"
usage = "input"
of_type = "whole"
default = "wide"
"#,
            "expected whole",
        );
        expect_invalid(
            r#"
namespace = "N"
constructor = "C"
[[property]]
name = "Width"
usage = "output"
of_type = "whole"
default = 3
"#,
            "cannot have a default",
        );
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = ControlManifest::from_toml_str("namespace = ").unwrap_err();
        assert!(matches!(err, PcfError::ManifestParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ControlManifest::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PcfError::Io { .. }));
    }
}
