//! Scenario files
//!
//! ```toml
//! name = "fill follows the container"
//! control = "resize_button"
//!
//! [[tick]]
//! inputs = { Size = "fill" }
//! allocated = [300, -1]
//! expect_notify = true
//! expect_outputs = { PreferredWidth = 300 }
//! expect_tracking = true
//! ```
//!
//! Inputs accumulate across ticks: a tick only lists the properties it
//! changes. When `allocated` is omitted the container keeps its previous
//! allocation (initially unknown on both axes).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pcf_core::PropertyBag;
use serde::Deserialize;

/// Which bundled control a scenario mounts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    ResizeButton,
    Confirm,
}

impl ControlKind {
    /// Name of the control's bundled manifest
    pub fn manifest_name(&self) -> &'static str {
        match self {
            ControlKind::ResizeButton => "resize_button",
            ControlKind::Confirm => "confirm",
        }
    }
}

/// A scripted host session
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub control: ControlKind,
    #[serde(default, rename = "tick")]
    pub ticks: Vec<TickSpec>,
}

/// One host update and the expectations checked after it
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickSpec {
    /// Properties changed on this tick
    #[serde(default)]
    pub inputs: PropertyBag,
    /// Container allocation `[width, height]`; `-1` = not allocated
    #[serde(default)]
    pub allocated: Option<[i32; 2]>,
    /// Element clicked after the update
    #[serde(default)]
    pub click: Option<String>,
    /// The host must reject this tick's input bag
    #[serde(default)]
    pub expect_rejected: bool,
    #[serde(default)]
    pub expect_notify: Option<bool>,
    /// Subset of outputs that must match after the tick
    #[serde(default)]
    pub expect_outputs: Option<PropertyBag>,
    #[serde(default)]
    pub expect_tracking: Option<bool>,
    /// Host events raised during the tick, in order
    #[serde(default)]
    pub expect_events: Option<Vec<String>>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let mut scenario = Self::from_toml_str(&content)
            .with_context(|| format!("in {}", path.display()))?;
        if scenario.name.is_none() {
            scenario.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(scenario)
    }

    /// Display name
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcf_core::PropertyValue;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_toml_str(
            r#"
control = "resize_button"

[[tick]]
inputs = { Size = "fill" }
allocated = [300, -1]
expect_notify = true
expect_outputs = { PreferredWidth = 300 }

[[tick]]
click = "ok"
"#,
        )
        .unwrap();
        assert_eq!(scenario.control, ControlKind::ResizeButton);
        assert_eq!(scenario.title(), "<unnamed>");
        assert_eq!(scenario.ticks.len(), 2);

        let first = &scenario.ticks[0];
        assert_eq!(first.allocated, Some([300, -1]));
        assert_eq!(first.expect_notify, Some(true));
        assert_eq!(
            first.expect_outputs.as_ref().unwrap().get("PreferredWidth"),
            Some(&PropertyValue::Whole(300))
        );

        let second = &scenario.ticks[1];
        assert!(second.inputs.is_empty());
        assert_eq!(second.allocated, None);
        assert_eq!(second.click.as_deref(), Some("ok"));
    }

    #[test]
    fn test_unknown_tick_key_rejected() {
        let err = Scenario::from_toml_str(
            r#"
control = "confirm"
[[tick]]
expect_notfy = true
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_control_rejected() {
        assert!(Scenario::from_toml_str("control = \"slider\"").is_err());
    }
}
