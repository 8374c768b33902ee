//! Manifests bundled with the controls

use pcf_core::{ControlManifest, PcfError, Result};

/// Manifest of the Salepitit resize button
pub const RESIZE_BUTTON_MANIFEST: &str = include_str!("../manifests/resize_button.toml");
/// Manifest of the confirm prompt
pub const CONFIRM_MANIFEST: &str = include_str!("../manifests/confirm.toml");

/// Names accepted by [`bundled_manifest`]
pub const BUNDLED: &[&str] = &["resize_button", "confirm"];

/// Parse the bundled manifest for the control called `name`
pub fn bundled_manifest(name: &str) -> Result<ControlManifest> {
    let source = match name {
        "resize_button" => RESIZE_BUTTON_MANIFEST,
        "confirm" => CONFIRM_MANIFEST,
        other => {
            return Err(PcfError::ManifestInvalid(format!(
                "no bundled manifest named `{other}`"
            )))
        }
    };
    ControlManifest::from_toml_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::prelude::*;

    #[test]
    fn test_all_bundled_manifests_validate() {
        for name in BUNDLED {
            let manifest = bundled_manifest(name).unwrap();
            assert_eq!(manifest.namespace, "Contoso");
        }
        assert!(bundled_manifest("slider").is_err());
    }

    #[test]
    fn test_resize_button_manifest_matches_types() {
        let manifest = bundled_manifest("resize_button").unwrap();
        assert_eq!(manifest.constructor, "Salepitit");

        let size = manifest.property("Size").unwrap();
        let members: Vec<_> = [SizeMode::Default, SizeMode::Fill]
            .iter()
            .map(SizeMode::as_str)
            .collect();
        assert_eq!(size.values, members);

        // The manifest default parses into the typed inputs
        let bag = PropertyBag::new().with_defaults(&manifest);
        bag.check_inputs(&manifest).unwrap();
        assert_eq!(
            ResizeButtonInputs::from_bag(&bag).unwrap().size,
            SizeMode::Default
        );

        let outputs = ResizeButtonOutputs {
            preferred_width: Some(DEFAULT_WIDTH),
            preferred_height: Some(DEFAULT_HEIGHT),
        }
        .to_bag();
        let declared: Vec<_> = manifest.outputs().map(|p| p.name.as_str()).collect();
        let written: Vec<_> = outputs.iter().map(|(name, _)| name).collect();
        assert_eq!(declared, written);
    }

    #[test]
    fn test_confirm_manifest_declares_events() {
        let manifest = bundled_manifest("confirm").unwrap();
        assert!(manifest.declares_event(crate::components::confirm::ON_OK));
        assert!(manifest.declares_event(crate::components::confirm::ON_CANCEL));
        assert_eq!(manifest.outputs().count(), 0);
    }
}
