//! # PCF Controls (pcf_controls)
//!
//! Embeddable controls built on the `pcf_core` host contract.
//!
//! - **Salepitit** ([`ResizeButton`]) - a button that either keeps a fixed
//!   106x40 footprint or stretches to whatever the host allocates, reporting
//!   its preferred size back as outputs
//! - **Confirm** ([`Confirm`]) - a yes/no prompt that raises `onOk` /
//!   `onCancel` on the host
//!
//! ## Example
//!
//! ```ignore
//! use pcf_controls::prelude::*;
//!
//! let mut button = pcf::resize_button().label("Resize me");
//! button.init(ctx, notify);
//!
//! let prompt = pcf::confirm().cancel_text("Cancel");
//! ```

pub mod components;
pub mod manifests;

pub use components::*;
pub use manifests::bundled_manifest;

/// Convenience module for accessing controls with `pcf::` prefix
pub mod pcf {
    pub use crate::components::confirm::confirm;
    pub use crate::components::resize_button::resize_button;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::confirm::{confirm, Confirm, ConfirmInputs};
    pub use crate::components::resize_button::{
        resize_button, ResizeButton, ResizeButtonInputs, ResizeButtonOutputs, ResizeController,
        SizeMode,
    };
    pub use crate::components::size_state::SizeState;
    pub use crate::pcf;
    // Re-export the host contract controls are driven through
    pub use pcf_core::{
        Context, FromPropertyBag, Geometry, HostContainer, HostEvents, IntoPropertyBag,
        NotifyOutputChanged, PropertyBag, StandardControl, UiEvent,
    };
}
