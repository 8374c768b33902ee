//! Salepitit - a button that sizes itself from a mode input
//!
//! The `Size` input picks between two footprints:
//!
//! - `default`: a fixed 106x40 button, whatever the container does
//! - `fill`: the button tracks the host-allocated container size
//!
//! The control reports the size it settled on through the `PreferredWidth` /
//! `PreferredHeight` outputs, and notifies the host only when those outputs
//! (or the mode feeding them) actually moved.
//!
//! # Example
//!
//! ```ignore
//! use pcf_controls::prelude::*;
//!
//! let mut button = pcf::resize_button()
//!     .label("Salepitit")
//!     .default_size(106, 40);
//!
//! button.init(ctx, notify);
//! // ... host delivers more updates ...
//! let outputs = button.get_outputs();
//! ```

use std::fmt;
use std::str::FromStr;

use pcf_core::{
    Context, FromPropertyBag, Geometry, HostContainer, IntoPropertyBag, NotifyOutputChanged,
    PcfError, PropertyBag, StandardControl,
};

use super::size_state::SizeState;

/// Design width of the button in `default` mode
pub const DEFAULT_WIDTH: i32 = 106;
/// Design height of the button in `default` mode
pub const DEFAULT_HEIGHT: i32 = 40;

/// Value of the `Size` input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeMode {
    /// Fixed design footprint
    #[default]
    Default,
    /// Stretch to the allocated container
    Fill,
}

impl SizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeMode::Default => "default",
            SizeMode::Fill => "fill",
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, SizeMode::Fill)
    }
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeMode {
    type Err = PcfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SizeMode::Default),
            "fill" => Ok(SizeMode::Fill),
            other => Err(PcfError::UnknownEnumValue {
                name: "Size".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Typed inputs of the resize button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeButtonInputs {
    pub size: SizeMode,
}

impl ResizeButtonInputs {
    pub fn new(size: SizeMode) -> Self {
        Self { size }
    }
}

impl FromPropertyBag for ResizeButtonInputs {
    fn from_bag(bag: &PropertyBag) -> pcf_core::Result<Self> {
        let size = bag.require_text("Size")?.parse()?;
        Ok(Self { size })
    }
}

/// Typed outputs of the resize button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeButtonOutputs {
    pub preferred_width: Option<i32>,
    pub preferred_height: Option<i32>,
}

impl IntoPropertyBag for ResizeButtonOutputs {
    fn to_bag(&self) -> PropertyBag {
        PropertyBag::new()
            .with("PreferredWidth", self.preferred_width)
            .with("PreferredHeight", self.preferred_height)
    }
}

/// Size-mode resolution and change-notification dedup
///
/// Owns the [`SizeState`] and decides, once per update, the preferred size
/// and whether the host has to be told. Ticks are serialized by the host.
pub struct ResizeController {
    state: SizeState,
    /// Mode seen on the previous tick; `None` before the first one
    previous_mode: Option<SizeMode>,
    default_width: i32,
    default_height: i32,
    notify: Option<NotifyOutputChanged>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::with_default_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_default_size(width: i32, height: i32) -> Self {
        Self {
            state: SizeState::new(),
            previous_mode: None,
            default_width: width,
            default_height: height,
            notify: None,
        }
    }

    /// Install (or clear) the host's notify callback
    pub fn set_notifier(&mut self, notify: Option<NotifyOutputChanged>) {
        self.notify = notify;
    }

    pub fn has_notifier(&self) -> bool {
        self.notify.is_some()
    }

    /// Run one update tick
    ///
    /// Tells `host` whether to keep delivering resize updates, recomputes the
    /// preferred size and invokes the notify callback at most once. Returns
    /// whether outputs changed this tick (i.e. whether a notify was due).
    pub fn on_update(
        &mut self,
        mode: SizeMode,
        geometry: Geometry,
        host: &mut dyn HostContainer,
    ) -> bool {
        let is_fill = mode.is_fill();
        // Entering fill is host-observable even when the numbers coincide
        let changed_to_fill = is_fill && self.previous_mode != Some(SizeMode::Fill);
        self.previous_mode = Some(mode);

        host.set_resize_tracking(is_fill);

        if is_fill {
            tracing::debug!(
                width = geometry.allocated_width,
                height = geometry.allocated_height,
                "resolving fill allocation"
            );
            // Axes resolve independently; an unknown axis keeps its last value
            if let Some(width) = geometry.width() {
                self.state.set_preferred_width(Some(width));
            }
            if let Some(height) = geometry.height() {
                self.state.set_preferred_height(Some(height));
            }
        } else {
            self.state.set_preferred_width(Some(self.default_width));
            self.state.set_preferred_height(Some(self.default_height));
        }

        let changed = self.state.commit() || changed_to_fill;
        tracing::trace!(mode = %mode, changed, changed_to_fill, "resize tick");

        if changed {
            tracing::debug!(
                mode = %mode,
                width = ?self.state.preferred_width(),
                height = ?self.state.preferred_height(),
                "outputs changed"
            );
            if let Some(notify) = &self.notify {
                notify();
            }
        }
        changed
    }

    pub fn preferred_width(&self) -> Option<i32> {
        self.state.preferred_width()
    }

    pub fn preferred_height(&self) -> Option<i32> {
        self.state.preferred_height()
    }

    /// Mode of the most recent tick
    pub fn mode(&self) -> Option<SizeMode> {
        self.previous_mode
    }

    pub fn default_size(&self) -> (i32, i32) {
        (self.default_width, self.default_height)
    }

    /// Snapshot of the outputs as last resolved
    pub fn outputs(&self) -> ResizeButtonOutputs {
        ResizeButtonOutputs {
            preferred_width: self.state.preferred_width(),
            preferred_height: self.state.preferred_height(),
        }
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("state", &self.state)
            .field("previous_mode", &self.previous_mode)
            .field("default_width", &self.default_width)
            .field("default_height", &self.default_height)
            .field("has_notifier", &self.notify.is_some())
            .finish()
    }
}

/// Create a resize button with the default label and footprint
pub fn resize_button() -> ResizeButton {
    ResizeButton::new()
}

/// The Salepitit control
#[derive(Debug)]
pub struct ResizeButton {
    label: String,
    controller: ResizeController,
}

impl ResizeButton {
    pub fn new() -> Self {
        Self {
            label: "Salepitit".to_string(),
            controller: ResizeController::new(),
        }
    }

    /// Set the button label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the footprint used in `default` mode
    pub fn default_size(mut self, width: i32, height: i32) -> Self {
        self.controller = ResizeController::with_default_size(width, height);
        self
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn controller(&self) -> &ResizeController {
        &self.controller
    }
}

impl Default for ResizeButton {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardControl for ResizeButton {
    type Inputs = ResizeButtonInputs;
    type Outputs = ResizeButtonOutputs;

    fn init(&mut self, ctx: Context<'_, Self::Inputs>, notify: NotifyOutputChanged) {
        self.controller.set_notifier(Some(notify));
        ctx.mode.set_resize_tracking(true);
        self.update_view(ctx);
    }

    fn update_view(&mut self, ctx: Context<'_, Self::Inputs>) {
        let geometry = ctx.mode.geometry();
        self.controller.on_update(ctx.parameters.size, geometry, ctx.mode);
    }

    fn get_outputs(&self) -> Self::Outputs {
        self.controller.outputs()
    }

    fn destroy(&mut self) {
        self.controller.set_notifier(None);
    }
}
