//! PCF Core
//!
//! This crate provides the host-facing primitives every control is written
//! against:
//!
//! - **Geometry**: container allocation as reported by the host, with the
//!   "not yet allocated" sentinel made explicit
//! - **Host Container**: allocation readers and the resize-tracking toggle
//! - **Property Bags**: dynamically typed input/output values exchanged with
//!   the host, plus the traits that bind them to typed structs
//! - **Manifests**: the TOML description of a control's properties and events
//! - **Lifecycle**: the [`StandardControl`] trait (init, update, outputs,
//!   destroy) and the [`Context`] handed to it on every update
//!
//! # Example
//!
//! ```rust
//! use pcf_core::{Geometry, PropertyBag, PropertyValue};
//!
//! let geometry = Geometry::new(300, -1);
//! assert_eq!(geometry.width(), Some(300));
//! assert_eq!(geometry.height(), None);
//!
//! let mut bag = PropertyBag::new();
//! bag.set("Size", PropertyValue::from("fill"));
//! assert_eq!(bag.text("Size"), Some("fill"));
//! ```

pub mod context;
pub mod error;
pub mod events;
pub mod geometry;
pub mod manifest;
pub mod property;

pub use context::{Context, HostContainer, NotifyOutputChanged, StandardControl};
pub use error::{PcfError, Result};
pub use events::{HostEvents, NoHostEvents, UiEvent};
pub use geometry::{Geometry, ALLOCATION_UNKNOWN};
pub use manifest::{ControlManifest, EventSpec, PropertySpec, PropertyType, PropertyUsage};
pub use property::{FromPropertyBag, IntoPropertyBag, PropertyBag, PropertyValue};
