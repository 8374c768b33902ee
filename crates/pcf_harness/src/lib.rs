//! PCF Host Harness
//!
//! Replays scripted host sessions against the bundled controls without a real
//! host shell. A scenario is a TOML file listing update ticks (inputs,
//! container allocation, clicks) together with what the host should observe
//! after each one (notify, outputs, resize tracking, raised events).
//!
//! - **Host doubles**: [`MockHost`], [`RecordedEvents`], [`NotifyCounter`]
//! - **Scenarios**: [`Scenario`] / [`TickSpec`] parsed from TOML
//! - **Runner**: [`ScenarioRunner`] produces a [`ScenarioReport`]

pub mod host;
pub mod runner;
pub mod scenario;

pub use host::{MockHost, NotifyCounter, RecordedEvents};
pub use runner::{ScenarioReport, ScenarioRunner, TickFailure};
pub use scenario::{ControlKind, Scenario, TickSpec};
