//! Scenario runner
//!
//! Mounts the scenario's control into a [`MockHost`], delivers each tick the
//! way a host shell would (first through `init`, then through `update_view`)
//! and compares what the host observes against the tick's expectations.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use pcf_controls::bundled_manifest;
use pcf_controls::prelude::*;
use pcf_core::PropertyValue;
use serde::Serialize;

use crate::host::{MockHost, NotifyCounter, RecordedEvents};
use crate::scenario::{ControlKind, Scenario, TickSpec};

/// One expectation that did not hold
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TickFailure {
    /// 1-based tick number
    pub tick: usize,
    pub message: String,
}

/// Outcome of one scenario
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub ticks: usize,
    pub notifications: usize,
    pub failures: Vec<TickFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Object-safe view of a mounted control
trait MountedControl {
    fn deliver(
        &mut self,
        first: bool,
        bag: &PropertyBag,
        host: &mut MockHost,
        events: Arc<dyn HostEvents>,
        notify: NotifyOutputChanged,
    ) -> pcf_core::Result<()>;

    fn outputs(&self) -> PropertyBag;

    fn dispatch(&mut self, event: &UiEvent) -> bool;

    fn destroy(&mut self);
}

struct Mounted<C> {
    control: C,
}

impl<C> MountedControl for Mounted<C>
where
    C: StandardControl,
    C::Inputs: FromPropertyBag,
    C::Outputs: IntoPropertyBag,
{
    fn deliver(
        &mut self,
        first: bool,
        bag: &PropertyBag,
        host: &mut MockHost,
        events: Arc<dyn HostEvents>,
        notify: NotifyOutputChanged,
    ) -> pcf_core::Result<()> {
        let inputs = C::Inputs::from_bag(bag)?;
        let ctx = Context::new(&inputs, host, events);
        if first {
            self.control.init(ctx, notify);
        } else {
            self.control.update_view(ctx);
        }
        Ok(())
    }

    fn outputs(&self) -> PropertyBag {
        self.control.get_outputs().to_bag()
    }

    fn dispatch(&mut self, event: &UiEvent) -> bool {
        self.control.dispatch(event)
    }

    fn destroy(&mut self) {
        self.control.destroy();
    }
}

fn mount(kind: ControlKind) -> Box<dyn MountedControl> {
    match kind {
        ControlKind::ResizeButton => Box::new(Mounted {
            control: pcf::resize_button(),
        }),
        ControlKind::Confirm => Box::new(Mounted {
            control: pcf::confirm(),
        }),
    }
}

/// Replays scenarios against freshly mounted controls
#[derive(Debug, Default)]
pub struct ScenarioRunner {
    /// Stop a scenario at its first failing tick
    pub fail_fast: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        let manifest = bundled_manifest(scenario.control.manifest_name())
            .with_context(|| format!("loading manifest for {:?}", scenario.control))?;

        let mut control = mount(scenario.control);
        let mut host = MockHost::new();
        let events = RecordedEvents::new();
        let counter = NotifyCounter::new();
        let mut bag = PropertyBag::new();
        let mut mounted = false;
        let mut failures = Vec::new();

        tracing::info!(
            scenario = scenario.title(),
            ticks = scenario.ticks.len(),
            "running scenario"
        );

        for (index, spec) in scenario.ticks.iter().enumerate() {
            let tick = index + 1;
            let notified_before = counter.count();
            let mut problems = Vec::new();

            let mut next = bag.clone();
            for (name, value) in spec.inputs.iter() {
                next.set(name, value.clone());
            }
            let next = next.with_defaults(&manifest);
            if let Some([width, height]) = spec.allocated {
                host.set_allocation(width, height);
            }

            let delivered = next.check_inputs(&manifest).and_then(|()| {
                let sink: Arc<dyn HostEvents> = Arc::new(events.clone());
                control.deliver(!mounted, &next, &mut host, sink, counter.notifier())
            });
            match delivered {
                Ok(()) if spec.expect_rejected => {
                    problems.push("expected the input bag to be rejected".to_string());
                }
                Ok(()) => {
                    mounted = true;
                    bag = next;
                }
                Err(err) if spec.expect_rejected => {
                    tracing::debug!(tick, error = %err, "input bag rejected as expected");
                }
                Err(err) => {
                    tracing::warn!(tick, error = %err, "input bag rejected");
                    problems.push(format!("input bag rejected: {err}"));
                }
            }

            if let Some(target) = &spec.click {
                if !control.dispatch(&UiEvent::click(target.as_str())) {
                    tracing::debug!(tick, target = %target, "click not handled");
                }
            }

            let notifications = counter.count() - notified_before;
            check_tick(
                spec,
                &host,
                events.take(),
                notifications,
                &control.outputs(),
                &mut problems,
            );

            let failed = !problems.is_empty();
            failures.extend(problems.into_iter().map(|message| TickFailure { tick, message }));
            if failed && self.fail_fast {
                break;
            }
        }

        control.destroy();

        Ok(ScenarioReport {
            name: scenario.title().to_string(),
            ticks: scenario.ticks.len(),
            notifications: counter.count(),
            failures,
        })
    }
}

fn check_tick(
    spec: &TickSpec,
    host: &MockHost,
    fired: Vec<String>,
    notifications: usize,
    outputs: &PropertyBag,
    problems: &mut Vec<String>,
) {
    // The host must never be told twice about the same tick
    if notifications > 1 {
        problems.push(format!("notified {notifications} times in one tick"));
    }

    if let Some(expected) = spec.expect_notify {
        let notified = notifications > 0;
        if notified != expected {
            problems.push(format!("expected notify={expected}, got {notified}"));
        }
    }

    if let Some(expected) = spec.expect_tracking {
        let actual = host.resize_tracking();
        if actual != Some(expected) {
            problems.push(format!("expected resize tracking {expected}, got {actual:?}"));
        }
    }

    if let Some(expected) = &spec.expect_outputs {
        for (name, value) in expected.iter() {
            let actual = outputs.get(name);
            if actual != Some(value) {
                problems.push(format!(
                    "output `{name}`: expected {}, got {}",
                    describe(Some(value)),
                    describe(actual)
                ));
            }
        }
    }

    if let Some(expected) = &spec.expect_events {
        if &fired != expected {
            problems.push(format!("expected events {expected:?}, got {fired:?}"));
        }
    }
}

/// Render a bag value for failure messages
fn describe(value: Option<&PropertyValue>) -> String {
    match value {
        None => "<absent>".to_string(),
        Some(PropertyValue::Null) => "null".to_string(),
        Some(PropertyValue::Bool(b)) => b.to_string(),
        Some(PropertyValue::Whole(n)) => n.to_string(),
        Some(PropertyValue::Text(s)) => format!("{s:?}"),
    }
}
