//! Confirm - a yes/no prompt
//!
//! Shows "Êtes vous sûr de vouloir {prompt} ?" with an OK and a cancel
//! button, and raises the manifest events `onOk` / `onCancel` on the host.
//!
//! # Example
//!
//! ```ignore
//! use pcf_controls::prelude::*;
//!
//! let mut prompt = pcf::confirm()
//!     .ok_text("Oui")
//!     .cancel_text("Non");
//!
//! prompt.init(ctx, notify);
//! prompt.dispatch(&UiEvent::click(Confirm::OK_TARGET));
//! ```

use std::sync::Arc;

use pcf_core::{
    Context, FromPropertyBag, HostEvents, IntoPropertyBag, NotifyOutputChanged, PropertyBag,
    StandardControl, UiEvent,
};

/// Event raised when the user accepts
pub const ON_OK: &str = "onOk";
/// Event raised when the user declines
pub const ON_CANCEL: &str = "onCancel";

/// Typed inputs of the confirm prompt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmInputs {
    /// Action the user is asked to confirm; unset renders as empty
    pub prompt: Option<String>,
}

impl ConfirmInputs {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }
}

impl FromPropertyBag for ConfirmInputs {
    fn from_bag(bag: &PropertyBag) -> pcf_core::Result<Self> {
        Ok(Self {
            prompt: bag.optional_text("prompt")?.map(str::to_string),
        })
    }
}

/// The confirm prompt declares no outputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfirmOutputs;

impl IntoPropertyBag for ConfirmOutputs {
    fn to_bag(&self) -> PropertyBag {
        PropertyBag::new()
    }
}

/// Create a confirm prompt with the default button labels
pub fn confirm() -> Confirm {
    Confirm::new()
}

/// The Confirm control
pub struct Confirm {
    ok_text: String,
    cancel_text: String,
    prompt_text: String,
    /// Host event sink from the latest context; `None` when not mounted
    events: Option<Arc<dyn HostEvents>>,
}

impl Confirm {
    /// Element name of the OK button
    pub const OK_TARGET: &'static str = "ok";
    /// Element name of the cancel button
    pub const CANCEL_TARGET: &'static str = "cancel";

    pub fn new() -> Self {
        Self {
            ok_text: "OK".to_string(),
            cancel_text: "Annuler".to_string(),
            prompt_text: String::new(),
            events: None,
        }
    }

    /// Set the OK button label
    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = text.into();
        self
    }

    /// Set the cancel button label
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn ok_label(&self) -> &str {
        &self.ok_text
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_text
    }

    /// Prompt paragraph as last rendered
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn is_mounted(&self) -> bool {
        self.events.is_some()
    }

    /// Accept: raise `onOk` on the host
    pub fn ok(&self) -> bool {
        self.fire(ON_OK)
    }

    /// Decline: raise `onCancel` on the host
    pub fn cancel(&self) -> bool {
        self.fire(ON_CANCEL)
    }

    fn fire(&self, event: &str) -> bool {
        match &self.events {
            Some(events) => {
                tracing::debug!(event, "confirm event");
                events.fire(event);
                true
            }
            None => false,
        }
    }

    fn update_elements(&mut self, inputs: &ConfirmInputs) {
        self.prompt_text = format_prompt(inputs.prompt.as_deref().unwrap_or_default());
    }
}

impl Default for Confirm {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the prompt sentence, with a no-break space before the question mark
pub fn format_prompt(prompt: &str) -> String {
    format!("Êtes vous sûr de vouloir {prompt}\u{a0}?")
}

impl StandardControl for Confirm {
    type Inputs = ConfirmInputs;
    type Outputs = ConfirmOutputs;

    fn init(&mut self, ctx: Context<'_, Self::Inputs>, _notify: NotifyOutputChanged) {
        self.events = Some(ctx.events);
        self.update_elements(ctx.parameters);
    }

    fn update_view(&mut self, ctx: Context<'_, Self::Inputs>) {
        // Only a mounted control listens for clicks
        if self.events.is_some() {
            self.events = Some(ctx.events);
        }
        self.update_elements(ctx.parameters);
    }

    fn get_outputs(&self) -> Self::Outputs {
        ConfirmOutputs
    }

    fn destroy(&mut self) {
        self.events = None;
    }

    fn dispatch(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Click { target } if target == Self::OK_TARGET => self.ok(),
            UiEvent::Click { target } if target == Self::CANCEL_TARGET => self.cancel(),
            UiEvent::Click { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcf_core::{Geometry, HostContainer};
    use std::sync::Mutex;

    struct FixedHost;

    impl HostContainer for FixedHost {
        fn allocated_width(&self) -> i32 {
            Geometry::unknown().allocated_width
        }

        fn allocated_height(&self) -> i32 {
            Geometry::unknown().allocated_height
        }

        fn set_resize_tracking(&mut self, _enabled: bool) {}
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Arc<dyn HostEvents>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let events: Arc<dyn HostEvents> = Arc::new(move |event: &str| {
            sink.lock().unwrap().push(event.to_string());
        });
        (fired, events)
    }

    fn noop_notify() -> NotifyOutputChanged {
        Arc::new(|| {})
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            format_prompt("supprimer ce fichier"),
            "Êtes vous sûr de vouloir supprimer ce fichier\u{a0}?"
        );
    }

    #[test]
    fn test_prompt_updates_with_inputs() {
        let (_, events) = recorder();
        let mut host = FixedHost;
        let mut c = confirm();

        let inputs = ConfirmInputs::new("partir");
        c.init(Context::new(&inputs, &mut host, events.clone()), noop_notify());
        assert_eq!(c.prompt_text(), "Êtes vous sûr de vouloir partir\u{a0}?");

        let inputs = ConfirmInputs::default();
        c.update_view(Context::new(&inputs, &mut host, events));
        assert_eq!(c.prompt_text(), "Êtes vous sûr de vouloir \u{a0}?");
    }

    #[test]
    fn test_clicks_raise_host_events() {
        let (fired, events) = recorder();
        let mut host = FixedHost;
        let mut c = confirm();
        let inputs = ConfirmInputs::new("valider");
        c.init(Context::new(&inputs, &mut host, events), noop_notify());

        assert!(c.dispatch(&UiEvent::click(Confirm::OK_TARGET)));
        assert!(c.dispatch(&UiEvent::click(Confirm::CANCEL_TARGET)));
        assert!(!c.dispatch(&UiEvent::click("prompt")));
        assert_eq!(*fired.lock().unwrap(), vec![ON_OK, ON_CANCEL]);
    }

    #[test]
    fn test_destroy_detaches_listeners() {
        let (fired, events) = recorder();
        let mut host = FixedHost;
        let mut c = confirm();
        let inputs = ConfirmInputs::new("valider");
        c.init(Context::new(&inputs, &mut host, events.clone()), noop_notify());
        c.destroy();

        assert!(!c.is_mounted());
        assert!(!c.dispatch(&UiEvent::click(Confirm::OK_TARGET)));
        // Updates after destroy do not re-attach
        c.update_view(Context::new(&inputs, &mut host, events));
        assert!(!c.cancel());
        assert!(fired.lock().unwrap().is_empty());
    }

    #[test]
    fn test_labels() {
        let c = confirm();
        assert_eq!(c.ok_label(), "OK");
        assert_eq!(c.cancel_label(), "Annuler");

        let c = confirm().ok_text("Oui").cancel_text("Non");
        assert_eq!(c.ok_label(), "Oui");
        assert_eq!(c.cancel_label(), "Non");
    }

    #[test]
    fn test_inputs_from_bag() {
        let inputs = ConfirmInputs::from_bag(&PropertyBag::new().with("prompt", "x")).unwrap();
        assert_eq!(inputs.prompt.as_deref(), Some("x"));
        let inputs = ConfirmInputs::from_bag(&PropertyBag::new()).unwrap();
        assert_eq!(inputs.prompt, None);
        assert!(ConfirmInputs::from_bag(&PropertyBag::new().with("prompt", 3)).is_err());
        assert!(ConfirmOutputs.to_bag().is_empty());
    }
}
