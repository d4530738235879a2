//! Validated text input widget.

use std::fmt;
use std::sync::Arc;

use formdom::Element;

use crate::config::{AddonPosition, FieldConfig};
use crate::events::KeyEvent;
use crate::rules::{self, PatternCache};
use crate::state::{PresentationState, Validity};

/// Called with the raw edited value after every change.
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Called with every key press, unmodified.
pub type KeyPressHandler = Arc<dyn Fn(&KeyEvent) + Send + Sync>;

/// Operations a host runtime drives on a form control.
pub trait FormControl {
    /// The user edited the control to `value`.
    fn handle_change(&mut self, value: &str);

    /// Forward a key press to the host without touching state.
    fn handle_key_press(&self, event: &KeyEvent);

    /// Force validation of the controlled value and report the verdict.
    fn validate(&mut self) -> bool;

    /// Build the markup for the current state.
    fn render(&self) -> Element;
}

/// A labeled text input with inline validation feedback.
///
/// The host owns the value: it passes it in through [`FieldConfig::value`],
/// receives edits via `on_change`, and hands back an updated config with
/// [`ValidatedInput::set_config`] before the next render.
///
/// # Example
///
/// ```
/// use validated_input::prelude::*;
///
/// let mut email = ValidatedInput::new(
///     FieldConfig::new("Email", "")
///         .email()
///         .empty_message("Email is required")
///         .error_message("Not a valid email"),
/// );
///
/// assert!(!email.validate());
/// assert_eq!(email.error_message(), "Email is required");
///
/// email.set_config(email.config().clone().with_value("user@example.com"));
/// assert!(email.validate());
/// ```
pub struct ValidatedInput {
    config: FieldConfig,
    state: PresentationState,
    on_change: Option<ChangeHandler>,
    on_key_press: Option<KeyPressHandler>,
    patterns: PatternCache,
    /// Set by every transition, cleared by the host after re-rendering.
    dirty: bool,
}

impl ValidatedInput {
    pub fn new(config: FieldConfig) -> Self {
        let state = PresentationState::initial(&config);
        Self {
            config,
            state,
            on_change: None,
            on_key_press: None,
            patterns: PatternCache::new(),
            dirty: false,
        }
    }

    /// Register the change callback.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Register the key press callback.
    pub fn on_key_press<F>(mut self, f: F) -> Self
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        self.on_key_press = Some(Arc::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn validity(&self) -> Validity {
        self.state.validity
    }

    pub fn error_message(&self) -> &str {
        &self.state.error_message
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn input_id(&self) -> String {
        self.config.input_id()
    }

    // -------------------------------------------------------------------------
    // Host updates
    // -------------------------------------------------------------------------

    /// Accept the configuration for the next render.
    ///
    /// The mirrored value follows the controlled value; the last verdict and
    /// message are kept until the next validation pass.
    pub fn set_config(&mut self, config: FieldConfig) {
        let next = self.state.synced(&config.value);
        self.config = config;
        self.apply(next);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn apply(&mut self, next: PresentationState) {
        if next != self.state {
            log::trace!(
                "Input '{}': {:?} -> {:?}",
                self.config.input_id(),
                self.state.validity,
                next.validity
            );
            self.state = next;
            self.dirty = true;
        }
    }

    /// Run the configured rule against `value`; `None` without a kind.
    fn run_rule(&mut self, value: &str) -> Option<bool> {
        let kind = self.config.validate_type?;
        let params = self.config.rule_params();
        Some(rules::evaluate_with(kind, value, &params, &mut self.patterns))
    }

    fn control(&self, id: &str) -> Element {
        let input = Element::input()
            .id(id)
            .class(self.config.class_name.as_deref().unwrap_or_default())
            .class("form-control")
            .attr_opt("placeholder", self.config.placeholder.as_deref())
            .attr("type", &self.config.input_type)
            .attr("value", &self.config.value);

        let Some(addon) = self.config.with_addon.as_deref().filter(|a| !a.is_empty()) else {
            return input;
        };

        let addon = Element::div().class("input-group-addon").text(addon);
        let group = Element::div().class("input-group");
        match self.config.addon_pos {
            AddonPosition::Left => group.child(addon).child(input),
            AddonPosition::Right => group.child(input).child(addon),
        }
    }
}

impl FormControl for ValidatedInput {
    fn handle_change(&mut self, value: &str) {
        let verdict = self.run_rule(value);
        let next = self.state.changed(value, verdict, &self.config);
        self.apply(next);

        if let Some(handler) = &self.on_change {
            handler(value);
        }
    }

    fn handle_key_press(&self, event: &KeyEvent) {
        if let Some(handler) = &self.on_key_press {
            handler(event);
        }
    }

    fn validate(&mut self) -> bool {
        let value = self.config.value.clone();
        let verdict = match self.run_rule(&value) {
            Some(verdict) => verdict,
            None => {
                log::debug!(
                    "Input '{}' validated without a validation kind",
                    self.config.input_id()
                );
                false
            }
        };
        let next = self.state.validated(verdict, &self.config);
        self.apply(next);
        verdict
    }

    fn render(&self) -> Element {
        let id = self.config.input_id();

        let label = Element::label()
            .class("control-label")
            .attr("for", &id)
            .text(&self.config.text);

        let help = Element::div()
            .class(self.state.help_class())
            .text(&self.state.error_message);

        Element::div()
            .class(self.state.container_class())
            .child(label)
            .child(self.control(&id))
            .child(help)
    }
}

impl fmt::Debug for ValidatedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedInput")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .field("on_key_press", &self.on_key_press.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}
