//! Presentation state machine for a validated input.

use crate::config::FieldConfig;

/// Visual verdict of the last validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    /// No validation has run yet; no success or error styling.
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    pub fn from_verdict(verdict: bool) -> Self {
        if verdict { Self::Valid } else { Self::Invalid }
    }
}

/// State owned by one widget instance.
///
/// Transitions are pure: each returns the next state and leaves `self`
/// untouched. Emptiness is derived from `current_value`, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationState {
    /// Mirrors the controlled input.
    pub current_value: String,
    pub validity: Validity,
    /// Meaningful only while `validity` is `Invalid`.
    pub error_message: String,
}

impl PresentationState {
    /// State of a freshly constructed widget.
    pub fn initial(config: &FieldConfig) -> Self {
        Self {
            current_value: config.value.clone(),
            validity: Validity::Unknown,
            error_message: config.empty_message.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current_value.is_empty()
    }

    /// The user edited the control.
    ///
    /// `verdict` is `None` when no validation kind is configured, which keeps
    /// the current validity. A passing verdict keeps the previous message.
    pub fn changed(&self, value: &str, verdict: Option<bool>, config: &FieldConfig) -> Self {
        let mut next = Self {
            current_value: value.to_string(),
            ..self.clone()
        };
        if let Some(verdict) = verdict {
            next.validity = Validity::from_verdict(verdict);
            if !verdict {
                next.error_message = config.failure_message(value).to_string();
            }
        }
        next
    }

    /// An explicit validation request evaluated the controlled value.
    ///
    /// Success clears the message; failure picks the empty or error message.
    pub fn validated(&self, verdict: bool, config: &FieldConfig) -> Self {
        let error_message = if verdict {
            String::new()
        } else {
            config.failure_message(&config.value).to_string()
        };
        Self {
            current_value: self.current_value.clone(),
            validity: Validity::from_verdict(verdict),
            error_message,
        }
    }

    /// The host supplied a new controlled value.
    pub fn synced(&self, value: &str) -> Self {
        Self {
            current_value: value.to_string(),
            ..self.clone()
        }
    }

    /// Class of the outer container for the current verdict.
    pub fn container_class(&self) -> &'static str {
        match self.validity {
            Validity::Unknown => "form-group",
            Validity::Valid => "form-group has-success",
            Validity::Invalid => "form-group has-error",
        }
    }

    /// Whether the help text is visible.
    pub fn shows_error(&self) -> bool {
        self.validity == Validity::Invalid
    }

    /// Class of the help text node; hidden unless invalid.
    pub fn help_class(&self) -> &'static str {
        if self.shows_error() {
            "help-block"
        } else {
            "help-block hidden"
        }
    }
}
