//! Field configuration supplied by the host on every render.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::{RuleParams, ValidationKind};
use crate::utils::slug::slugify;

/// Which side of the control an addon sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddonPosition {
    #[serde(rename = "left")]
    Left,
    /// Anything other than `left` places the addon on the right.
    #[default]
    #[serde(rename = "right")]
    #[serde(other)]
    Right,
}

fn default_input_type() -> String {
    "text".into()
}

/// Immutable configuration of one validated input.
///
/// Field names serialize in camelCase so a field can be declared as data:
///
/// ```
/// use validated_input::config::FieldConfig;
/// use validated_input::rules::ValidationKind;
///
/// let config = FieldConfig::from_json(
///     r#"{ "text": "Email", "value": "", "validateType": "email" }"#,
/// ).unwrap();
/// assert_eq!(config.validate_type, Some(ValidationKind::Email));
/// assert_eq!(config.input_type, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Label text, also the source of the derived input id.
    #[serde(default)]
    pub text: String,

    /// Explicit input id. Derived from `text` when absent.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub placeholder: Option<String>,

    /// Extra classes for the input, placed before `form-control`.
    #[serde(default)]
    pub class_name: Option<String>,

    /// The input's `type` attribute.
    #[serde(rename = "type", default = "default_input_type")]
    pub input_type: String,

    /// The controlled value.
    pub value: String,

    /// Shown when validation fails on an empty value.
    #[serde(default)]
    pub empty_message: String,

    /// Shown when validation fails on a non-empty value.
    #[serde(default)]
    pub error_message: String,

    #[serde(default)]
    pub validate_type: Option<ValidationKind>,

    #[serde(default)]
    pub password_min_length: Option<usize>,

    #[serde(default)]
    pub limit_number: Option<f64>,

    #[serde(default)]
    pub validate_pattern: Option<String>,

    /// Value a `re_password` field must equal.
    #[serde(default)]
    pub rel_value: Option<String>,

    /// Addon text; the input is wrapped in an input group when non-empty.
    #[serde(default)]
    pub with_addon: Option<String>,

    #[serde(default)]
    pub addon_pos: AddonPosition,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            id: None,
            placeholder: None,
            class_name: None,
            input_type: default_input_type(),
            value: String::new(),
            empty_message: String::new(),
            error_message: String::new(),
            validate_type: None,
            password_min_length: None,
            limit_number: None,
            validate_pattern: None,
            rel_value: None,
            with_addon: None,
            addon_pos: AddonPosition::default(),
        }
    }
}

impl FieldConfig {
    /// Create a config with a label and the current controlled value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The id linking label and input: explicit id, else the slugified text.
    pub fn input_id(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => slugify(&self.text),
        }
    }

    /// Borrow the kind-specific parameters.
    pub fn rule_params(&self) -> RuleParams<'_> {
        RuleParams {
            password_min_length: self.password_min_length,
            limit_number: self.limit_number,
            pattern: self.validate_pattern.as_deref(),
            rel_value: self.rel_value.as_deref(),
        }
    }

    /// Message for a failed verdict on `value`.
    pub fn failure_message(&self, value: &str) -> &str {
        if value.is_empty() {
            &self.empty_message
        } else {
            &self.error_message
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Replace the controlled value, keeping everything else.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn empty_message(mut self, msg: impl Into<String>) -> Self {
        self.empty_message = msg.into();
        self
    }

    pub fn error_message(mut self, msg: impl Into<String>) -> Self {
        self.error_message = msg.into();
        self
    }

    pub fn validate_type(mut self, kind: ValidationKind) -> Self {
        self.validate_type = Some(kind);
        self
    }

    pub fn required(self) -> Self {
        self.validate_type(ValidationKind::Required)
    }

    pub fn email(self) -> Self {
        self.validate_type(ValidationKind::Email)
    }

    pub fn url(self) -> Self {
        self.validate_type(ValidationKind::Url)
    }

    pub fn only_positive_numbers(self) -> Self {
        self.validate_type(ValidationKind::OnlyPositiveNumbers)
    }

    pub fn password(mut self, min_length: usize) -> Self {
        self.password_min_length = Some(min_length);
        self.validate_type(ValidationKind::Password)
    }

    /// Require the value to equal `rel_value` (password confirmation).
    pub fn re_password(mut self, rel_value: impl Into<String>) -> Self {
        self.rel_value = Some(rel_value.into());
        self.validate_type(ValidationKind::RePassword)
    }

    pub fn positive_number_with_limit(mut self, limit: f64) -> Self {
        self.limit_number = Some(limit);
        self.validate_type(ValidationKind::PositiveNumberWithLimit)
    }

    pub fn custom(mut self, pattern: impl Into<String>) -> Self {
        self.validate_pattern = Some(pattern.into());
        self.validate_type(ValidationKind::Custom)
    }

    pub fn with_addon(mut self, addon: impl Into<String>) -> Self {
        self.with_addon = Some(addon.into());
        self
    }

    pub fn addon_pos(mut self, pos: AddonPosition) -> Self {
        self.addon_pos = pos;
        self
    }
}
