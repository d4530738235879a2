use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which predicate validates a field.
///
/// The set is closed. Names outside it deserialize (and parse) to
/// [`ValidationKind::Unrecognized`], which always evaluates as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationKind {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "onlyPositiveNumbers")]
    OnlyPositiveNumbers,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "re_password")]
    RePassword,
    #[serde(rename = "positiveNumberWithLimit")]
    PositiveNumberWithLimit,
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "unrecognized")]
    #[serde(other)]
    Unrecognized,
}

impl ValidationKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [ValidationKind; 8] = [
        Self::Email,
        Self::Required,
        Self::OnlyPositiveNumbers,
        Self::Url,
        Self::Password,
        Self::RePassword,
        Self::PositiveNumberWithLimit,
        Self::Custom,
    ];

    /// The configuration name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Required => "required",
            Self::OnlyPositiveNumbers => "onlyPositiveNumbers",
            Self::Url => "url",
            Self::Password => "password",
            Self::RePassword => "re_password",
            Self::PositiveNumberWithLimit => "positiveNumberWithLimit",
            Self::Custom => "custom",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Map a configuration name to a kind, falling back to `Unrecognized`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_else(|| {
                log::warn!("Unrecognized validation kind '{}'", name);
                Self::Unrecognized
            })
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}
