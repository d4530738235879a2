//! Rule evaluator: stateless predicates keyed by [`ValidationKind`].
//!
//! An invalid value is a plain `false`. [`RuleError`] is reserved for rules
//! that cannot run at all (unknown kind, missing or broken parameter), and
//! [`evaluate`] folds those into `false` as well.
//!
//! The email, URL and password checks are policies, documented on each
//! predicate, and can be swapped without touching the widget.

mod cache;
mod kind;

pub use cache::{PatternCache, compile_pattern};
pub use kind::ValidationKind;

use email_address::EmailAddress;
use url::{Host, Url};

use crate::error::RuleError;

/// Minimum password length when the field configures none (or zero).
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

/// Upper bound for `positiveNumberWithLimit` when none is configured, or
/// the configured one is zero or NaN.
pub const DEFAULT_LIMIT_NUMBER: f64 = 1.0;

/// Kind-specific parameters, borrowed from the field configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuleParams<'a> {
    pub password_min_length: Option<usize>,
    pub limit_number: Option<f64>,
    pub pattern: Option<&'a str>,
    pub rel_value: Option<&'a str>,
}

impl<'a> RuleParams<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_min_length(mut self, len: usize) -> Self {
        self.password_min_length = Some(len);
        self
    }

    pub fn limit_number(mut self, limit: f64) -> Self {
        self.limit_number = Some(limit);
        self
    }

    pub fn pattern(mut self, pattern: &'a str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn rel_value(mut self, rel_value: &'a str) -> Self {
        self.rel_value = Some(rel_value);
        self
    }
}

/// Evaluate `kind` against `value`, treating any configuration problem as invalid.
pub fn evaluate(kind: ValidationKind, value: &str, params: &RuleParams<'_>) -> bool {
    evaluate_with(kind, value, params, &mut PatternCache::new())
}

/// Like [`evaluate`], reusing a compiled custom pattern across calls.
pub fn evaluate_with(
    kind: ValidationKind,
    value: &str,
    params: &RuleParams<'_>,
    cache: &mut PatternCache,
) -> bool {
    match try_evaluate_with(kind, value, params, cache) {
        Ok(verdict) => {
            log::debug!("Rule '{}' verdict: {}", kind, verdict);
            verdict
        }
        Err(e) => {
            log::warn!("Rule '{}' could not be evaluated: {}", kind, e);
            false
        }
    }
}

/// Evaluate `kind` against `value`, reporting configuration problems.
pub fn try_evaluate(
    kind: ValidationKind,
    value: &str,
    params: &RuleParams<'_>,
) -> Result<bool, RuleError> {
    try_evaluate_with(kind, value, params, &mut PatternCache::new())
}

/// Like [`try_evaluate`], reusing a compiled custom pattern across calls.
pub fn try_evaluate_with(
    kind: ValidationKind,
    value: &str,
    params: &RuleParams<'_>,
    cache: &mut PatternCache,
) -> Result<bool, RuleError> {
    let verdict = match kind {
        ValidationKind::Email => check_email(value),
        ValidationKind::Required => check_required(value),
        ValidationKind::OnlyPositiveNumbers => check_number_positive(value),
        ValidationKind::Url => check_url(value),
        ValidationKind::Password => check_password(
            value,
            params
                .password_min_length
                .filter(|len| *len > 0)
                .unwrap_or(DEFAULT_PASSWORD_MIN_LENGTH),
        ),
        ValidationKind::RePassword => {
            let rel_value = params.rel_value.ok_or(RuleError::MissingParameter {
                kind,
                param: "relValue",
            })?;
            check_re_password(value, rel_value)
        }
        ValidationKind::PositiveNumberWithLimit => positive_number_with_limit(
            value,
            params
                .limit_number
                .filter(|limit| *limit != 0.0 && !limit.is_nan())
                .unwrap_or(DEFAULT_LIMIT_NUMBER),
        ),
        ValidationKind::Custom => {
            let pattern = params.pattern.ok_or(RuleError::MissingParameter {
                kind,
                param: "validatePattern",
            })?;
            cache.get(pattern)?.is_match(value)
        }
        ValidationKind::Unrecognized => {
            return Err(RuleError::UnrecognizedKind(kind.to_string()));
        }
    };
    Ok(verdict)
}

// -----------------------------------------------------------------------------
// Predicates
// -----------------------------------------------------------------------------

pub fn check_required(value: &str) -> bool {
    !value.is_empty()
}

/// A single address, `local@domain`, whose domain has an inner dot.
///
/// Syntax is checked by `email_address`; the dot requirement rejects bare
/// hosts such as `user@localhost`.
pub fn check_email(value: &str) -> bool {
    if !EmailAddress::is_valid(value) {
        return false;
    }
    match value.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// An absolute `http`/`https` URL with a usable host.
///
/// Domain hosts must be `localhost` or dotted with no empty labels; IP hosts
/// are accepted. Any whitespace rejects the value.
pub fn check_url(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(parsed) = Url::parse(value) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            domain == "localhost"
                || (domain.contains('.') && domain.split('.').all(|label| !label.is_empty()))
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Parse a finite number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

pub fn check_number_positive(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

/// At least `min_length` characters and no whitespace.
pub fn check_password(value: &str, min_length: usize) -> bool {
    value.chars().count() >= min_length && !value.chars().any(char::is_whitespace)
}

pub fn check_re_password(value: &str, rel_value: &str) -> bool {
    value == rel_value
}

pub fn positive_number_with_limit(value: &str, limit: f64) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0 && n <= limit)
}

/// Unanchored regex search, compiling `pattern` on each call.
pub fn custom_validation(value: &str, pattern: &str) -> Result<bool, RuleError> {
    Ok(compile_pattern(pattern)?.is_match(value))
}
