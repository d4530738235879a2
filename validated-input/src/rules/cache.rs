use regex::Regex;

use crate::error::RuleError;

/// Holds the last compiled custom pattern.
///
/// A field re-validates on every keystroke; the pattern only changes when the
/// host supplies a new one, so it is compiled once per distinct string.
#[derive(Debug, Default, Clone)]
pub struct PatternCache {
    compiled: Option<(String, Regex)>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled regex for `pattern`, compiling it on a miss.
    pub fn get(&mut self, pattern: &str) -> Result<&Regex, RuleError> {
        if self.compiled.as_ref().is_none_or(|(cached, _)| cached != pattern) {
            log::trace!("Compiling validation pattern '{}'", pattern);
            let re = compile_pattern(pattern)?;
            self.compiled = Some((pattern.to_string(), re));
        }
        self.compiled
            .as_ref()
            .map(|(_, re)| re)
            .ok_or_else(|| RuleError::PatternNotCached(pattern.to_string()))
    }

    /// The pattern currently held, if any.
    pub fn cached_pattern(&self) -> Option<&str> {
        self.compiled.as_ref().map(|(p, _)| p.as_str())
    }

    pub fn clear(&mut self) {
        self.compiled = None;
    }
}

/// Compile a custom validation pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
