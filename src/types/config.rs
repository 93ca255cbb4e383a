use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// Limits applied when compiling patterns for the regex comparators.
///
/// Attached per [`RuleSet`](super::RuleSet). The `regex` crate already
/// guarantees linear-time matching; these bound compile-time memory and
/// nesting depth for untrusted patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Approximate upper bound, in bytes, on a compiled pattern.
    pub size_limit: usize,
    /// Maximum nesting depth of a pattern's syntax tree.
    pub nest_limit: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            size_limit: 1 << 20,
            nest_limit: 64,
        }
    }
}

impl PatternConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    #[must_use]
    pub fn nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = depth;
        self
    }

    pub(crate) fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .nest_limit(self.nest_limit)
            .build()
    }
}
