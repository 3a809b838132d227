use std::collections::HashMap;

/// Maps raw author tokens to canonical contributor names.
///
/// An alias mapped to a blank name suppresses that author entirely.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    aliases: HashMap<String, String>,
}

impl AliasResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later registrations of the same alias replace earlier ones.
    pub fn with_alias(mut self, alias: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(alias, name);
        self
    }

    pub fn insert(&mut self, alias: impl Into<String>, name: impl Into<String>) {
        self.aliases.insert(alias.into(), name.into());
    }

    /// Returns the canonical name for `raw`, or `None` when the author is
    /// suppressed. Unknown tokens pass through unchanged.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let token = strip_quotes(raw);
        match self.aliases.get(token) {
            Some(name) if name.trim().is_empty() => None,
            Some(name) => Some(name.clone()),
            None => Some(token.to_string()),
        }
    }
}

pub(crate) fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '\'' || c == '"').trim()
}
