//! Alias bindings used to resolve surface symbol references.

use std::collections::HashMap;

/// Maps surface symbol names to canonical lowered names.
#[derive(Debug, Clone, Default)]
pub struct SymbolAliases {
    aliases: HashMap<String, String>,
}

impl SymbolAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an alias to its canonical name. An alias may only be bound
    /// once.
    pub fn bind(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        let alias = alias.into();
        let previous = self.aliases.insert(alias.clone(), canonical.into());
        assert!(previous.is_none(), "alias {} bound twice", alias);
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn from_pairs<A, C>(pairs: impl IntoIterator<Item = (A, C)>) -> Self
    where
        A: Into<String>,
        C: Into<String>,
    {
        let mut aliases = Self::new();
        for (alias, canonical) in pairs {
            aliases.bind(alias, canonical);
        }
        aliases
    }
}
