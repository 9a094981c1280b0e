use std::collections::BTreeSet;

use celeste_core::Provider;
use serde::Serialize;

use crate::Language;

/// A named synthesis persona offered by a provider
///
/// Identity is the `(provider, id)` pair; ids are only unique within a
/// provider. Voices are never edited in place, the registry replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voice {
    /// Identifier the backend expects (e.g. "Kore")
    pub id: String,
    /// Owning backend
    pub provider: Provider,
    /// Locales this voice can speak
    pub languages: BTreeSet<Language>,
    /// Characteristic label (e.g. "Firm", "Bright")
    pub description: String,
    /// Human-readable label
    pub display_name: String,
}

impl Voice {
    pub fn new(
        provider: Provider,
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        languages: impl IntoIterator<Item = Language>,
    ) -> Self {
        Self {
            id: id.into(),
            provider,
            languages: languages.into_iter().collect(),
            description: description.into(),
            display_name: display_name.into(),
        }
    }

    /// Whether this voice can speak `language`
    pub fn supports_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Registry key
    pub(crate) fn key(&self) -> (Provider, String) {
        (self.provider, self.id.clone())
    }
}
