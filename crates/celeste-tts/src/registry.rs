//! In-memory index of voices by provider and language
//!
//! The registry is an ordinary value: construct one, pass it to whoever
//! needs it. Mutation takes `&mut self`, so sharing it across tasks that
//! also write requires an external lock (e.g. `Arc<RwLock<VoiceRegistry>>`).
//!
//! Listings are ordered by provider identifier, then voice id. Positions in
//! a listing stay valid only until the next `register_voice`, `clear` or
//! reload.

use std::collections::{BTreeMap, BTreeSet};

use celeste_core::Provider;

use crate::{Language, Voice, catalog::VOICE_CATALOG};

/// Mapping from `(provider, voice id)` to voice metadata
#[derive(Debug, Clone, Default)]
pub struct VoiceRegistry {
    voices: BTreeMap<(Provider, String), Voice>,
}

impl VoiceRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in catalog
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        registry.reload_voice_catalog();
        registry
    }

    /// Insert a voice, replacing any previous entry with the same key
    pub fn register_voice(&mut self, voice: Voice) {
        if self.voices.insert(voice.key(), voice).is_some() {
            tracing::trace!("replaced existing voice entry");
        }
    }

    /// Remove every voice
    pub fn clear_voice_registry(&mut self) {
        self.voices.clear();
    }

    /// Exact lookup by provider and voice id
    pub fn get_voice(&self, provider: Provider, voice_id: &str) -> Option<&Voice> {
        self.voices.get(&(provider, voice_id.to_owned()))
    }

    /// Voices matching every given filter
    pub fn list_voices(&self, provider: Option<Provider>, language: Option<Language>) -> Vec<&Voice> {
        self.voices
            .values()
            .filter(|v| provider.is_none_or(|p| v.provider == p))
            .filter(|v| language.is_none_or(|l| v.supports_language(l)))
            .collect()
    }

    /// Distinct providers, sorted by identifier
    ///
    /// With a `language`, only providers having at least one voice that
    /// speaks it are returned.
    pub fn list_voice_providers(&self, language: Option<Language>) -> Vec<Provider> {
        let providers: BTreeSet<Provider> = self
            .voices
            .values()
            .filter(|v| language.is_none_or(|l| v.supports_language(l)))
            .map(|v| v.provider)
            .collect();

        providers.into_iter().collect()
    }

    /// Whether a voice exists and speaks `language`
    pub fn voice_supports_language(&self, provider: Provider, voice_id: &str, language: Language) -> bool {
        self.get_voice(provider, voice_id)
            .is_some_and(|v| v.supports_language(language))
    }

    /// Replace the contents with the built-in catalog
    pub fn reload_voice_catalog(&mut self) {
        self.clear_voice_registry();

        for entry in VOICE_CATALOG {
            self.register_voice(entry.to_voice());
        }

        tracing::debug!(voices = self.voices.len(), "voice catalog loaded");
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
