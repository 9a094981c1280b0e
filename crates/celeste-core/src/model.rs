use serde::Serialize;

use crate::{Capability, Provider};

/// A provider model usable for a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Model {
    /// Identifier sent to the provider API
    pub id: &'static str,
    /// Owning provider
    pub provider: Provider,
    /// Capability this model serves
    pub capability: Capability,
    /// Human-readable label
    pub display_name: &'static str,
}

/// Known models, the first entry per provider and capability is its default
pub static MODEL_CATALOG: &[Model] = &[
    Model {
        id: "gemini-2.5-flash-preview-tts",
        provider: Provider::Google,
        capability: Capability::TextToSpeech,
        display_name: "Gemini 2.5 Flash TTS",
    },
    Model {
        id: "gemini-2.5-pro-preview-tts",
        provider: Provider::Google,
        capability: Capability::TextToSpeech,
        display_name: "Gemini 2.5 Pro TTS",
    },
    Model {
        id: "gpt-4o-mini-tts",
        provider: Provider::OpenAi,
        capability: Capability::TextToSpeech,
        display_name: "GPT-4o mini TTS",
    },
    Model {
        id: "tts-1",
        provider: Provider::OpenAi,
        capability: Capability::TextToSpeech,
        display_name: "TTS 1",
    },
    Model {
        id: "tts-1-hd",
        provider: Provider::OpenAi,
        capability: Capability::TextToSpeech,
        display_name: "TTS 1 HD",
    },
];

/// List catalog models, optionally filtered by provider and capability
pub fn list_models(provider: Option<Provider>, capability: Option<Capability>) -> Vec<&'static Model> {
    MODEL_CATALOG
        .iter()
        .filter(|m| provider.is_none_or(|p| m.provider == p))
        .filter(|m| capability.is_none_or(|c| m.capability == c))
        .collect()
}

/// Look up a model by provider and identifier
pub fn get_model(provider: Provider, id: &str) -> Option<&'static Model> {
    MODEL_CATALOG.iter().find(|m| m.provider == provider && m.id == id)
}

/// Default model of a provider for a capability
pub fn default_model(provider: Provider, capability: Capability) -> Option<&'static Model> {
    MODEL_CATALOG
        .iter()
        .find(|m| m.provider == provider && m.capability == capability)
}
