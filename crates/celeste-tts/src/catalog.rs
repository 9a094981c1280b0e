//! Built-in voice catalog used to seed the registry

use celeste_core::Provider;
use strum::IntoEnumIterator;

use crate::{Language, Voice};

/// Locales a catalog voice speaks
#[derive(Debug, Clone, Copy)]
pub enum CatalogLanguages {
    /// Every variant of [`Language`]
    All,
    Only(&'static [Language]),
}

/// Static description of a catalog voice
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub provider: Provider,
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub languages: CatalogLanguages,
}

impl CatalogEntry {
    pub fn to_voice(&self) -> Voice {
        let languages: Vec<Language> = match self.languages {
            CatalogLanguages::All => Language::iter().collect(),
            CatalogLanguages::Only(languages) => languages.to_vec(),
        };

        Voice::new(self.provider, self.id, self.display_name, self.description, languages)
    }
}

const fn google(id: &'static str, display_name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        provider: Provider::Google,
        id,
        display_name,
        description,
        languages: CatalogLanguages::All,
    }
}

const fn openai(id: &'static str, display_name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        provider: Provider::OpenAi,
        id,
        display_name,
        description,
        languages: CatalogLanguages::All,
    }
}

/// Seed entries, registered in this order
pub static VOICE_CATALOG: &[CatalogEntry] = &[
    // Gemini prebuilt voices
    google("Zephyr", "Zephyr (Bright)", "Bright"),
    google("Puck", "Puck (Upbeat)", "Upbeat"),
    google("Charon", "Charon (Informative)", "Informative"),
    google("Kore", "Kore (Firm)", "Firm"),
    google("Fenrir", "Fenrir (Excitable)", "Excitable"),
    google("Leda", "Leda (Youthful)", "Youthful"),
    google("Orus", "Orus (Firm)", "Firm"),
    google("Aoede", "Aoede (Breezy)", "Breezy"),
    google("Callirrhoe", "Callirrhoe (Easy-going)", "Easy-going"),
    google("Autonoe", "Autonoe (Bright)", "Bright"),
    google("Enceladus", "Enceladus (Breathy)", "Breathy"),
    google("Iapetus", "Iapetus (Clear)", "Clear"),
    google("Umbriel", "Umbriel (Easy-going)", "Easy-going"),
    google("Algieba", "Algieba (Smooth)", "Smooth"),
    google("Despina", "Despina (Smooth)", "Smooth"),
    google("Erinome", "Erinome (Clear)", "Clear"),
    google("Algenib", "Algenib (Gravelly)", "Gravelly"),
    google("Rasalgethi", "Rasalgethi (Informative)", "Informative"),
    google("Laomedeia", "Laomedeia (Upbeat)", "Upbeat"),
    google("Achernar", "Achernar (Soft)", "Soft"),
    google("Alnilam", "Alnilam (Firm)", "Firm"),
    google("Schedar", "Schedar (Even)", "Even"),
    google("Gacrux", "Gacrux (Mature)", "Mature"),
    google("Pulcherrima", "Pulcherrima (Forward)", "Forward"),
    google("Achird", "Achird (Friendly)", "Friendly"),
    google("Zubenelgenubi", "Zubenelgenubi (Casual)", "Casual"),
    google("Vindemiatrix", "Vindemiatrix (Gentle)", "Gentle"),
    google("Sadachbia", "Sadachbia (Lively)", "Lively"),
    google("Sadaltager", "Sadaltager (Knowledgeable)", "Knowledgeable"),
    google("Sulafat", "Sulafat (Warm)", "Warm"),
    // OpenAI built-in voices
    openai("alloy", "Alloy", "Neutral"),
    openai("ash", "Ash", "Clear"),
    openai("ballad", "Ballad", "Melodic"),
    openai("coral", "Coral", "Warm"),
    openai("echo", "Echo", "Resonant"),
    openai("fable", "Fable", "Expressive"),
    openai("nova", "Nova", "Bright"),
    openai("onyx", "Onyx", "Deep"),
    openai("sage", "Sage", "Calm"),
    openai("shimmer", "Shimmer", "Soft"),
];
