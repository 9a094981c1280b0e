use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Locales a voice can speak, identified by BCP-47 tag
///
/// The set is closed and every tag is unique. Parsing, display and serde all
/// use the tag (e.g. "en-US").
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum Language {
    #[strum(serialize = "ar-EG")]
    ArabicEgypt,
    #[strum(serialize = "de-DE")]
    GermanGermany,
    #[strum(serialize = "en-US")]
    EnglishUs,
    #[strum(serialize = "es-US")]
    SpanishUs,
    #[strum(serialize = "fr-FR")]
    FrenchFrance,
    #[strum(serialize = "hi-IN")]
    HindiIndia,
    #[strum(serialize = "id-ID")]
    IndonesianIndonesia,
    #[strum(serialize = "it-IT")]
    ItalianItaly,
    #[strum(serialize = "ja-JP")]
    JapaneseJapan,
    #[strum(serialize = "ko-KR")]
    KoreanKorea,
    #[strum(serialize = "pt-BR")]
    PortugueseBrazil,
    #[strum(serialize = "ru-RU")]
    RussianRussia,
    #[strum(serialize = "nl-NL")]
    DutchNetherlands,
    #[strum(serialize = "pl-PL")]
    PolishPoland,
    #[strum(serialize = "th-TH")]
    ThaiThailand,
    #[strum(serialize = "tr-TR")]
    TurkishTurkey,
    #[strum(serialize = "vi-VN")]
    VietnameseVietnam,
    #[strum(serialize = "ro-RO")]
    RomanianRomania,
    #[strum(serialize = "uk-UA")]
    UkrainianUkraine,
    #[strum(serialize = "bn-BD")]
    BengaliBangladesh,
    // Shipped together with hi-IN
    #[strum(serialize = "en-IN")]
    EnglishIndia,
    #[strum(serialize = "mr-IN")]
    MarathiIndia,
    #[strum(serialize = "ta-IN")]
    TamilIndia,
    #[strum(serialize = "te-IN")]
    TeluguIndia,
}

impl Language {
    /// BCP-47 tag
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// English name of the locale
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ArabicEgypt => "Arabic (Egypt)",
            Self::GermanGermany => "German (Germany)",
            Self::EnglishUs => "English (United States)",
            Self::SpanishUs => "Spanish (United States)",
            Self::FrenchFrance => "French (France)",
            Self::HindiIndia => "Hindi (India)",
            Self::IndonesianIndonesia => "Indonesian (Indonesia)",
            Self::ItalianItaly => "Italian (Italy)",
            Self::JapaneseJapan => "Japanese (Japan)",
            Self::KoreanKorea => "Korean (Korea)",
            Self::PortugueseBrazil => "Portuguese (Brazil)",
            Self::RussianRussia => "Russian (Russia)",
            Self::DutchNetherlands => "Dutch (Netherlands)",
            Self::PolishPoland => "Polish (Poland)",
            Self::ThaiThailand => "Thai (Thailand)",
            Self::TurkishTurkey => "Turkish (Turkey)",
            Self::VietnameseVietnam => "Vietnamese (Vietnam)",
            Self::RomanianRomania => "Romanian (Romania)",
            Self::UkrainianUkraine => "Ukrainian (Ukraine)",
            Self::BengaliBangladesh => "Bengali (Bangladesh)",
            Self::EnglishIndia => "English (India)",
            Self::MarathiIndia => "Marathi (India)",
            Self::TamilIndia => "Tamil (India)",
            Self::TeluguIndia => "Telugu (India)",
        }
    }
}
