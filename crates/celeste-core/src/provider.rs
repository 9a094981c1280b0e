use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// External backends that Celeste can route requests to
///
/// The set is closed. Parsing an unknown identifier fails with
/// [`strum::ParseError`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Google Gemini API
    Google,
    /// `OpenAI` API
    OpenAi,
}

impl Provider {
    /// Canonical identifier (e.g. "google")
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

// Sorting always follows the canonical identifier, never declaration order
impl Ord for Provider {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Provider {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
