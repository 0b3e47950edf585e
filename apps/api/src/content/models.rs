use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tone of the generated post. Parsed from the exact display name the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Casual,
    Inspiring,
    Empathetic,
    Supportive,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Inspiring,
        Tone::Empathetic,
        Tone::Supportive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Inspiring => "Inspiring",
            Tone::Empathetic => "Empathetic",
            Tone::Supportive => "Supportive",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTone;

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(UnknownTone)
    }
}

/// Validated SME profile. Only constructed by the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub industry: String,
    pub tone: Tone,
    pub target_audience: String,
}

/// A fully validated submission, consumed once by the prompt composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRequest {
    pub prompt: String,
    /// `None` when the submitted topic was absent or empty.
    pub trending_topic: Option<String>,
    pub profile: Profile,
}

/// Unvalidated form / JSON body. Missing keys deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub tone: Option<String>,
    pub target_audience: Option<String>,
    pub prompt: Option<String>,
    pub trending_topic: Option<String>,
}

/// Final post-processed output for one submission. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPost {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub content: String,
}
