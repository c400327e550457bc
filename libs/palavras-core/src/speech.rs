//! Speech synthesis boundary and voice selection.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Speaking rate used when none is configured.
pub const DEFAULT_RATE: f32 = 0.9;

/// Languages the app speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Portuguese,
    French,
}

impl Language {
    /// BCP-47 tag handed to the synthesizer.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Portuguese => "pt-PT",
            Self::French => "fr-FR",
        }
    }
}

/// A voice installed on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub language: String,
    pub identifier: String,
    pub name: String,
}

/// Options for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechOptions {
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    pub rate: f32,
}

impl SpeechOptions {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            voice: None,
            rate: DEFAULT_RATE,
        }
    }

    pub fn with_voice(mut self, voice: Option<String>) -> Self {
        self.voice = voice;
        self
    }
}

/// Platform text-to-speech.
///
/// Completion, stop and failure are reported back to the caller as
/// [`crate::listen::ListenEvent`]s by the platform adapter.
pub trait SpeechSynthesizer {
    fn speak(&self, text: &str, options: &SpeechOptions);
    fn stop(&self);
    fn list_voices(&self) -> Vec<Voice>;
}

/// First installed voice whose language tag is exactly `language`.
///
/// Tags are compared case-insensitively and `pt_PT` is treated as `pt-PT`.
pub fn preferred_voice(voices: &[Voice], language: Language) -> Option<String> {
    voices
        .iter()
        .find(|voice| voice.language.replace('_', "-").eq_ignore_ascii_case(language.tag()))
        .map(|voice| voice.identifier.clone())
}

/// Lazily resolved European Portuguese voice.
///
/// The first caller lists voices; concurrent callers wait for that result.
/// A device without a pt-PT voice resolves to `None` and the platform default is used.
#[derive(Debug, Default)]
pub struct VoiceResolver {
    voice: OnceLock<Option<String>>,
}

impl VoiceResolver {
    pub const fn new() -> Self {
        Self {
            voice: OnceLock::new(),
        }
    }

    pub fn resolve<S: SpeechSynthesizer + ?Sized>(&self, synthesizer: &S) -> Option<&str> {
        self.voice
            .get_or_init(|| preferred_voice(&synthesizer.list_voices(), Language::Portuguese))
            .as_deref()
    }
}

/// Process-wide pt-PT voice, resolved on first use.
pub static PORTUGUESE_VOICE: VoiceResolver = VoiceResolver::new();
