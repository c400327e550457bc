//! Listen mode: speak each word in Portuguese, pause, speak the French, pause, repeat.
//!
//! The session never touches a speaker or a clock. It returns [`ListenCommand`]s for
//! the platform to execute and is fed [`ListenEvent`]s back as speech and timers finish.

use crate::speech::{Language, SpeechOptions, SpeechSynthesizer, PORTUGUESE_VOICE};
use crate::types::VocabPair;

/// Pause between the Portuguese word and its translation.
pub const PAUSE_BEFORE_TRANSLATION_MS: u64 = 1_500;

/// Pause between two words.
pub const PAUSE_BETWEEN_WORDS_MS: u64 = 2_000;

/// Work for the platform to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum ListenCommand {
    Speak { text: String, options: SpeechOptions },
    StartTimer { delay_ms: u64 },
    CancelTimer,
    StopSpeech,
}

/// Notifications from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenEvent {
    SpeechDone,
    SpeechStopped,
    SpeechFailed,
    TimerFired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenPhase {
    Idle,
    SpeakingPortuguese,
    PauseBeforeTranslation,
    SpeakingFrench,
    PauseBeforeNext,
    /// Stop requested, waiting for the synthesizer to confirm.
    Stopping,
    Finished,
}

#[derive(Debug, Clone)]
pub struct ListenSession {
    words: Vec<VocabPair>,
    position: usize,
    phase: ListenPhase,
    portuguese_voice: Option<String>,
    restart_pending: bool,
}

impl ListenSession {
    pub fn new(words: Vec<VocabPair>, portuguese_voice: Option<String>) -> Self {
        Self {
            words,
            position: 0,
            phase: ListenPhase::Idle,
            portuguese_voice,
            restart_pending: false,
        }
    }

    /// Session using the process-wide pt-PT voice of `synthesizer`.
    pub fn for_synthesizer<S: SpeechSynthesizer + ?Sized>(
        words: Vec<VocabPair>,
        synthesizer: &S,
    ) -> Self {
        let voice = PORTUGUESE_VOICE.resolve(synthesizer).map(str::to_string);
        Self::new(words, voice)
    }

    pub fn phase(&self) -> ListenPhase {
        self.phase
    }

    /// Index of the word being played.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Start or resume playback.
    ///
    /// While an earlier stop is still unconfirmed nothing is spoken; playback
    /// resumes once the synthesizer reports it stopped.
    pub fn start(&mut self) -> Vec<ListenCommand> {
        match self.phase {
            ListenPhase::Stopping => {
                self.restart_pending = true;
                vec![]
            }
            ListenPhase::Idle => self.speak_portuguese(),
            ListenPhase::Finished => {
                self.position = 0;
                self.speak_portuguese()
            }
            _ => vec![],
        }
    }

    /// Stop playback, cancelling whatever is pending.
    pub fn stop(&mut self) -> Vec<ListenCommand> {
        match self.phase {
            ListenPhase::SpeakingPortuguese | ListenPhase::SpeakingFrench => {
                self.phase = ListenPhase::Stopping;
                vec![ListenCommand::StopSpeech]
            }
            ListenPhase::PauseBeforeTranslation | ListenPhase::PauseBeforeNext => {
                self.phase = ListenPhase::Idle;
                vec![ListenCommand::CancelTimer]
            }
            ListenPhase::Stopping => {
                self.restart_pending = false;
                vec![]
            }
            ListenPhase::Idle | ListenPhase::Finished => vec![],
        }
    }

    /// Advance on a platform notification. Events that do not fit the
    /// current phase are stale and ignored.
    pub fn handle(&mut self, event: ListenEvent) -> Vec<ListenCommand> {
        use ListenEvent::{SpeechDone, SpeechFailed, SpeechStopped, TimerFired};

        match (self.phase, event) {
            (ListenPhase::SpeakingPortuguese, SpeechDone | SpeechFailed) => {
                self.phase = ListenPhase::PauseBeforeTranslation;
                vec![ListenCommand::StartTimer {
                    delay_ms: PAUSE_BEFORE_TRANSLATION_MS,
                }]
            }
            (ListenPhase::PauseBeforeTranslation, TimerFired) => self.speak_french(),
            (ListenPhase::SpeakingFrench, SpeechDone | SpeechFailed) => {
                self.phase = ListenPhase::PauseBeforeNext;
                vec![ListenCommand::StartTimer {
                    delay_ms: PAUSE_BETWEEN_WORDS_MS,
                }]
            }
            (ListenPhase::PauseBeforeNext, TimerFired) => {
                self.position += 1;
                self.speak_portuguese()
            }
            (ListenPhase::Stopping, SpeechStopped | SpeechDone | SpeechFailed) => {
                self.phase = ListenPhase::Idle;
                if std::mem::take(&mut self.restart_pending) {
                    self.speak_portuguese()
                } else {
                    vec![]
                }
            }
            _ => vec![],
        }
    }

    fn speak_portuguese(&mut self) -> Vec<ListenCommand> {
        let Some(word) = self.words.get(self.position) else {
            self.phase = ListenPhase::Finished;
            return vec![];
        };
        let command = ListenCommand::Speak {
            text: word.portuguese.clone(),
            options: SpeechOptions::new(Language::Portuguese)
                .with_voice(self.portuguese_voice.clone()),
        };
        self.phase = ListenPhase::SpeakingPortuguese;
        vec![command]
    }

    fn speak_french(&mut self) -> Vec<ListenCommand> {
        let Some(word) = self.words.get(self.position) else {
            self.phase = ListenPhase::Finished;
            return vec![];
        };
        let command = ListenCommand::Speak {
            text: word.french.clone(),
            options: SpeechOptions::new(Language::French),
        };
        self.phase = ListenPhase::SpeakingFrench;
        vec![command]
    }
}
