//! Core vocabulary library shared by the backend and mobile clients.
//!
//! Provides:
//! - Answer matching for quiz mode (accents, articles, `/` variants)
//! - Vocabulary highlighting for generated stories
//! - Story word selection, prompts and response cleanup
//! - Backup document export and validated import
//! - Quiz and listen mode state machines
//! - Shared types (Word, VocabPair, StoryResult, etc.)

pub mod backup;
pub mod error;
pub mod highlight;
pub mod listen;
pub mod matching;
pub mod normalize;
pub mod quiz;
pub mod search;
pub mod speech;
pub mod story;
pub mod types;

pub use backup::{export_backup, parse_backup, BackupDocument, BACKUP_VERSION};
pub use error::{BackupError, QuizError, Result, ValidationError};
pub use highlight::{resolve, segment, Segment};
pub use listen::{ListenCommand, ListenEvent, ListenPhase, ListenSession};
pub use matching::{
    answer_variants, compare_answers, matches, single_matches, MatchResult, MatchTier,
};
pub use normalize::{fold_accents, normalize_whitespace, strip_article};
pub use quiz::{check_word, AnswerFeedback, QuizDirection, QuizQuestion, QuizScore, QuizSession};
pub use search::{search_words, sort_words, SortOrder};
pub use speech::{Language, SpeechOptions, SpeechSynthesizer, Voice, VoiceResolver};
pub use story::{select_used_words, selection_size, MIN_STORY_WORDS};
pub use types::{NewWord, StoryResult, VocabPair, Word, WordPatch};
