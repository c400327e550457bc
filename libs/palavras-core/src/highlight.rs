//! Vocabulary highlighting for generated stories.
//!
//! A story is split into plain text and spans that equal a known Portuguese
//! phrase. Phrases are tried longest first, so `casa grande` is found as one span
//! rather than `casa` followed by plain ` grande`. When two phrases of equal length
//! overlap the same text, the leftmost alternative in the pattern wins.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::types::VocabPair;

/// A contiguous span of story text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    Match { text: String, translation: String },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Match { text, .. } => text,
        }
    }

    /// The French translation when this segment is a known word.
    pub fn translation(&self) -> Option<&str> {
        match self {
            Self::Plain { .. } => None,
            Self::Match { translation, .. } => Some(translation),
        }
    }

    fn plain(text: &str) -> Self {
        Self::Plain {
            text: text.to_string(),
        }
    }
}

/// Split `story` into plain and matched segments.
///
/// Concatenating the segment texts in order always reproduces `story`.
pub fn segment(story: &str, vocabulary: &[VocabPair]) -> Vec<Segment> {
    let Some(pattern) = phrase_pattern(vocabulary) else {
        return vec![Segment::plain(story)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(story) {
        if m.start() > last {
            segments.push(classify(&story[last..m.start()], vocabulary));
        }
        segments.push(classify(m.as_str(), vocabulary));
        last = m.end();
    }
    if last < story.len() || segments.is_empty() {
        segments.push(classify(&story[last..], vocabulary));
    }

    segments
}

/// Find the vocabulary entry whose Portuguese text equals `piece`, ignoring case.
pub fn resolve<'a>(piece: &str, vocabulary: &'a [VocabPair]) -> Option<&'a VocabPair> {
    if piece.trim().is_empty() {
        return None;
    }
    let piece = piece.to_lowercase();
    vocabulary
        .iter()
        .find(|pair| pair.portuguese.to_lowercase() == piece)
}

fn classify(piece: &str, vocabulary: &[VocabPair]) -> Segment {
    match resolve(piece, vocabulary) {
        Some(pair) => Segment::Match {
            text: piece.to_string(),
            translation: pair.french.clone(),
        },
        None => Segment::plain(piece),
    }
}

/// Case-insensitive alternation over the non-empty phrases, longest first.
fn phrase_pattern(vocabulary: &[VocabPair]) -> Option<Regex> {
    let mut phrases: Vec<&str> = vocabulary
        .iter()
        .map(|pair| pair.portuguese.as_str())
        .filter(|phrase| !phrase.trim().is_empty())
        .collect();
    if phrases.is_empty() {
        return None;
    }
    phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));

    let alternation = phrases
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .ok()
}
