//! Word selection, prompts and response cleanup for generated reading passages.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{VocabPair, Word};

/// Fewest words a story is generated from.
pub const MIN_STORY_WORDS: usize = 10;

/// Lower bound on words woven into one story.
pub const MIN_USED_WORDS: usize = 15;

/// Upper bound on words woven into one story.
pub const MAX_USED_WORDS: usize = 25;

/// Share of the vocabulary a story aims to reuse.
const SELECTION_RATIO: f64 = 0.3;

/// Example sentences kept per word.
pub const MAX_EXAMPLES: usize = 3;

/// How many words a story over `total` words uses.
///
/// 30% of the vocabulary clamped to 15..=25, never more than `total`.
pub fn selection_size(total: usize) -> usize {
    let target = (total as f64 * SELECTION_RATIO).round() as usize;
    target.clamp(MIN_USED_WORDS, MAX_USED_WORDS).min(total)
}

/// Pick the words for a story: a random permutation cut to [`selection_size`].
pub fn select_used_words<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Vec<VocabPair> {
    let mut picked: Vec<&Word> = words.iter().collect();
    picked.shuffle(rng);
    picked
        .into_iter()
        .take(selection_size(words.len()))
        .map(Word::pair)
        .collect()
}

/// Prompt asking for a short European Portuguese story using every selected word.
pub fn story_prompt(used_words: &[VocabPair]) -> String {
    let list = used_words
        .iter()
        .map(|pair| pair.portuguese.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Escreve uma pequena história em português europeu, com 150 a 200 palavras, \
         para um estudante de nível intermédio. Usa todas as palavras seguintes, \
         escritas exatamente assim: {list}. \
         Responde apenas com a história, sem título e sem tradução."
    )
}

/// Prompt asking for example sentences for one word.
pub fn examples_prompt(word: &Word) -> String {
    format!(
        "Dá {MAX_EXAMPLES} frases curtas em português europeu que usem \"{}\" \
         (em francês: \"{}\"). Uma frase por linha, sem numeração e sem tradução.",
        word.portuguese, word.french
    )
}

/// Remove `*`, `**` and `__` emphasis markers.
pub fn strip_markdown_emphasis(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .trim()
        .to_string()
}

/// One example per non-empty line, list markers removed.
pub fn parse_examples(text: &str) -> Vec<String> {
    strip_markdown_emphasis(text)
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(MAX_EXAMPLES)
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    let line = line.trim_start_matches(['-', '•']).trim_start();

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..]
            .strip_prefix('.')
            .or_else(|| line[digits..].strip_prefix(')'))
        {
            return rest.trim();
        }
    }
    line
}
