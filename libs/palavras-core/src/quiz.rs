//! Quiz mode: ask each word once in random order and check typed answers.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::matching::{compare_answers, MatchResult};
use crate::types::Word;

/// Which side of a word is shown and which is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDirection {
    #[default]
    PortugueseToFrench,
    FrenchToPortuguese,
}

impl QuizDirection {
    /// Text shown to the learner.
    pub fn prompt(self, word: &Word) -> &str {
        match self {
            Self::PortugueseToFrench => &word.portuguese,
            Self::FrenchToPortuguese => &word.french,
        }
    }

    /// Field the answer is checked against.
    pub fn expected(self, word: &Word) -> &str {
        match self {
            Self::PortugueseToFrench => &word.french,
            Self::FrenchToPortuguese => &word.portuguese,
        }
    }
}

/// Check one answer for one word.
pub fn check_word(word: &Word, direction: QuizDirection, answer: &str) -> MatchResult {
    compare_answers(answer, direction.expected(word))
}

/// The question currently asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion<'a> {
    pub word_id: &'a str,
    pub prompt: &'a str,
    /// Zero-based position in the session.
    pub position: usize,
    pub total: usize,
}

/// Outcome of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// The full expected field, all variants included.
    pub expected: String,
    pub result: MatchResult,
}

/// Running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

/// A single pass over a shuffled word list.
#[derive(Debug, Clone)]
pub struct QuizSession {
    words: Vec<Word>,
    direction: QuizDirection,
    position: usize,
    current_answered: bool,
    score: QuizScore,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(
        mut words: Vec<Word>,
        direction: QuizDirection,
        rng: &mut R,
    ) -> Self {
        words.shuffle(rng);
        let total = words.len();
        Self {
            words,
            direction,
            position: 0,
            current_answered: false,
            score: QuizScore {
                total,
                ..QuizScore::default()
            },
        }
    }

    pub fn direction(&self) -> QuizDirection {
        self.direction
    }

    pub fn current(&self) -> Option<QuizQuestion<'_>> {
        let word = self.words.get(self.position)?;
        Some(QuizQuestion {
            word_id: &word.id,
            prompt: self.direction.prompt(word),
            position: self.position,
            total: self.words.len(),
        })
    }

    /// Check an answer for the current question. Each question takes one answer.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerFeedback, QuizError> {
        let word = self.words.get(self.position).ok_or(QuizError::Finished)?;
        if self.current_answered {
            return Err(QuizError::AlreadyAnswered);
        }
        if answer.trim().is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let result = check_word(word, self.direction, answer);
        let feedback = AnswerFeedback {
            correct: result.is_correct,
            expected: self.direction.expected(word).to_string(),
            result,
        };

        self.current_answered = true;
        self.score.answered += 1;
        if feedback.correct {
            self.score.correct += 1;
        }
        Ok(feedback)
    }

    /// Move to the next question, answered or not. Returns false once finished.
    pub fn next(&mut self) -> bool {
        if self.position < self.words.len() {
            self.position += 1;
            self.current_answered = false;
        }
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.words.len()
    }

    pub fn score(&self) -> QuizScore {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(id: &str, pt: &str, fr: &str) -> Word {
        Word {
            id: id.to_string(),
            portuguese: pt.to_string(),
            french: fr.to_string(),
            examples: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    fn session(direction: QuizDirection) -> QuizSession {
        let words = vec![
            word("1", "a casa", "la maison / le foyer"),
            word("2", "o gato", "le chat"),
        ];
        QuizSession::new(words, direction, &mut rand::thread_rng())
    }

    #[test]
    fn every_word_is_asked_once() {
        let mut quiz = session(QuizDirection::PortugueseToFrench);
        let mut seen = Vec::new();
        while let Some(question) = quiz.current() {
            seen.push(question.word_id.to_string());
            quiz.next();
        }
        seen.sort();
        assert_eq!(seen, vec!["1", "2"]);
        assert!(quiz.is_finished());
        assert!(!quiz.next());
    }

    #[test]
    fn answers_are_matched_leniently() {
        let mut quiz = session(QuizDirection::PortugueseToFrench);
        let answer = match quiz.current().unwrap().word_id {
            "1" => "foyer",
            _ => "CHAT",
        };
        let feedback = quiz.submit(answer).unwrap();
        assert!(feedback.correct);
        assert_eq!(quiz.score().correct, 1);
    }

    #[test]
    fn reverse_direction_checks_portuguese() {
        let mut quiz = session(QuizDirection::FrenchToPortuguese);
        assert_eq!(quiz.direction(), QuizDirection::FrenchToPortuguese);
        let question = quiz.current().unwrap();
        let (prompt, answer) = match question.word_id {
            "1" => ("la maison / le foyer", "casa"),
            _ => ("le chat", "gato"),
        };
        assert_eq!(question.prompt, prompt);
        assert!(quiz.submit(answer).unwrap().correct);
    }

    #[test]
    fn blank_answer_is_rejected() {
        let mut quiz = session(QuizDirection::PortugueseToFrench);
        assert_eq!(quiz.submit("   "), Err(QuizError::EmptyAnswer));
        assert_eq!(quiz.score().answered, 0);
    }

    #[test]
    fn one_answer_per_question() {
        let mut quiz = session(QuizDirection::PortugueseToFrench);
        let feedback = quiz.submit("voiture").unwrap();
        assert!(!feedback.correct);
        assert_eq!(quiz.submit("chat"), Err(QuizError::AlreadyAnswered));

        quiz.next();
        quiz.submit("voiture").unwrap();
        assert_eq!(
            quiz.score(),
            QuizScore {
                correct: 0,
                answered: 2,
                total: 2
            }
        );
    }

    #[test]
    fn finished_session_rejects_answers() {
        let mut quiz = QuizSession::new(vec![], QuizDirection::default(), &mut rand::thread_rng());
        assert!(quiz.is_finished());
        assert_eq!(quiz.submit("casa"), Err(QuizError::Finished));
    }
}
