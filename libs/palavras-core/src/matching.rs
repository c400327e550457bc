//! Answer matching for quiz mode.
//!
//! A correct answer may list several variants separated by `/`
//! (`"maison / casa"`). A typed answer is accepted when it matches any variant
//! under one of four increasingly lenient comparisons.

use serde::{Deserialize, Serialize};

use crate::normalize::{fold_accents, normalize_whitespace, strip_article};

/// Which comparison accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    AccentInsensitive,
    ArticleInsensitive,
    AccentAndArticleInsensitive,
}

/// Result of comparing a typed answer to the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The comparison that accepted the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
    /// The variant of the correct answer that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_variant: Option<String>,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
}

/// Whether `user_answer` matches any variant of `correct_answer`.
pub fn matches(user_answer: &str, correct_answer: &str) -> bool {
    answer_variants(correct_answer)
        .into_iter()
        .any(|variant| single_matches(user_answer, variant).is_some())
}

/// Compare a typed answer to the correct answer, reporting how it matched.
pub fn compare_answers(user_answer: &str, correct_answer: &str) -> MatchResult {
    let hit = answer_variants(correct_answer)
        .into_iter()
        .find_map(|variant| single_matches(user_answer, variant).map(|tier| (tier, variant)));

    MatchResult {
        is_correct: hit.is_some(),
        tier: hit.map(|(tier, _)| tier),
        matched_variant: hit.map(|(_, variant)| variant.to_string()),
        typed_normalized: normalize_whitespace(user_answer),
    }
}

/// Split a field on `/` and trim each part. Empty parts are kept.
pub fn answer_variants(correct_answer: &str) -> Vec<&str> {
    correct_answer.split('/').map(str::trim).collect()
}

/// Compare one answer against one variant, case-insensitively.
///
/// Both sides lose at most one leading article before the article tiers, so a
/// bare article reduces to empty and matches any other bare article.
pub fn single_matches(user_answer: &str, variant: &str) -> Option<MatchTier> {
    let a = user_answer.trim().to_lowercase();
    let b = variant.trim().to_lowercase();

    if a == b {
        return Some(MatchTier::Exact);
    }

    let (a_folded, b_folded) = (fold_accents(&a), fold_accents(&b));
    if a_folded == b_folded {
        return Some(MatchTier::AccentInsensitive);
    }

    if strip_article(&a) == strip_article(&b) {
        return Some(MatchTier::ArticleInsensitive);
    }

    if strip_article(&a_folded) == strip_article(&b_folded) {
        return Some(MatchTier::AccentAndArticleInsensitive);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn any_variant_matches() {
        assert!(matches("casa", "maison / casa"));
        assert!(matches("maison", "maison / casa"));
        assert!(!matches("voiture", "maison / casa"));
    }

    #[test]
    fn many_slashes_make_many_variants() {
        assert!(matches("lar", "casa/moradia/ lar /habitação"));
        assert!(matches("habitacao", "casa/moradia/ lar /habitação"));
    }

    #[test]
    fn accent_insensitive_both_ways() {
        assert!(matches("avião", "aviao"));
        assert!(matches("aviao", "avião"));
    }

    #[test]
    fn article_insensitive() {
        assert!(matches("chien", "le chien"));
        assert!(matches("casa", "a casa"));
        assert!(matches("obligation", "l'obligation"));
        assert!(matches("le chien", "chien"));
    }

    #[test]
    fn longest_article_wins() {
        assert!(!matches("la", "de la maison"));
        assert!(matches("maison", "de la maison"));
    }

    #[test]
    fn accents_and_articles_together() {
        assert!(matches("l'ecole", "école"));
        assert!(matches("a licao", "lição"));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches("CASA", "casa"));
        assert!(matches("Le Chien", "le chien"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(matches("  casa  ", "casa"));
    }

    #[test]
    fn empty_answer_never_matches_real_words() {
        assert!(!matches("", "casa"));
        assert!(!matches("   ", "maison / casa"));
    }

    #[test]
    fn empty_variant_only_matches_empty_answer() {
        assert!(!matches("casa", "maison / "));
        assert!(matches("", ""));
    }

    #[test]
    fn bare_articles_reduce_to_empty() {
        assert!(matches("le", "la"));
        assert!(matches("", "la"));
        assert!(matches("o", "l'"));
        assert_eq!(single_matches("le", "la"), Some(MatchTier::ArticleInsensitive));
        assert!(!matches("", "la maison"));
    }

    #[test]
    fn only_one_article_is_stripped() {
        assert!(!matches("table", "les la table"));
    }

    #[test]
    fn variants_are_trimmed() {
        assert_eq!(answer_variants(" maison / casa /"), vec!["maison", "casa", ""]);
    }

    #[test]
    fn tiers_are_reported() {
        assert_eq!(single_matches("casa", "casa"), Some(MatchTier::Exact));
        assert_eq!(single_matches("aviao", "avião"), Some(MatchTier::AccentInsensitive));
        assert_eq!(single_matches("chien", "le chien"), Some(MatchTier::ArticleInsensitive));
        assert_eq!(
            single_matches("eleve", "l'élève"),
            Some(MatchTier::AccentAndArticleInsensitive)
        );
        assert_eq!(single_matches("chat", "chien"), None);
    }

    #[test]
    fn compare_reports_matched_variant() {
        let result = compare_answers("  Casa ", "maison / casa");
        assert!(result.is_correct);
        assert_eq!(result.tier, Some(MatchTier::Exact));
        assert_eq!(result.matched_variant.as_deref(), Some("casa"));
        assert_eq!(result.typed_normalized, "Casa");

        let result = compare_answers("voiture", "maison / casa");
        assert!(!result.is_correct);
        assert_eq!(result.tier, None);
        assert_eq!(result.matched_variant, None);
    }
}
