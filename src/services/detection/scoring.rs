// Score Calculator
// Maps text to a bounded AI score by accumulating independently capped signals.
//
// Every signal is computed from the full text and capped on its own before it
// enters the running total, so the order of accumulation does not matter.
// Natural-language signals (pronouns, contractions, expressive punctuation)
// subtract from the total. The sum is scaled for short texts, jittered by a
// uniform draw in [-5, 5], clamped to [0, 100] and rounded.

use super::lexicon::lexicons;
use crate::services::text_processor::{count_words, split_paragraphs, split_sentences};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const JITTER_RANGE: f64 = 5.0;

fn pronoun_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:i|me|my|mine|myself|we|us|our|ours|ourselves)\b").expect("pronoun regex")
    })
}

fn contraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:[a-z]+n['’]t|let['’]s|(?:i|you|we|they|he|she)['’](?:m|re|ve|ll|d)|(?:it|that|there|what)['’]s)\b",
        )
        .expect("contraction regex")
    })
}

fn expressive_punct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?!]").expect("punctuation regex"))
}

fn pause_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\.\.|…|—|–|--").expect("pause regex"))
}

fn list_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.|[•*\-]").expect("list marker regex"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word regex"))
}

/// Per-signal contributions before length scaling and jitter.
/// Subtractive signals are stored as positive magnitudes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalBreakdown {
    pub repetitive_phrases: f64,
    pub formal_vocabulary: f64,
    pub complex_structures: f64,
    pub ai_patterns: f64,
    pub sentence_uniformity: f64,
    pub sentence_length: f64,
    pub personal_pronouns: f64,
    pub contractions: f64,
    pub expressive_punctuation: f64,
    pub pauses: f64,
    pub repeated_words: f64,
    pub paragraph_length: f64,
    pub technical_jargon: f64,
    pub list_markers: f64,
    pub length_factor: f64,
}

impl SignalBreakdown {
    pub fn additive_total(&self) -> f64 {
        self.repetitive_phrases
            + self.formal_vocabulary
            + self.complex_structures
            + self.ai_patterns
            + self.sentence_uniformity
            + self.sentence_length
            + self.repeated_words
            + self.paragraph_length
            + self.technical_jargon
            + self.list_markers
    }

    pub fn subtractive_total(&self) -> f64 {
        self.personal_pronouns + self.contractions + self.expressive_punctuation + self.pauses
    }

    /// Running score after length scaling, before jitter and clamping.
    pub fn base_score(&self) -> f64 {
        (self.additive_total() - self.subtractive_total()) * self.length_factor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Final score, an integer value in [0, 100].
    pub score: f64,
    pub jitter: f64,
    pub signals: SignalBreakdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentenceStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

/// Mean and population variance of sentence lengths in words.
pub fn sentence_stats(text: &str) -> SentenceStats {
    let lengths: Vec<f64> = split_sentences(text)
        .into_iter()
        .map(|s| count_words(s) as f64)
        .collect();
    if lengths.is_empty() {
        return SentenceStats::default();
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
    SentenceStats {
        count: lengths.len(),
        mean,
        variance,
    }
}

fn capped(count: usize, weight: f64, cap: f64) -> f64 {
    (count as f64 * weight).min(cap)
}

fn uniformity_bonus(stats: &SentenceStats) -> f64 {
    if stats.count == 0 {
        return 0.0;
    }
    if stats.variance < 2.0 {
        25.0
    } else if stats.variance < 5.0 {
        15.0
    } else if stats.variance < 10.0 {
        8.0
    } else {
        0.0
    }
}

fn length_bonus(stats: &SentenceStats) -> f64 {
    if stats.count == 0 {
        return 0.0;
    }
    if stats.mean > 35.0 {
        20.0
    } else if stats.mean > 25.0 {
        12.0
    } else if stats.mean < 8.0 {
        5.0
    } else {
        0.0
    }
}

/// Number of distinct words longer than three characters that occur more than twice.
fn repeated_word_count(text: &str) -> usize {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for m in word_re().find_iter(text) {
        if m.as_str().chars().count() > 3 {
            *freq.entry(m.as_str().to_lowercase()).or_insert(0) += 1;
        }
    }
    freq.values().filter(|&&c| c > 2).count()
}

fn paragraph_bonus(text: &str) -> f64 {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return 0.0;
    }
    let words: usize = paragraphs.iter().map(|p| count_words(p)).sum();
    let avg = words as f64 / paragraphs.len() as f64;
    if avg > 100.0 {
        10.0
    } else if avg < 20.0 {
        5.0
    } else {
        0.0
    }
}

fn length_factor(total_words: usize) -> f64 {
    if total_words < 50 {
        0.7
    } else if total_words < 100 {
        0.85
    } else {
        1.0
    }
}

/// Deterministic part of the score: every signal, unjittered.
pub fn compute_signals(text: &str) -> SignalBreakdown {
    let lex = lexicons();
    let stats = sentence_stats(text);

    SignalBreakdown {
        repetitive_phrases: lex.repetitive.contribution(text),
        formal_vocabulary: lex.formal.contribution(text),
        complex_structures: lex.complex.contribution(text),
        ai_patterns: lex.ai_patterns.contribution(text),
        sentence_uniformity: uniformity_bonus(&stats),
        sentence_length: length_bonus(&stats),
        personal_pronouns: capped(pronoun_re().find_iter(text).count(), 2.5, 20.0),
        contractions: capped(contraction_re().find_iter(text).count(), 1.5, 15.0),
        expressive_punctuation: capped(expressive_punct_re().find_iter(text).count(), 1.0, 10.0),
        pauses: capped(pause_re().find_iter(text).count(), 1.5, 8.0),
        repeated_words: capped(repeated_word_count(text), 2.0, 15.0),
        paragraph_length: paragraph_bonus(text),
        technical_jargon: lex.jargon.contribution(text),
        list_markers: capped(list_marker_re().find_iter(text).count(), 1.5, 15.0),
        length_factor: length_factor(count_words(text)),
    }
}

/// Add jitter, clamp to [0, 100] and round to the nearest integer.
pub fn finalize_score(base: f64, jitter: f64) -> f64 {
    (base + jitter).clamp(0.0, 100.0).round()
}

/// Full score with a jitter term drawn from `rng`. Total over any input string.
pub fn calculate_ai_score<R: Rng>(text: &str, rng: &mut R) -> ScoreReport {
    let signals = compute_signals(text);
    let jitter = rng.random_range(-JITTER_RANGE..=JITTER_RANGE);
    ScoreReport {
        score: finalize_score(signals.base_score(), jitter),
        jitter,
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const FORMAL_SAMPLE: &str = "Furthermore, it is important to note that the implementation of this framework is crucial. Moreover, it is essential to utilize a comprehensive methodology.";

    #[test]
    fn test_empty_text_has_zero_base() {
        let signals = compute_signals("");
        assert_eq!(signals.base_score(), 0.0);
        assert_eq!(sentence_stats("").count, 0);
    }

    #[test]
    fn test_punctuation_only_text_is_total() {
        let text = "?!?! ... !!! ??? .... !?!? ... ?!?! ... !!! ???";
        let stats = sentence_stats(text);
        assert_eq!(stats.count, 0);
        let mut rng = SmallRng::seed_from_u64(1);
        let report = calculate_ai_score(text, &mut rng);
        assert!((0.0..=100.0).contains(&report.score));
    }

    #[test]
    fn test_no_sentence_punctuation() {
        let text = "just a long run of words without any terminal mark at all so it is one sentence";
        let stats = sentence_stats(text);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_uniformity_tiers() {
        let s = |variance| SentenceStats { count: 3, mean: 12.0, variance };
        assert_eq!(uniformity_bonus(&s(1.0)), 25.0);
        assert_eq!(uniformity_bonus(&s(4.0)), 15.0);
        assert_eq!(uniformity_bonus(&s(9.0)), 8.0);
        assert_eq!(uniformity_bonus(&s(10.0)), 0.0);
    }

    #[test]
    fn test_sentence_length_tiers() {
        let s = |mean| SentenceStats { count: 2, mean, variance: 50.0 };
        assert_eq!(length_bonus(&s(36.0)), 20.0);
        assert_eq!(length_bonus(&s(30.0)), 12.0);
        assert_eq!(length_bonus(&s(15.0)), 0.0);
        assert_eq!(length_bonus(&s(5.0)), 5.0);
    }

    #[test]
    fn test_length_factor_tiers() {
        assert_eq!(length_factor(10), 0.7);
        assert_eq!(length_factor(75), 0.85);
        assert_eq!(length_factor(150), 1.0);
    }

    #[test]
    fn test_casual_text_scores_low() {
        let text = "I can't believe how fun this was! We laughed so much, honestly.";
        let signals = compute_signals(text);
        assert_eq!(signals.personal_pronouns, 5.0);
        assert_eq!(signals.contractions, 1.5);
        assert_eq!(signals.expressive_punctuation, 1.0);
        assert_eq!(signals.length_factor, 0.7);
        assert!(signals.base_score() + JITTER_RANGE < 30.0);
    }

    #[test]
    fn test_formal_text_scores_high() {
        let text = [FORMAL_SAMPLE; 4].join(" ");
        let signals = compute_signals(&text);
        assert_eq!(signals.repetitive_phrases, 30.0);
        assert_eq!(signals.formal_vocabulary, 25.0);
        assert_eq!(signals.complex_structures, 20.0);
        assert!(signals.base_score() - JITTER_RANGE > 50.0);
    }

    #[test]
    fn test_repeated_words_ignore_short_tokens() {
        assert_eq!(repeated_word_count("the the the cat cat cat"), 0);
        assert_eq!(repeated_word_count("Data data DATA model model"), 1);
    }

    #[test]
    fn test_list_markers_counted_anywhere() {
        let inline = "Steps: 1. open 2. close • a • b - c";
        assert_eq!(list_marker_re().find_iter(inline).count(), 5);
        assert_eq!(compute_signals(inline).list_markers, 7.5);

        // Hyphens and decimals count too
        assert_eq!(list_marker_re().find_iter("well-known 3.5 ratio *").count(), 3);
        assert_eq!(compute_signals(&"- ".repeat(12)).list_markers, 15.0);
    }

    #[test]
    fn test_ai_pattern_weight_and_cap() {
        assert_eq!(compute_signals("Feel free to ask. Feel free to call.").ai_patterns, 16.0);
        assert_eq!(compute_signals(&"Feel free to ask. ".repeat(4)).ai_patterns, 25.0);
    }

    #[test]
    fn test_expressive_punctuation_and_pause_caps() {
        let signals = compute_signals("Really? Wow! Sure!");
        assert_eq!(signals.expressive_punctuation, 3.0);
        assert_eq!(compute_signals(&"Wow! ".repeat(12)).expressive_punctuation, 10.0);

        assert_eq!(compute_signals("wait... so — yes").pauses, 3.0);
        assert_eq!(compute_signals(&"wait... ".repeat(10)).pauses, 8.0);
    }

    #[test]
    fn test_paragraph_bonus_tiers() {
        assert_eq!(paragraph_bonus(&"word ".repeat(101)), 10.0);
        assert_eq!(paragraph_bonus(&"word ".repeat(50)), 0.0);
        assert_eq!(paragraph_bonus("a b c\n\nd e f"), 5.0);
        assert_eq!(paragraph_bonus(""), 0.0);
    }

    #[test]
    fn test_jargon_weight_and_cap() {
        assert_eq!(compute_signals("a robust algorithm").technical_jargon, 4.0);
        assert_eq!(compute_signals(&"robust ".repeat(15)).technical_jargon, 20.0);
    }

    #[test]
    fn test_whitespace_around_punctuation() {
        let text = "Hello . world ! and then ? done .  \n\n . ! ?";
        let stats = sentence_stats(text);
        assert_eq!(stats.count, 4);
        let report = calculate_ai_score(text, &mut SmallRng::seed_from_u64(3));
        assert!((0.0..=100.0).contains(&report.score));
    }

    #[test]
    fn test_subtraction_caps() {
        let text = "I me my we us our ".repeat(10);
        assert_eq!(compute_signals(&text).personal_pronouns, 20.0);
    }

    #[test]
    fn test_seeded_rng_reproduces_score() {
        let text = FORMAL_SAMPLE;
        let a = calculate_ai_score(text, &mut SmallRng::seed_from_u64(42));
        let b = calculate_ai_score(text, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.jitter.abs() <= JITTER_RANGE);
        assert_eq!(a.score, a.score.round());
    }

    #[test]
    fn test_finalize_clamps() {
        assert_eq!(finalize_score(120.0, 4.0), 100.0);
        assert_eq!(finalize_score(-12.0, 5.0), 0.0);
        assert_eq!(finalize_score(41.4, 0.3), 42.0);
    }
}
