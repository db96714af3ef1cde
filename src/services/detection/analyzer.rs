// Text Heuristic Analyzer
// Combines the scorer, humanizer, suggestion generator and model classifier
// into one response. Each call is independent; the only state is the random source.

use super::humanizer::humanize_text;
use super::model_label::classify_model;
use super::scoring::calculate_ai_score;
use super::suggestions::generate_suggestions;
use crate::models::{AnalyzeResponse, ScoreBreakdown};
use crate::services::config_store::AnalysisConfig;
use crate::services::text_processor::char_len;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub const AI_THRESHOLD: f64 = 50.0;
const CONFIDENCE_FLOOR: f64 = 60.0;
const CONFIDENCE_CEILING: f64 = 98.0;
const CONFIDENCE_NOISE: f64 = 10.0;

/// Input rejected before any scoring happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text is required")]
    TextRequired,
    #[error("Text must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Text must be less than {max} characters")]
    TooLong { max: usize },
}

/// Check blank / too short / too long, in that order. Lengths are counted in characters.
pub fn validate_text(text: &str, limits: &AnalysisConfig) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::TextRequired);
    }
    let len = char_len(text);
    if len < limits.min_chars {
        return Err(ValidationError::TooShort { min: limits.min_chars });
    }
    if len > limits.max_chars {
        return Err(ValidationError::TooLong { max: limits.max_chars });
    }
    Ok(())
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sub-scores as fixed fractions of the AI score, each with its own bound.
pub fn score_breakdown(ai_score: f64) -> ScoreBreakdown {
    ScoreBreakdown {
        repetition_score: round2((ai_score * 0.3).min(30.0)),
        complexity_score: round2((ai_score * 0.25).min(25.0)),
        formality_score: round2((ai_score * 0.25).min(25.0)),
        coherence_score: round2((100.0 - ai_score * 0.2).max(20.0)),
        technical_jargon_score: round2((ai_score * 0.2).min(20.0)),
        sentence_structure_score: round2((ai_score * 0.2).min(20.0)),
    }
}

/// Confidence grows with distance from the decision threshold, plus up to 10 points of noise.
pub fn confidence_for<R: Rng>(ai_score: f64, rng: &mut R) -> f64 {
    let margin = (ai_score - AI_THRESHOLD).abs() * 0.56;
    let noise = rng.random_range(0.0..=CONFIDENCE_NOISE);
    (CONFIDENCE_FLOOR + margin + noise).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

pub struct TextHeuristicAnalyzer<R: Rng> {
    rng: R,
}

impl TextHeuristicAnalyzer<SmallRng> {
    /// Analyzer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Reproducible analyzer; the same seed and text give the same response.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TextHeuristicAnalyzer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Score, humanize and label `text`. Total over any string; validation is the caller's job.
    pub fn analyze(&mut self, text: &str) -> AnalyzeResponse {
        let report = calculate_ai_score(text, &mut self.rng);
        let ai_score = round2(report.score);
        let confidence = round2(confidence_for(ai_score, &mut self.rng));
        let humanized = humanize_text(text);

        AnalyzeResponse {
            original_text: text.to_string(),
            humanized_text: humanized.text,
            humanized_changes: humanized.changes,
            ai_score,
            human_score: round2(100.0 - ai_score),
            confidence,
            suggestions: generate_suggestions(ai_score),
            is_ai_generated: ai_score > AI_THRESHOLD,
            detected_ai_model: classify_model(text, ai_score),
            analysis_details: score_breakdown(ai_score),
        }
    }
}
