// Detection Module
// Rule-based AI-content heuristics organized into specialized submodules:
// - lexicon: curated phrase tables and the humanizer dictionary
// - scoring: capped-signal AI score with jitter
// - humanizer: single-pass formal → informal substitution with edit spans
// - suggestions: canned advice per score bracket
// - model_label: coarse detected-model label
// - analyzer: ties the pieces into one response

pub mod lexicon;
pub mod scoring;
pub mod humanizer;
pub mod suggestions;
pub mod model_label;
pub mod analyzer;

pub use analyzer::{
    confidence_for,
    round2,
    score_breakdown,
    validate_text,
    TextHeuristicAnalyzer,
    ValidationError,
    AI_THRESHOLD,
};
pub use humanizer::{humanize_text, HumanizedText};
pub use model_label::{classify_features, classify_model, detect_features, DetectedModel, StyleFeatures};
pub use scoring::{calculate_ai_score, compute_signals, sentence_stats, ScoreReport, SignalBreakdown};
pub use suggestions::generate_suggestions;
