// Model Label Classifier
// Coarse "which model wrote this" label from the score and three phrase detectors.

use super::lexicon::lexicons;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DetectedModel {
    #[serde(rename = "Likely Human")]
    LikelyHuman,
    #[serde(rename = "Likely ChatGPT/GPT-4")]
    LikelyChatGpt,
    #[serde(rename = "Likely Claude")]
    LikelyClaude,
    #[serde(rename = "Likely AI Generated")]
    LikelyAiGenerated,
    #[serde(rename = "Unknown AI Model")]
    UnknownAiModel,
}

impl DetectedModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyHuman => "Likely Human",
            Self::LikelyChatGpt => "Likely ChatGPT/GPT-4",
            Self::LikelyClaude => "Likely Claude",
            Self::LikelyAiGenerated => "Likely AI Generated",
            Self::UnknownAiModel => "Unknown AI Model",
        }
    }
}

impl fmt::Display for DetectedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StyleFeatures {
    pub technical: bool,
    pub formal: bool,
    pub filler: bool,
}

pub fn detect_features(text: &str) -> StyleFeatures {
    let lex = lexicons();
    StyleFeatures {
        technical: lex.jargon.contains_any(text),
        formal: lex.repetitive.contains_any(text) || lex.formal.contains_any(text),
        filler: lex.ai_patterns.contains_any(text),
    }
}

/// Label from precomputed features; the rules are checked top to bottom.
pub fn classify_features(features: StyleFeatures, ai_score: f64) -> DetectedModel {
    if ai_score < 30.0 {
        return DetectedModel::LikelyHuman;
    }
    if features.filler && ai_score > 60.0 {
        return DetectedModel::LikelyChatGpt;
    }
    if features.formal && !features.filler && ai_score > 60.0 {
        return DetectedModel::LikelyClaude;
    }
    if features.technical || ai_score > 50.0 {
        return DetectedModel::LikelyAiGenerated;
    }
    DetectedModel::UnknownAiModel
}

pub fn classify_model(text: &str, ai_score: f64) -> DetectedModel {
    classify_features(detect_features(text), ai_score)
}
