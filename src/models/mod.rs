// TextKit Data Models
// Wire types for the HTTP API and the analyzer output

use serde::{Deserialize, Serialize};

pub use crate::services::detection::DetectedModel;
pub use crate::services::text_tools::{
    CaseStyle, SortOptions, SortOrder, SummaryStyle, TextStats, WhitespaceMode, WordCount,
};

// ============ Analysis ============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing or null text is reported as "Text is required", not as a parse failure.
    #[serde(default)]
    pub text: Option<String>,
}

/// One substitution made by the humanizer.
/// Indices are character offsets into the original text, end-exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub original: String,
    pub replacement: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub repetition_score: f64,
    pub complexity_score: f64,
    pub formality_score: f64,
    pub coherence_score: f64,
    pub technical_jargon_score: f64,
    pub sentence_structure_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub original_text: String,
    pub humanized_text: String,
    pub humanized_changes: Vec<EditRecord>,
    pub ai_score: f64,
    pub human_score: f64,
    pub confidence: f64,
    pub suggestions: Vec<String>,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    #[serde(rename = "detectedAIModel")]
    pub detected_ai_model: DetectedModel,
    pub analysis_details: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============ Text Tools ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRequest {
    pub text: String,
    pub style: CaseStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitespaceRequest {
    pub text: String,
    pub mode: WhitespaceMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub style: SummaryStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortRequest {
    pub text: String,
    #[serde(flatten)]
    pub options: SortOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub result: String,
}

// ============ Health ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
