// TextKit Core Services

pub mod text_processor;
pub mod text_tools;
pub mod config_store;
pub mod detection;

pub use text_processor::*;
pub use text_tools::*;
pub use config_store::*;

pub use detection::{
    calculate_ai_score,
    classify_model,
    generate_suggestions,
    humanize_text,
    validate_text,
    DetectedModel,
    TextHeuristicAnalyzer,
    ValidationError,
};
