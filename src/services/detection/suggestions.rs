// Suggestion Generator
// Canned writing advice keyed by AI-score bracket.

const HIGH_SCORE: &[&str] = &[
    "Consider using more natural, conversational language",
    "Avoid repetitive sentence structures and formal phrases",
    "Add personal anecdotes or examples to make it more relatable",
    "Use contractions and informal language where appropriate",
    "Vary sentence lengths to create a more natural flow",
];

const MEDIUM_SCORE: &[&str] = &[
    "Mix formal and informal language for better balance",
    "Use more varied sentence structures",
    "Include transitional phrases that sound more natural",
    "Consider adding personal touches or examples",
    "Reduce the use of technical or formal vocabulary",
];

const LOW_SCORE: &[&str] = &[
    "Text appears to be naturally written",
    "Consider adding more specific details or examples",
    "Maintain this conversational writing style",
    "The content flows well and sounds human",
];

/// Always returns a non-empty list.
pub fn generate_suggestions(ai_score: f64) -> Vec<String> {
    let bracket = if ai_score > 70.0 {
        HIGH_SCORE
    } else if ai_score > 50.0 {
        MEDIUM_SCORE
    } else {
        LOW_SCORE
    };
    bracket.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets() {
        assert_eq!(generate_suggestions(71.0)[0], HIGH_SCORE[0]);
        assert_eq!(generate_suggestions(70.0)[0], MEDIUM_SCORE[0]);
        assert_eq!(generate_suggestions(51.0).len(), 5);
        assert_eq!(generate_suggestions(50.0), LOW_SCORE.to_vec());
        assert!(!generate_suggestions(0.0).is_empty());
    }
}
