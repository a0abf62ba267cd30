use serde::{Deserialize, Serialize};

pub const DEFAULT_REFERENCE_TECH_STACK: [&str; 5] =
    ["C#", "RabbitMQ", "Docker", "Microservice", "VisualStudio"];

/// Thresholds and reference data applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub reference_tech_stack: Vec<String>,
    pub minimum_age: u32,
    pub detailed_validation_age: u32,
    pub minimum_similarity: u32,
    pub auto_accept_similarity: u32,
    pub auto_accept_years_of_experience: u32,
    pub home_country: String,
    #[serde(default)]
    pub similarity: SimilarityMode,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            reference_tech_stack: DEFAULT_REFERENCE_TECH_STACK
                .iter()
                .map(|tech| tech.to_string())
                .collect(),
            minimum_age: 18,
            detailed_validation_age: 50,
            minimum_similarity: 25,
            auto_accept_similarity: 75,
            auto_accept_years_of_experience: 10,
            home_country: "TURKEY".to_string(),
            similarity: SimilarityMode::Truncated,
        }
    }
}

/// Arithmetic used to turn a match count into a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// `(matches / reference_len) * 100` in integer arithmetic: partial coverage
    /// scores 0.
    #[default]
    Truncated,
    /// `100 * matches / reference_len`, floored.
    Proportional,
}

impl SimilarityMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truncated" | "legacy" => Some(Self::Truncated),
            "proportional" | "percent" => Some(Self::Proportional),
            _ => None,
        }
    }
}
