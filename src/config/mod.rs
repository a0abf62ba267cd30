use std::env;
use std::fmt;

use crate::screening::{EvaluationConfig, SimilarityMode};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = match env::var("APP_LOG_ANSI") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                key: "APP_LOG_ANSI",
                value: raw,
            })?,
            Err(_) => environment == AppEnvironment::Development,
        };

        let mut evaluation = EvaluationConfig::default();
        if let Ok(country) = env::var("SCREENING_HOME_COUNTRY") {
            evaluation.home_country = country.trim().to_string();
        }
        if let Some(age) = read_u32("SCREENING_MIN_AGE")? {
            evaluation.minimum_age = age;
        }
        if let Some(years) = read_u32("SCREENING_AUTO_ACCEPT_YEARS")? {
            evaluation.auto_accept_years_of_experience = years;
        }
        if let Ok(raw) = env::var("SCREENING_SIMILARITY") {
            evaluation.similarity = SimilarityMode::parse(&raw)
                .ok_or(ConfigError::InvalidSimilarityMode { value: raw })?;
        }
        if let Ok(raw) = env::var("SCREENING_TECH_STACK") {
            evaluation.reference_tech_stack = parse_tech_stack(&raw);
        }

        let identity_country =
            env::var("SCREENING_IDENTITY_COUNTRY").unwrap_or_else(|_| "TURKEY".to_string());

        Ok(Self {
            environment,
            screening: ScreeningConfig {
                evaluation,
                identity_country,
            },
            telemetry: TelemetryConfig { log_level, ansi },
        })
    }
}

fn read_u32(key: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidNumber { key, source }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rule thresholds plus the country reported by the built-in identity adapter.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub evaluation: EvaluationConfig,
    pub identity_country: String,
}

/// Tracing controls. Colored output defaults to on only in development.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        key: &'static str,
        source: std::num::ParseIntError,
    },
    InvalidSimilarityMode {
        value: String,
    },
    InvalidFlag {
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, .. } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidSimilarityMode { value } => write!(
                f,
                "SCREENING_SIMILARITY must be 'truncated' or 'proportional', got '{value}'"
            ),
            ConfigError::InvalidFlag { key, value } => {
                write!(f, "{key} must be true or false, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { source, .. } => Some(source),
            ConfigError::InvalidSimilarityMode { .. } | ConfigError::InvalidFlag { .. } => None,
        }
    }
}
