mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, SimilarityMode, DEFAULT_REFERENCE_TECH_STACK};
pub use policy::DecisionRule;

use super::domain::{ApplicationResult, JobApplication, ValidationMode};
use super::identity::{IdentityError, IdentityValidator};
use policy::{judge_skills, route_by_country, SkillsVerdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Runs the screening chain against a long-lived identity collaborator.
///
/// The reference tech stack is taken from the configuration at construction and
/// is never modified afterwards.
pub struct ApplicationEvaluator<V> {
    config: EvaluationConfig,
    validator: V,
}

impl<V: IdentityValidator> ApplicationEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self::with_config(validator, EvaluationConfig::default())
    }

    pub fn with_config(validator: V, config: EvaluationConfig) -> Self {
        Self { config, validator }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn reference_tech_stack(&self) -> &[String] {
        &self.config.reference_tech_stack
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn into_validator(self) -> V {
        self.validator
    }

    pub fn evaluate(
        &mut self,
        application: &JobApplication,
    ) -> Result<ApplicationResult, EvaluationError> {
        self.assess(application).map(|outcome| outcome.result)
    }

    /// Evaluate and keep the rule that decided, plus the similarity when it was
    /// computed.
    pub fn assess(
        &mut self,
        application: &JobApplication,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let Some(applicant) = application.applicant.as_ref() else {
            warn!("application submitted without an applicant");
            return Err(EvaluationError::MissingApplicant);
        };

        if applicant.age < self.config.minimum_age {
            return Ok(self.conclude(DecisionRule::Underage, None));
        }

        let mode = if applicant.age > self.config.detailed_validation_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        };
        self.validator.set_validation_mode(mode);

        if !self.validator.is_valid(&applicant.id_number)? {
            return Ok(self.conclude(DecisionRule::IdentityRejected, None));
        }

        let similarity = rules::similarity(
            &application.tech_stack,
            &self.config.reference_tech_stack,
            self.config.similarity,
        );

        let rule = match judge_skills(similarity, application.years_of_experience, &self.config) {
            SkillsVerdict::Decided(rule) => rule,
            SkillsVerdict::NeedsCountryCheck => {
                let country = self.validator.country_data()?;
                route_by_country(&country.country, &self.config)
            }
        };

        Ok(self.conclude(rule, Some(similarity)))
    }

    fn conclude(&self, rule: DecisionRule, similarity: Option<u32>) -> EvaluationOutcome {
        let outcome = EvaluationOutcome {
            result: rule.result(),
            rule,
            similarity,
        };
        debug!(
            result = outcome.result.label(),
            rule = ?outcome.rule,
            similarity = ?outcome.similarity,
            "application screened"
        );
        outcome
    }
}

/// Decision together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub result: ApplicationResult,
    pub rule: DecisionRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<u32>,
}

impl EvaluationOutcome {
    pub fn summary(&self) -> String {
        match self.similarity {
            Some(similarity) => format!("{} (similarity {similarity}%)", self.rule.summary()),
            None => self.rule.summary(),
        }
    }
}

/// Error raised while screening an application.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid application: applicant is required")]
    MissingApplicant,
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
