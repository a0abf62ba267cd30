//! Job application screening: data model, identity collaborator contract, and the
//! ordered rule chain that turns an application into a decision.

pub mod domain;
pub mod evaluation;
pub mod identity;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicationResult, CountryData, JobApplication, ValidationMode};
pub use evaluation::{
    ApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluationError, EvaluationOutcome,
    SimilarityMode, DEFAULT_REFERENCE_TECH_STACK,
};
pub use identity::{IdentityError, IdentityValidator, StaticIdentityValidator};
