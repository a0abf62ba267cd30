use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationResult;
use super::config::EvaluationConfig;

/// The rule in the screening chain that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    Underage,
    IdentityRejected,
    InsufficientTechStack,
    ExperiencedMatch,
    OutsideHomeCountry,
    HomeCountry,
}

impl DecisionRule {
    pub const fn result(self) -> ApplicationResult {
        match self {
            DecisionRule::Underage | DecisionRule::InsufficientTechStack => {
                ApplicationResult::AutoReject
            }
            DecisionRule::IdentityRejected => ApplicationResult::TransferredToHr,
            DecisionRule::ExperiencedMatch | DecisionRule::HomeCountry => {
                ApplicationResult::AutoAccept
            }
            DecisionRule::OutsideHomeCountry => ApplicationResult::TransferredToCto,
        }
    }

    pub fn summary(self) -> String {
        match self {
            DecisionRule::Underage => "rejected: applicant below minimum age".to_string(),
            DecisionRule::IdentityRejected => {
                "transferred to HR: identity could not be validated".to_string()
            }
            DecisionRule::InsufficientTechStack => {
                "rejected: tech stack similarity below threshold".to_string()
            }
            DecisionRule::ExperiencedMatch => {
                "accepted: strong tech stack match with enough experience".to_string()
            }
            DecisionRule::OutsideHomeCountry => {
                "transferred to CTO: applicant outside home country".to_string()
            }
            DecisionRule::HomeCountry => "accepted: applicant in home country".to_string(),
        }
    }
}

/// What the skills stage concluded before any country lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkillsVerdict {
    Decided(DecisionRule),
    NeedsCountryCheck,
}

pub(crate) fn judge_skills(
    similarity: u32,
    years_of_experience: u32,
    config: &EvaluationConfig,
) -> SkillsVerdict {
    if similarity < config.minimum_similarity {
        return SkillsVerdict::Decided(DecisionRule::InsufficientTechStack);
    }

    if similarity > config.auto_accept_similarity
        && years_of_experience >= config.auto_accept_years_of_experience
    {
        return SkillsVerdict::Decided(DecisionRule::ExperiencedMatch);
    }

    SkillsVerdict::NeedsCountryCheck
}

pub(crate) fn route_by_country(country: &str, config: &EvaluationConfig) -> DecisionRule {
    if country != config.home_country {
        DecisionRule::OutsideHomeCountry
    } else {
        DecisionRule::HomeCountry
    }
}
