use serde::{Deserialize, Serialize};

/// Person behind an application, as captured at intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Applicant {
    pub age: u32,
    pub id_number: String,
}

impl Applicant {
    pub fn new(age: u32, id_number: impl Into<String>) -> Self {
        Self {
            age,
            id_number: id_number.into(),
        }
    }
}

/// Submitted application read once by the evaluator.
///
/// `applicant` is required for evaluation; a missing applicant is reported as an
/// input error rather than being screened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    pub years_of_experience: u32,
    pub tech_stack: Vec<String>,
}

impl JobApplication {
    pub fn new(applicant: Applicant, years_of_experience: u32, tech_stack: Vec<String>) -> Self {
        Self {
            applicant: Some(applicant),
            years_of_experience,
            tech_stack,
        }
    }
}

/// Categorical screening decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationResult {
    AutoReject,
    AutoAccept,
    TransferredToHr,
    /// Not produced by the current rules.
    TransferredToLead,
    TransferredToCto,
}

impl ApplicationResult {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationResult::AutoReject => "auto_reject",
            ApplicationResult::AutoAccept => "auto_accept",
            ApplicationResult::TransferredToHr => "transferred_to_hr",
            ApplicationResult::TransferredToLead => "transferred_to_lead",
            ApplicationResult::TransferredToCto => "transferred_to_cto",
        }
    }
}

/// How thoroughly the identity collaborator should check the next identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    None,
    Detailed,
    Quick,
}

/// Country information reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryData {
    pub country: String,
}

impl CountryData {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}
