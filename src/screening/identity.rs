use std::collections::BTreeSet;

use super::domain::{CountryData, ValidationMode};

/// Contract for the identity service consulted during screening.
///
/// The evaluator sets the validation mode before every `is_valid` call, so an
/// implementation can read `validation_mode()` while answering.
pub trait IdentityValidator {
    fn is_valid(&self, id_number: &str) -> Result<bool, IdentityError>;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
    fn country_data(&self) -> Result<CountryData, IdentityError>;
}

impl<V: IdentityValidator + ?Sized> IdentityValidator for Box<V> {
    fn is_valid(&self, id_number: &str) -> Result<bool, IdentityError> {
        (**self).is_valid(id_number)
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }

    fn country_data(&self) -> Result<CountryData, IdentityError> {
        (**self).country_data()
    }
}

/// Failure reported by an identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity service unavailable: {0}")]
    Unavailable(String),
    #[error("country lookup failed: {0}")]
    CountryLookup(String),
}

/// In-process validator that accepts every identifier except an explicit deny-list
/// and reports a fixed country.
#[derive(Debug, Clone)]
pub struct StaticIdentityValidator {
    country: String,
    rejected: BTreeSet<String>,
    mode: ValidationMode,
}

impl StaticIdentityValidator {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            rejected: BTreeSet::new(),
            mode: ValidationMode::None,
        }
    }

    pub fn reject<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl IdentityValidator for StaticIdentityValidator {
    fn is_valid(&self, id_number: &str) -> Result<bool, IdentityError> {
        let valid = !self.rejected.contains(id_number.trim());
        tracing::debug!(mode = ?self.mode, valid, "static identity check");
        Ok(valid)
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    fn country_data(&self) -> Result<CountryData, IdentityError> {
        Ok(CountryData::new(self.country.clone()))
    }
}
