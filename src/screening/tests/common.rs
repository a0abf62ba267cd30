use std::cell::{Cell, RefCell};

use crate::screening::domain::{Applicant, CountryData, JobApplication, ValidationMode};
use crate::screening::evaluation::{ApplicationEvaluator, EvaluationConfig};
use crate::screening::identity::{IdentityError, IdentityValidator};

pub(super) fn full_tech_stack() -> Vec<String> {
    ["C#", "RabbitMQ", "Docker", "Microservice", "VisualStudio"]
        .iter()
        .map(|tech| tech.to_string())
        .collect()
}

pub(super) fn tech_stack(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

pub(super) fn application() -> JobApplication {
    JobApplication::new(Applicant::new(18, "12345678910"), 0, full_tech_stack())
}

pub(super) fn application_aged(age: u32) -> JobApplication {
    let mut application = application();
    if let Some(applicant) = application.applicant.as_mut() {
        applicant.age = age;
    }
    application
}

pub(super) fn evaluator(validator: RecordingValidator) -> ApplicationEvaluator<RecordingValidator> {
    ApplicationEvaluator::new(validator)
}

pub(super) fn evaluator_with(
    validator: RecordingValidator,
    config: EvaluationConfig,
) -> ApplicationEvaluator<RecordingValidator> {
    ApplicationEvaluator::with_config(validator, config)
}

/// Identity stub with configurable answers and call bookkeeping.
pub(super) struct RecordingValidator {
    valid: bool,
    country: String,
    fail_validation: Option<IdentityError>,
    fail_country: Option<IdentityError>,
    mode: ValidationMode,
    pub(super) is_valid_calls: Cell<usize>,
    pub(super) country_calls: Cell<usize>,
    pub(super) modes_at_validation: RefCell<Vec<ValidationMode>>,
    pub(super) checked_ids: RefCell<Vec<String>>,
}

impl Default for RecordingValidator {
    fn default() -> Self {
        Self {
            valid: true,
            country: "TURKEY".to_string(),
            fail_validation: None,
            fail_country: None,
            mode: ValidationMode::None,
            is_valid_calls: Cell::new(0),
            country_calls: Cell::new(0),
            modes_at_validation: RefCell::new(Vec::new()),
            checked_ids: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingValidator {
    pub(super) fn rejecting() -> Self {
        Self {
            valid: false,
            ..Self::default()
        }
    }

    pub(super) fn in_country(country: &str) -> Self {
        Self {
            country: country.to_string(),
            ..Self::default()
        }
    }

    pub(super) fn failing_validation(error: IdentityError) -> Self {
        Self {
            fail_validation: Some(error),
            ..Self::default()
        }
    }

    pub(super) fn failing_country(error: IdentityError) -> Self {
        Self {
            fail_country: Some(error),
            ..Self::default()
        }
    }
}

impl IdentityValidator for RecordingValidator {
    fn is_valid(&self, id_number: &str) -> Result<bool, IdentityError> {
        self.is_valid_calls.set(self.is_valid_calls.get() + 1);
        self.modes_at_validation.borrow_mut().push(self.mode);
        self.checked_ids.borrow_mut().push(id_number.to_string());
        match &self.fail_validation {
            Some(error) => Err(error.clone()),
            None => Ok(self.valid),
        }
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    fn country_data(&self) -> Result<CountryData, IdentityError> {
        self.country_calls.set(self.country_calls.get() + 1);
        match &self.fail_country {
            Some(error) => Err(error.clone()),
            None => Ok(CountryData::new(self.country.clone())),
        }
    }
}
