//! End-to-end screening scenarios driven through the public evaluator and the
//! built-in identity adapter.

use job_screening::screening::{
    Applicant, ApplicationEvaluator, ApplicationResult, EvaluationConfig, EvaluationError,
    IdentityValidator, JobApplication, SimilarityMode, StaticIdentityValidator, ValidationMode,
};

fn full_tech_stack() -> Vec<String> {
    ["C#", "RabbitMQ", "Docker", "Microservice", "VisualStudio"]
        .iter()
        .map(|tech| tech.to_string())
        .collect()
}

fn application(age: u32, years_of_experience: u32) -> JobApplication {
    JobApplication::new(
        Applicant::new(age, "12345678910"),
        years_of_experience,
        full_tech_stack(),
    )
}

fn evaluator(country: &str) -> ApplicationEvaluator<StaticIdentityValidator> {
    ApplicationEvaluator::new(StaticIdentityValidator::new(country))
}

#[test]
fn experienced_full_match_is_auto_accepted() {
    let mut evaluator = evaluator("TURKEY");

    let result = evaluator
        .evaluate(&application(18, 11))
        .expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::AutoAccept);
}

#[test]
fn underage_applicant_is_auto_rejected() {
    let mut evaluator = evaluator("TURKEY");

    let result = evaluator
        .evaluate(&application(17, 11))
        .expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::AutoReject);
    assert_eq!(evaluator.validator().validation_mode(), ValidationMode::None);
}

#[test]
fn single_technology_is_auto_rejected() {
    let mut evaluator = evaluator("TURKEY");
    let mut application = application(18, 11);
    application.tech_stack = vec!["C#".to_string()];

    let result = evaluator.evaluate(&application).expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::AutoReject);
}

#[test]
fn rejected_identity_goes_to_hr() {
    let validator = StaticIdentityValidator::new("TURKEY").reject(["12345678910"]);
    let mut evaluator = ApplicationEvaluator::new(validator);

    let result = evaluator
        .evaluate(&application(18, 0))
        .expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::TransferredToHr);
}

#[test]
fn junior_applicant_abroad_goes_to_cto() {
    let mut evaluator = evaluator("SPAIN");

    let result = evaluator
        .evaluate(&application(18, 5))
        .expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::TransferredToCto);
}

#[test]
fn junior_applicant_at_home_is_accepted() {
    let mut evaluator = evaluator("TURKEY");

    let result = evaluator
        .evaluate(&application(18, 5))
        .expect("evaluation succeeds");

    assert_eq!(result, ApplicationResult::AutoAccept);
}

#[test]
fn senior_applicant_is_validated_in_detail() {
    let mut evaluator = evaluator("TURKEY");

    evaluator
        .evaluate(&application(51, 5))
        .expect("evaluation succeeds");

    assert_eq!(evaluator.into_validator().validation_mode(), ValidationMode::Detailed);
}

#[test]
fn application_without_applicant_fails_from_json() {
    let mut evaluator = evaluator("TURKEY");
    let application: JobApplication = serde_json::from_str(
        r#"{ "years_of_experience": 4, "tech_stack": ["Docker"] }"#,
    )
    .expect("payload parses");

    match evaluator.evaluate(&application) {
        Err(EvaluationError::MissingApplicant) => {}
        other => panic!("expected missing applicant error, got {other:?}"),
    }
}

#[test]
fn json_application_round_trips_through_evaluation() {
    let mut evaluator = ApplicationEvaluator::with_config(
        StaticIdentityValidator::new("SPAIN"),
        EvaluationConfig {
            similarity: SimilarityMode::Proportional,
            ..EvaluationConfig::default()
        },
    );
    let application: JobApplication = serde_json::from_str(
        r#"{
            "applicant": { "age": 30, "id_number": "98765432100" },
            "years_of_experience": 2,
            "tech_stack": ["docker", "rabbitmq", "Go"]
        }"#,
    )
    .expect("payload parses");

    let outcome = evaluator.assess(&application).expect("evaluation succeeds");
    let encoded = serde_json::to_value(outcome).expect("outcome serializes");

    assert_eq!(outcome.similarity, Some(40));
    assert_eq!(encoded["result"], "transferred_to_cto");
    assert_eq!(encoded["rule"], "outside_home_country");
}
