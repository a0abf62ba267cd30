use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use job_screening::config::{AppConfig, ScreeningConfig};
use job_screening::error::AppError;
use job_screening::screening::{
    ApplicationEvaluator, ApplicationResult, DecisionRule, EvaluationError, IdentityValidator,
    JobApplication, SimilarityMode, StaticIdentityValidator,
};
use job_screening::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "screen",
    about = "Screen job applications against the hiring rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one or more JSON application files
    Evaluate(EvaluateArgs),
    /// Print the reference tech stack applications are compared against
    Reference,
}

#[derive(Args, Debug, Default)]
struct EvaluateArgs {
    /// Files holding a JSON application or a JSON array of applications
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Country reported by the built-in identity validator
    #[arg(long)]
    country: Option<String>,
    /// Identifier the built-in identity validator should reject (repeatable)
    #[arg(long = "reject-id")]
    reject_ids: Vec<String>,
    /// Score tech stacks proportionally instead of the truncated legacy formula
    #[arg(long)]
    proportional: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ApplicationBatch {
    Many(Vec<JobApplication>),
    One(JobApplication),
}

impl ApplicationBatch {
    fn into_vec(self) -> Vec<JobApplication> {
        match self {
            ApplicationBatch::Many(applications) => applications,
            ApplicationBatch::One(application) => vec![application],
        }
    }
}

#[derive(Debug, Serialize)]
struct ScreeningLine<'a> {
    source: &'a Path,
    index: usize,
    result: ApplicationResult,
    rule: DecisionRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    similarity: Option<u32>,
    summary: String,
}

#[derive(Debug, Serialize)]
struct InvalidLine<'a> {
    source: &'a Path,
    index: usize,
    error: String,
}

/// Counts for one screened input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BatchSummary {
    evaluated: usize,
    invalid: usize,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(config, args),
        Command::Reference => {
            let mut stdout = io::stdout().lock();
            for tech in &config.screening.evaluation.reference_tech_stack {
                writeln!(stdout, "{tech}")?;
            }
            Ok(())
        }
    }
}

fn run_evaluate(config: AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let mut evaluator = build_evaluator(config.screening, &args);
    info!(
        environment = ?config.environment,
        country = evaluator.validator().country(),
        similarity = ?evaluator.config().similarity,
        "screening applications"
    );

    let mut stdout = io::stdout().lock();
    let mut invalid = 0;
    for path in &args.files {
        let reader = BufReader::new(File::open(path)?);
        let summary = screen_batch(&mut evaluator, path, reader, &mut stdout)?;
        invalid += summary.invalid;
    }

    if invalid > 0 {
        return Err(AppError::InvalidApplications { count: invalid });
    }
    Ok(())
}

fn build_evaluator(
    screening: ScreeningConfig,
    args: &EvaluateArgs,
) -> ApplicationEvaluator<StaticIdentityValidator> {
    let ScreeningConfig {
        mut evaluation,
        identity_country,
    } = screening;

    if args.proportional {
        evaluation.similarity = SimilarityMode::Proportional;
    }

    let country = args.country.clone().unwrap_or(identity_country);
    let validator = StaticIdentityValidator::new(country).reject(args.reject_ids.iter().cloned());
    ApplicationEvaluator::with_config(validator, evaluation)
}

/// Screen every application in `reader` and write one JSON line per application.
///
/// An application without an applicant is reported on its own line and the batch
/// continues; identity service failures abort the batch.
fn screen_batch<V, R, W>(
    evaluator: &mut ApplicationEvaluator<V>,
    source: &Path,
    reader: R,
    out: &mut W,
) -> Result<BatchSummary, AppError>
where
    V: IdentityValidator,
    R: Read,
    W: Write,
{
    let batch: ApplicationBatch = serde_json::from_reader(reader)?;
    let mut summary = BatchSummary::default();

    for (index, application) in batch.into_vec().iter().enumerate() {
        match evaluator.assess(application) {
            Ok(outcome) => {
                info!(
                    source = %source.display(),
                    index,
                    result = outcome.result.label(),
                    "application evaluated"
                );
                let line = ScreeningLine {
                    source,
                    index,
                    result: outcome.result,
                    rule: outcome.rule,
                    similarity: outcome.similarity,
                    summary: outcome.summary(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                summary.evaluated += 1;
            }
            Err(EvaluationError::MissingApplicant) => {
                warn!(source = %source.display(), index, "skipping application without applicant");
                let line = InvalidLine {
                    source,
                    index,
                    error: EvaluationError::MissingApplicant.to_string(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                summary.invalid += 1;
            }
            Err(err) => return Err(err.into()),
        }
        writeln!(out)?;
    }

    Ok(summary)
}
