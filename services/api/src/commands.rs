use clap::Args;
use loan_eligibility::config::{parse_threshold, AppConfig, ModelConfig};
use loan_eligibility::error::AppError;
use loan_eligibility::scoring::{
    validate, ApplicantInput, Education, Explanation, Gender, MaritalStatus, PropertyArea,
    ScoreResponse, ScoreResult, ScoringService, EXPLANATION_CATALOG,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ModelArgs {
    /// Model artifact to load (defaults to APP_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Approve iff the approval probability reaches this cutoff (0-1)
    #[arg(long, value_parser = threshold_arg)]
    pub(crate) threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant gender (male, female)
    #[arg(long)]
    pub(crate) gender: Gender,
    /// Marital status (single, married)
    #[arg(long)]
    pub(crate) married: MaritalStatus,
    /// Number of dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u32,
    /// Highest education (graduate, not_graduate)
    #[arg(long)]
    pub(crate) education: Education,
    /// Applicant is self-employed
    #[arg(long)]
    pub(crate) self_employed: bool,
    /// Monthly applicant income
    #[arg(long)]
    pub(crate) applicant_income: f64,
    /// Monthly co-applicant income
    #[arg(long, default_value_t = 0.0)]
    pub(crate) coapplicant_income: f64,
    /// Requested financing amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Financing term in months
    #[arg(long, default_value_t = 360)]
    pub(crate) loan_term_months: u32,
    /// Applicant has arrears or other repayment problems
    #[arg(long)]
    pub(crate) delinquent: bool,
    /// Property location (urban, semiurban, rural)
    #[arg(long)]
    pub(crate) property_area: PropertyArea,
    /// Print the response as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) model: ModelArgs,
}

impl ScoreArgs {
    pub(crate) fn applicant(&self) -> ApplicantInput {
        ApplicantInput {
            gender: self.gender,
            married: self.married,
            dependents: self.dependents,
            education: self.education,
            self_employed: self.self_employed,
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term_months,
            credit_history_ok: !self.delinquent,
            property_area: self.property_area,
        }
    }
}

fn threshold_arg(raw: &str) -> Result<f64, String> {
    parse_threshold(raw).map_err(|err| err.to_string())
}

fn model_config(args: &ModelArgs) -> Result<ModelConfig, AppError> {
    let mut config = AppConfig::load()?.model;
    if let Some(path) = &args.model {
        config.artifact_path = path.clone();
    }
    if let Some(cutoff) = args.threshold {
        config.decision_threshold = Some(cutoff);
    }
    Ok(config)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = args.applicant();
    validate(&input)?;

    let service = ScoringService::load(&model_config(&args.model)?);
    let scored = service.assess(&input)?;

    if args.json {
        let response = ScoreResponse::from(scored);
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        render_score(&scored.result);
    }
    Ok(())
}

pub(crate) fn run_explain() {
    println!("Key eligibility factors (static reference, not computed per applicant)");
    render_explanations(&EXPLANATION_CATALOG);
}

pub(crate) fn run_model_status(args: ModelArgs) -> Result<(), AppError> {
    let service = ScoringService::load(&model_config(&args)?);
    let status = service.status();
    let rendered = serde_json::to_string_pretty(&status)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}

fn render_score(result: &ScoreResult) {
    println!("Eligibility result");
    if result.eligible {
        println!("- RECOMMENDED FOR APPROVAL");
    } else {
        println!("- NOT RECOMMENDED");
    }
    println!(
        "- Approval probability {} | rejection probability {}",
        result.approved_percentage(),
        result.rejected_percentage()
    );

    println!("\nFollow-up: {}", result.follow_up.summary);
    if !result.follow_up.likely_causes.is_empty() {
        println!("Likely causes");
        for cause in result.follow_up.likely_causes {
            println!("- {cause}");
        }
    }
    println!("Next steps");
    for (index, step) in result.follow_up.next_steps.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }

    println!("\nKey eligibility factors");
    render_explanations(&result.explanations);
}

fn render_explanations(entries: &[Explanation]) {
    for entry in entries {
        println!(
            "- {} [{}]: {}",
            entry.factor,
            entry.influence.label(),
            entry.rationale
        );
    }
}
