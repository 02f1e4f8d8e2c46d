use crate::commands::{run_explain, run_model_status, run_score, ModelArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_eligibility::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Scoring",
    about = "Score financing applicants and serve the eligibility API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single applicant from command-line attributes
    Score(ScoreArgs),
    /// Print the static explanation catalog
    Explain,
    /// Load the model artifact and print its status
    Model(ModelArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Explain => {
            run_explain();
            Ok(())
        }
        Command::Model(args) => run_model_status(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::scoring::PropertyArea;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["loan-eligibility-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_parses_applicant_flags() {
        let cli = Cli::try_parse_from([
            "loan-eligibility-api",
            "score",
            "--gender",
            "female",
            "--married",
            "single",
            "--education",
            "not_graduate",
            "--applicant-income",
            "2500",
            "--loan-amount",
            "90",
            "--property-area",
            "semiurban",
            "--delinquent",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                let input = args.applicant();
                assert_eq!(input.property_area, PropertyArea::Semiurban);
                assert!(!input.credit_history_ok);
                assert_eq!(input.loan_term_months, 360);
                assert_eq!(input.coapplicant_income, 0.0);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn score_rejects_unknown_property_area() {
        let err = Cli::try_parse_from([
            "loan-eligibility-api",
            "score",
            "--gender",
            "male",
            "--married",
            "married",
            "--education",
            "graduate",
            "--applicant-income",
            "3000",
            "--loan-amount",
            "120",
            "--property-area",
            "downtown",
        ])
        .expect_err("unknown area");
        assert!(err.to_string().contains("downtown"));
    }
}
