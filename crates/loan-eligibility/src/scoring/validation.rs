use super::domain::ApplicantInput;
use super::ScoringError;

pub const MAX_DEPENDENTS: u32 = 10;
pub const MIN_LOAN_TERM_MONTHS: u32 = 1;
pub const MAX_LOAN_TERM_MONTHS: u32 = 600;

fn non_negative(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if !value.is_finite() {
        return Err(ScoringError::InvalidInput {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ScoringError::InvalidInput {
            field,
            reason: format!("must not be negative (found {value})"),
        });
    }
    Ok(())
}

/// Range checks applied by intake surfaces before scoring. The encoder does
/// not call this.
pub fn validate(input: &ApplicantInput) -> Result<(), ScoringError> {
    if input.dependents > MAX_DEPENDENTS {
        return Err(ScoringError::InvalidInput {
            field: "dependents",
            reason: format!(
                "must be at most {MAX_DEPENDENTS} (found {})",
                input.dependents
            ),
        });
    }

    non_negative("applicant_income", input.applicant_income)?;
    non_negative("coapplicant_income", input.coapplicant_income)?;
    non_negative("loan_amount", input.loan_amount)?;

    if !(MIN_LOAN_TERM_MONTHS..=MAX_LOAN_TERM_MONTHS).contains(&input.loan_term_months) {
        return Err(ScoringError::InvalidInput {
            field: "loan_term_months",
            reason: format!(
                "must be between {MIN_LOAN_TERM_MONTHS} and {MAX_LOAN_TERM_MONTHS} months (found {})",
                input.loan_term_months
            ),
        });
    }

    Ok(())
}
