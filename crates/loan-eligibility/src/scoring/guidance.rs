use serde::Serialize;

/// Follow-up recommendation shown with a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowUp {
    pub summary: &'static str,
    pub likely_causes: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

pub const ELIGIBLE_FOLLOW_UP: FollowUp = FollowUp {
    summary: "Financing can be considered for approval.",
    likely_causes: &[],
    next_steps: &[
        "Verify the entered applicant data",
        "Check supporting documents (identity card, tax number, financial statements)",
        "Run a field visit to validate the business or property",
        "Set the financing amount and term",
        "Sign the financing agreement",
    ],
};

pub const INELIGIBLE_FOLLOW_UP: FollowUp = FollowUp {
    summary: "Financing needs further review or should be declined.",
    likely_causes: &[
        "Problematic credit history (primary factor)",
        "Insufficient income",
        "Loan amount too high relative to income",
    ],
    next_steps: &[
        "Repair repayment history if there are arrears",
        "Increase income or reduce the requested amount",
        "Add a co-borrower with additional income",
        "Reapply once the financial situation improves",
    ],
};

pub fn follow_up_for(eligible: bool) -> FollowUp {
    if eligible {
        ELIGIBLE_FOLLOW_UP
    } else {
        INELIGIBLE_FOLLOW_UP
    }
}
