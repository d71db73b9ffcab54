use serde::{Deserialize, Serialize};

use crate::model::candidate::Candidate;

use super::ElectionState;

/// A candidate's standing, as reported in [`ElectionResults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResult {
    pub candidate_name: String,
    pub affiliation: String,
    /// Not present if no votes were ever recorded.
    pub tally: Option<u32>,
}

impl From<&Candidate> for CandidateResult {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate_name: candidate.full_name(),
            affiliation: candidate.affiliation().to_string(),
            tally: candidate.recorded_votes(),
        }
    }
}

/// A point-in-time snapshot of a constituency's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionResults {
    pub constituency: String,
    pub state: ElectionState,
    pub registered_voters: u32,
    pub total_votes: u64,
    /// Percentage of registered voters whose votes were counted.
    pub turnout: f64,
    /// Every candidate, in registration order.
    pub candidates: Vec<CandidateResult>,
    /// Full names of the candidates sharing the highest tally.
    pub winners: Vec<String>,
}
