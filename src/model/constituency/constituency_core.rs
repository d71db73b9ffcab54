use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::candidate::Candidate;
use crate::model::history::{ActionHistory, Clock};

use super::{CandidateResult, ElectionResults, ElectionState};

/// An electoral district: a fixed electorate, an ordered set of candidates,
/// and an audit trail of everything done to it.
#[derive(Debug, Clone)]
pub struct Constituency {
    name: String,
    registered_voters: u32,
    /// Registration order; unique by full name.
    candidates: Vec<Candidate>,
    history: ActionHistory,
    state: ElectionState,
}

impl Constituency {
    /// Open a new constituency, stamping its history with the system clock.
    pub fn new(name: &str, registered_voters: i64) -> Result<Self> {
        Self::build(name, registered_voters, ActionHistory::new())
    }

    /// Open a new constituency whose history is stamped by `clock`.
    pub fn with_clock(name: &str, registered_voters: i64, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::build(name, registered_voters, ActionHistory::with_clock(clock))
    }

    fn build(name: &str, registered_voters: i64, history: ActionHistory) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_argument("a constituency name is required"));
        }
        let registered_voters = u32::try_from(registered_voters)
            .ok()
            .filter(|&voters| voters > 0)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "registered voters must be positive, got {registered_voters}"
                ))
            })?;

        let mut constituency = Self {
            name: name.to_string(),
            registered_voters,
            candidates: Vec::new(),
            history,
            state: ElectionState::Open,
        };
        constituency
            .history
            .record(&format!("Constituency created: {name}"))?;
        info!("Opened constituency {name} with {registered_voters} registered voters");
        Ok(constituency)
    }

    /// Register a candidate. Full names must be unique within the constituency.
    pub fn add_candidate(&mut self, candidate: Candidate) -> Result<()> {
        if self.is_closed() {
            return Err(Error::illegal_state(
                "the election is closed, no more candidates can be added",
            ));
        }
        let full_name = candidate.full_name();
        if self.candidate(&full_name).is_some() {
            return Err(Error::invalid_argument(format!(
                "a candidate named {full_name} already stands in {}",
                self.name
            )));
        }

        self.history
            .record(&format!("Added candidate: {full_name}"))?;
        self.candidates.push(candidate);
        debug!("{full_name} now standing in {}", self.name);
        Ok(())
    }

    /// Record `votes` for the candidate with the given full name.
    pub fn add_votes(&mut self, full_name: &str, votes: i64) -> Result<()> {
        if self.is_closed() {
            return Err(Error::illegal_state(
                "the election is closed, no more votes can be added",
            ));
        }
        if votes <= 0 {
            return Err(Error::invalid_argument(format!(
                "the number of votes must be positive, got {votes}"
            )));
        }
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.full_name() == full_name)
            .ok_or_else(|| Error::invalid_argument(format!("Candidate {full_name} not found")))?;

        candidate.add_votes(votes)?;
        self.history
            .record(&format!("Added {votes} votes for {full_name}"))?;
        Ok(())
    }

    /// Lock the constituency against further changes.
    ///
    /// Fails if more votes were recorded than there are registered voters.
    /// Closing an already-closed constituency re-validates and records another
    /// closing entry.
    pub fn close(&mut self) -> Result<()> {
        let total = self.total_votes();
        if total > u64::from(self.registered_voters) {
            warn!(
                "Refused to close {}: {total} votes for {} registered voters",
                self.name, self.registered_voters
            );
            return Err(Error::illegal_state(format!(
                "total votes exceed registered voters ({total} > {})",
                self.registered_voters
            )));
        }

        self.history.record("Election closed.")?;
        self.state = ElectionState::Closed;
        info!("Closed election in {} with {total} votes", self.name);
        Ok(())
    }

    /// Sum of all candidates' tallies.
    pub fn total_votes(&self) -> u64 {
        self.candidates
            .iter()
            .map(|c| u64::from(c.vote_count()))
            .sum()
    }

    /// Recorded votes as a percentage of registered voters.
    pub fn turnout_rate(&self) -> f64 {
        self.total_votes() as f64 / f64::from(self.registered_voters) * 100.0
    }

    /// Every candidate holding the highest tally, in registration order.
    pub fn find_winners(&self) -> Vec<&Candidate> {
        let max_votes = self
            .candidates
            .iter()
            .map(Candidate::vote_count)
            .max()
            .unwrap_or(0);
        self.candidates
            .iter()
            .filter(|c| c.vote_count() == max_votes)
            .collect()
    }

    /// Snapshot the current outcome.
    pub fn results(&self) -> ElectionResults {
        ElectionResults {
            constituency: self.name.clone(),
            state: self.state,
            registered_voters: self.registered_voters,
            total_votes: self.total_votes(),
            turnout: self.turnout_rate(),
            candidates: self.candidates.iter().map(CandidateResult::from).collect(),
            winners: self
                .find_winners()
                .into_iter()
                .map(Candidate::full_name)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registered_voters(&self) -> u32 {
        self.registered_voters
    }

    pub fn state(&self) -> ElectionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Candidates in registration order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by full name.
    pub fn candidate(&self, full_name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.full_name() == full_name)
    }

    /// A copy of the constituency's own action history.
    /// Candidates keep separate histories.
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    /// Multi-line summary: a header followed by one line per candidate.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The clock stamping this constituency's history.
    /// Useful for creating candidates that share it.
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.history.clock()
    }
}

impl Display for Constituency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Election in constituency {} :", self.name)?;
        for candidate in &self.candidates {
            writeln!(f, "- {candidate}")?;
        }
        Ok(())
    }
}
