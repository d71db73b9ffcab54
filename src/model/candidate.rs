use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::model::history::{ActionHistory, Clock};

/// Affiliation given to candidates that declare none.
pub const DEFAULT_AFFILIATION: &str = "Independent";

/// A named contestant with an affiliation and a vote tally.
#[derive(Debug, Clone)]
pub struct Candidate {
    last_name: String,
    first_name: String,
    affiliation: String,
    /// `None` until votes are first recorded.
    votes: Option<u32>,
    history: ActionHistory,
}

impl Candidate {
    /// Register a new candidate, stamping its history with the system clock.
    /// An empty or missing affiliation becomes [`DEFAULT_AFFILIATION`].
    pub fn new(last_name: &str, first_name: &str, affiliation: Option<&str>) -> Result<Self> {
        Self::build(last_name, first_name, affiliation, ActionHistory::new())
    }

    /// Register a new candidate whose history is stamped by `clock`.
    pub fn with_clock(
        last_name: &str,
        first_name: &str,
        affiliation: Option<&str>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        Self::build(
            last_name,
            first_name,
            affiliation,
            ActionHistory::with_clock(clock),
        )
    }

    fn build(
        last_name: &str,
        first_name: &str,
        affiliation: Option<&str>,
        history: ActionHistory,
    ) -> Result<Self> {
        if last_name.is_empty() || first_name.is_empty() {
            return Err(Error::invalid_argument(
                "a candidate's last name and first name are required",
            ));
        }
        let affiliation = affiliation
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AFFILIATION);

        let mut candidate = Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            affiliation: affiliation.to_string(),
            votes: None,
            history,
        };
        candidate.history.record(&format!(
            "Candidate created: {} (Affiliation: {})",
            candidate.full_name(),
            candidate.affiliation
        ))?;
        info!("Created candidate {}", candidate.full_name());
        Ok(candidate)
    }

    /// Add `votes` to the running total, starting from zero if none were recorded yet.
    /// Zero is accepted here; the owning constituency is stricter.
    pub fn add_votes(&mut self, votes: i64) -> Result<()> {
        if votes < 0 {
            return Err(Error::invalid_argument(format!(
                "cannot add a negative number of votes ({votes})"
            )));
        }
        let current = self.votes.unwrap_or(0);
        let total = u32::try_from(votes)
            .ok()
            .and_then(|votes| current.checked_add(votes))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "adding {votes} votes to {} would overflow the tally",
                    self.full_name()
                ))
            })?;

        self.history
            .record(&format!("Added {votes} votes. Total votes: {total}"))?;
        self.votes = Some(total);
        debug!("{} now has {total} votes", self.full_name());
        Ok(())
    }

    /// The current tally, counting unrecorded as zero.
    pub fn vote_count(&self) -> u32 {
        self.votes.unwrap_or(0)
    }

    /// The raw tally, distinguishing "never recorded" from zero.
    pub fn recorded_votes(&self) -> Option<u32> {
        self.votes
    }

    /// `"<first name> <last name>"`, the key used for lookup and uniqueness.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn affiliation(&self) -> &str {
        &self.affiliation
    }

    /// A copy of this candidate's action history.
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    /// One-line summary, e.g. `"Riri BALKONI (Independent) : 12 votes"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) : ", self.full_name(), self.affiliation)?;
        match self.votes {
            Some(votes) => write!(f, "{votes} votes"),
            None => write!(f, "Not recorded votes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::history::FixedClock;

    use super::*;

    impl Candidate {
        pub fn example(last_name: &str, first_name: &str) -> Self {
            Self::with_clock(
                last_name,
                first_name,
                None,
                Arc::new(FixedClock::example()),
            )
            .unwrap()
        }
    }

    #[test]
    fn full_name_is_first_then_last() {
        let riri = Candidate::example("BALKONI", "Riri");
        assert_eq!(riri.full_name(), "Riri BALKONI");
        assert_eq!(riri.first_name(), "Riri");
        assert_eq!(riri.last_name(), "BALKONI");
    }

    #[test]
    fn fresh_candidate() {
        let riri = Candidate::example("BALKONI", "Riri");
        assert_eq!(riri.vote_count(), 0);
        assert_eq!(riri.recorded_votes(), None);
        assert_eq!(
            riri.history(),
            vec!["07/03/2024 09:05:42 - Candidate created: Riri BALKONI (Affiliation: Independent)"]
        );
    }

    #[test]
    fn affiliation_defaults_to_independent() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::example());
        let none = Candidate::with_clock("LEMEC", "Fifi", None, clock.clone()).unwrap();
        let empty = Candidate::with_clock("LEMEC", "Fifi", Some(""), clock.clone()).unwrap();
        let party = Candidate::with_clock("LEMEC", "Fifi", Some("Duck Party"), clock).unwrap();
        assert_eq!(none.affiliation(), DEFAULT_AFFILIATION);
        assert_eq!(empty.affiliation(), DEFAULT_AFFILIATION);
        assert_eq!(party.affiliation(), "Duck Party");
    }

    #[test]
    fn names_are_required() {
        for (last, first) in [("", "Riri"), ("BALKONI", ""), ("", "")] {
            assert!(matches!(
                Candidate::new(last, first, None),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn add_votes_is_additive() {
        let mut loulou = Candidate::example("TENERIS", "Loulou");
        loulou.add_votes(30).unwrap();
        loulou.add_votes(7).unwrap();
        assert_eq!(loulou.vote_count(), 37);
        assert_eq!(
            loulou.history()[1..],
            [
                "07/03/2024 09:05:42 - Added 30 votes. Total votes: 30".to_string(),
                "07/03/2024 09:05:42 - Added 7 votes. Total votes: 37".to_string(),
            ]
        );
    }

    #[test]
    fn add_zero_votes_marks_tally_recorded() {
        let mut fifi = Candidate::example("LEMEC", "Fifi");
        fifi.add_votes(0).unwrap();
        assert_eq!(fifi.recorded_votes(), Some(0));
        assert_eq!(fifi.describe(), "Fifi LEMEC (Independent) : 0 votes");
        assert_eq!(fifi.history().len(), 2);
    }

    #[test]
    fn negative_votes_rejected_without_change() {
        let mut fifi = Candidate::example("LEMEC", "Fifi");
        fifi.add_votes(5).unwrap();
        assert!(matches!(fifi.add_votes(-1), Err(Error::InvalidArgument(_))));
        assert_eq!(fifi.vote_count(), 5);
        assert_eq!(fifi.history().len(), 2);
    }

    #[test]
    fn overflowing_votes_rejected() {
        let mut fifi = Candidate::example("LEMEC", "Fifi");
        fifi.add_votes(u32::MAX.into()).unwrap();
        assert!(matches!(fifi.add_votes(1), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            Candidate::example("LEMEC", "Fifi").add_votes(i64::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(fifi.vote_count(), u32::MAX);
    }

    #[test]
    fn describe_unrecorded() {
        let riri = Candidate::example("BALKONI", "Riri");
        assert_eq!(riri.describe(), "Riri BALKONI (Independent) : Not recorded votes");
    }
}
