use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::error::Result;
use crate::model::{candidate::Candidate, constituency::Constituency};

/// Where the demo looks for its configuration.
pub const CONFIG_PATH: &str = "election.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Demo configuration, read from YAML. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    log_config: PathBuf,
    scenario: Scenario,
}

impl Config {
    /// Load the config at `path`, or the defaults if there is no such file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Path of the log4rs configuration file.
    pub fn log_config(&self) -> &Path {
        &self.log_config
    }

    /// The election to run.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_config: PathBuf::from("log4rs.yaml"),
            scenario: Scenario::default(),
        }
    }
}

/// A constituency and the votes its candidates receive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub registered_voters: i64,
    #[serde(default)]
    pub candidates: Vec<CandidateEntry>,
}

impl Scenario {
    /// Build the constituency, register every candidate in order and record their votes.
    /// Candidates with no votes are registered without a recorded tally.
    pub fn build(&self) -> Result<Constituency> {
        let mut constituency = Constituency::new(&self.name, self.registered_voters)?;
        for entry in &self.candidates {
            let candidate = Candidate::with_clock(
                &entry.last_name,
                &entry.first_name,
                entry.affiliation.as_deref(),
                constituency.clock(),
            )?;
            let full_name = candidate.full_name();
            constituency.add_candidate(candidate)?;
            if entry.votes != 0 {
                constituency.add_votes(&full_name, entry.votes)?;
            }
        }
        Ok(constituency)
    }
}

impl Default for Scenario {
    /// Picsouville: 75 registered voters and the three nephews, all independent.
    fn default() -> Self {
        let nephew = |last_name: &str, first_name: &str, votes| CandidateEntry {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            affiliation: None,
            votes,
        };
        Self {
            name: "Picsouville".to_string(),
            registered_voters: 75,
            candidates: vec![
                nephew("BALKONI", "Riri", 12),
                nephew("LEMEC", "Fifi", 5),
                nephew("TENERIS", "Loulou", 37),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateEntry {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub votes: i64,
}
