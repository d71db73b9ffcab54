//! A single-constituency election: candidates accrue votes, every change is
//! recorded in timestamped action histories, and closing the constituency
//! freezes the outcome for turnout and winner queries.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use error::{Error, Result};
pub use model::{
    candidate::Candidate,
    constituency::{CandidateResult, Constituency, ElectionResults, ElectionState},
    history::{ActionHistory, Clock, FixedClock, SystemClock},
};
