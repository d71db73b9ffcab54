use serde::{Deserialize, Serialize};

/// States in the constituency's election lifecycle.
/// The only transition is `Open` to `Closed`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElectionState {
    /// Accepting candidates and votes.
    #[default]
    Open,
    /// Locked; results are final.
    Closed,
}

impl ElectionState {
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }
}
