mod constituency_core;
mod results;
mod state;

pub use constituency_core::*;
pub use results::*;
pub use state::*;
