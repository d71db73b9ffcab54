pub mod candidate;
pub mod constituency;
pub mod history;
