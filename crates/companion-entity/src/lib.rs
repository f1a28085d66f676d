pub mod content;
pub mod quiz;
pub mod topic;
pub mod user;
