pub mod content;
pub mod generation;
pub mod login;
pub mod quiz;
pub mod service;
pub mod status;
pub mod topic;
pub mod user;
