pub mod question;
pub mod score;
pub mod submission;
