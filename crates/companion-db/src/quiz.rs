pub mod question;
pub mod score;
