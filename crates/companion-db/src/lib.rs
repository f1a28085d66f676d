pub mod content;
pub mod quiz;
pub mod schema;
pub mod topic;
pub mod user;
pub mod util;

pub use sea_orm;
