pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod generation;
pub(crate) mod global;
pub(crate) mod quiz;
pub(crate) mod swagger;
pub(crate) mod topics;
