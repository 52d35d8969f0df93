//! SeaORM entities backing the domain records.

pub mod post;
pub mod profile;
pub mod user;
