//! SeaORM entities for the activity sign-up schema.

pub mod prelude;

pub mod activity;
pub mod signup;
pub mod student;
