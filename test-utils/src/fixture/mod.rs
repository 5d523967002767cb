//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of domain model conversions and for consistent default values.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let activity = fixture::activity::entity();
//!
//! let full = fixture::activity::entity_builder()
//!     .max_participants(2)
//!     .build();
//! ```

pub mod activity;
pub mod student;

pub use activity::{entity as activity_entity, entity_builder as activity_entity_builder};
pub use student::entity as student_entity;
