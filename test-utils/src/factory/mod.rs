//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::student::create_student(&db).await?;
//! let activity = factory::activity::create_activity(&db).await?;
//! factory::signup::create_signup(&db, activity.id, student.id).await?;
//!
//! // Activity with three enrolled students
//! let (activity, students) =
//!     factory::helpers::create_activity_with_participants(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let activity = factory::activity::ActivityFactory::new(&db)
//!     .name("Chess Club")
//!     .max_participants(12)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod helpers;
pub mod signup;
pub mod student;

pub use activity::create_activity;
pub use signup::create_signup;
pub use student::create_student;
