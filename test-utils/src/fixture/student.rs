//! Student fixtures for creating in-memory test data.

use entity::student;

/// Default test student email.
pub const DEFAULT_EMAIL: &str = "michael@mergington.edu";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"michael@mergington.edu"`
pub fn entity() -> student::Model {
    student::Model {
        id: 1,
        email: DEFAULT_EMAIL.to_string(),
    }
}
