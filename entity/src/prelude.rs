pub use super::activity::Entity as Activity;
pub use super::signup::Entity as Signup;
pub use super::student::Entity as Student;
