use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An activity as listed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i32,
    /// Emails of enrolled students in signup order.
    pub participants: Vec<String>,
}
