//! Data transfer objects serialized by the HTTP API.

pub mod activity;
pub mod api;
