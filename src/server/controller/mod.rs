//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer, and convert domain
//! models to DTOs for the JSON response.

pub mod activity;
pub mod root;
