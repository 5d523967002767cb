//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing capacity and duplicate-signup rules
//! - **Transaction Management**: Running multi-step mutations in one transaction
//! - **Seeding**: Populating an empty store with the sample catalog

pub mod activity;
pub mod seed;
