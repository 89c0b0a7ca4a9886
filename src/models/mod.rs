//! Data models for the polls and forms application.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod datastore;
mod form;
mod poll;

pub use datastore::*;
pub use form::*;
pub use poll::*;
