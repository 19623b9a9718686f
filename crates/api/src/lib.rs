//! Shop scripts GraphQL server library.
//!
//! Exposes the building blocks (config, state, error handling, schema,
//! routes) so integration tests and the binary entrypoint share them.

pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod state;
