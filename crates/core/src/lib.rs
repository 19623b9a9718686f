//! Domain vocabulary shared by the store and the GraphQL layer.
//!
//! This crate has no internal dependencies: it defines the composite
//! identities of app scripts and shop scripts, the static extension-point
//! catalog, and the error / user-error types every layer speaks.

pub mod catalog;
pub mod error;
pub mod keys;
pub mod mutation;
