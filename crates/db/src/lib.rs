//! In-process storage for the extension-point catalog, app scripts and
//! shop scripts.
//!
//! - [`Store`] owns all state; share it as `Arc<Store>`.
//! - [`repositories`] expose lookup and mutation operations over it.
//! - [`seed`] installs the demo records used by a fresh server.

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::{Store, StoreStats};

/// Build a store holding the default extension-point catalog and no
/// scripts.
pub fn create_store() -> Store {
    Store::new()
}
