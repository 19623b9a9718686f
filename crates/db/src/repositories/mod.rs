//! Lookup and mutation operations over a [`Store`](crate::Store).
//!
//! Repositories are zero-sized; every operation takes the store it acts
//! on, so tests can run against isolated instances.

mod app_script_repo;
mod extension_point_repo;
mod shop_script_repo;

pub use app_script_repo::AppScriptRepo;
pub use extension_point_repo::ExtensionPointRepo;
pub use shop_script_repo::ShopScriptRepo;
