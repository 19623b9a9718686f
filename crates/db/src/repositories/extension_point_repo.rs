//! Read-only access to the extension-point catalog.

use crate::models::extension_point::ExtensionPoint;
use crate::Store;

pub struct ExtensionPointRepo;

impl ExtensionPointRepo {
    /// The full catalog, in seed order.
    pub fn list(store: &Store) -> &[ExtensionPoint] {
        &store.extension_points
    }

    pub fn find_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a ExtensionPoint> {
        store.extension_points.iter().find(|p| p.name == name)
    }
}
