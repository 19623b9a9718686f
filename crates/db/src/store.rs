use indexmap::IndexMap;
use serde::Serialize;
use shopscripts_core::catalog::DEFAULT_EXTENSION_POINTS;
use shopscripts_core::keys::{AppScriptKey, ShopScriptKey};
use tokio::sync::RwLock;

use crate::models::app_script::AppScript;
use crate::models::extension_point::ExtensionPoint;
use crate::models::shop_script::ShopScript;

/// Process-wide script storage.
///
/// The catalog is fixed at construction. The two script collections are
/// insertion-ordered maps keyed by composite identity, so at most one record
/// exists per key. Each collection sits behind its own `RwLock`; a
/// find-then-replace-or-append runs under a single write guard.
pub struct Store {
    pub(crate) extension_points: Vec<ExtensionPoint>,
    pub(crate) app_scripts: RwLock<IndexMap<AppScriptKey, AppScript>>,
    pub(crate) shop_scripts: RwLock<IndexMap<ShopScriptKey, ShopScript>>,
}

/// Record counts, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub extension_points: usize,
    pub app_scripts: usize,
    pub shop_scripts: usize,
}

impl Store {
    /// Create a store seeded with the default catalog.
    pub fn new() -> Self {
        Self::with_catalog(
            DEFAULT_EXTENSION_POINTS
                .iter()
                .map(|(name, schema)| ExtensionPoint::new(*name, *schema))
                .collect(),
        )
    }

    /// Create a store with a custom catalog, listed in the given order.
    pub fn with_catalog(extension_points: Vec<ExtensionPoint>) -> Self {
        Self {
            extension_points,
            app_scripts: RwLock::new(IndexMap::new()),
            shop_scripts: RwLock::new(IndexMap::new()),
        }
    }

    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            extension_points: self.extension_points.len(),
            app_scripts: self.app_scripts.read().await.len(),
            shop_scripts: self.shop_scripts.read().await.len(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
