//! Composite identities for app scripts and shop scripts.
//!
//! Keys are compared exactly: no trimming, case folding or other
//! normalization is applied to any component.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an app script: one script per app per extension point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScriptKey {
    pub app_key: String,
    pub extension_point_name: String,
}

impl AppScriptKey {
    pub fn new(app_key: impl Into<String>, extension_point_name: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            extension_point_name: extension_point_name.into(),
        }
    }
}

impl fmt::Display for AppScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.app_key, self.extension_point_name)
    }
}

/// Identity of a shop script: a shop's binding of an app script at an
/// extension point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopScriptKey {
    pub app_key: String,
    pub shop_id: String,
    pub extension_point_name: String,
}

impl ShopScriptKey {
    pub fn new(
        app_key: impl Into<String>,
        shop_id: impl Into<String>,
        extension_point_name: impl Into<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            shop_id: shop_id.into(),
            extension_point_name: extension_point_name.into(),
        }
    }

    /// The key of the app script this shop script binds to.
    ///
    /// Shares the `(app_key, extension_point_name)` prefix; the shop id is
    /// dropped.
    pub fn app_script_key(&self) -> AppScriptKey {
        AppScriptKey::new(self.app_key.clone(), self.extension_point_name.clone())
    }
}

impl fmt::Display for ShopScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.app_key, self.shop_id, self.extension_point_name
        )
    }
}
