//! Shop script models and DTOs.

use serde::Serialize;
use shopscripts_core::keys::{AppScriptKey, ShopScriptKey};

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A shop's binding of an app script at an extension point.
///
/// Identity is `(app_key, shop_id, extension_point_name)`. The
/// `(app_key, extension_point_name)` prefix names the owning app script,
/// which is not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopScript {
    pub app_key: String,
    pub shop_id: String,
    pub extension_point_name: String,
    pub title: Option<String>,
    /// Shop-specific override of the app script's config schema. Opaque.
    pub configuration: Option<String>,
}

impl ShopScript {
    /// Build a record from its key and the full set of fields.
    pub fn from_upsert(key: ShopScriptKey, input: UpsertShopScript) -> Self {
        Self {
            app_key: key.app_key,
            shop_id: key.shop_id,
            extension_point_name: key.extension_point_name,
            title: input.title,
            configuration: input.configuration,
        }
    }

    pub fn key(&self) -> ShopScriptKey {
        ShopScriptKey::new(
            self.app_key.clone(),
            self.shop_id.clone(),
            self.extension_point_name.clone(),
        )
    }

    /// Key of the app script this record binds to.
    pub fn app_script_key(&self) -> AppScriptKey {
        self.key().app_script_key()
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Field values for a shop script write. Full replace, like
/// [`UpsertAppScript`](crate::models::app_script::UpsertAppScript).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertShopScript {
    pub title: Option<String>,
    pub configuration: Option<String>,
}
