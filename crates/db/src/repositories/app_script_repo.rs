//! Repository for app scripts.

use shopscripts_core::keys::AppScriptKey;

use crate::models::app_script::{AppScript, UpsertAppScript};
use crate::models::shop_script::ShopScript;
use crate::repositories::ExtensionPointRepo;
use crate::Store;

/// Lookup and upsert for app scripts. App scripts are never deleted.
pub struct AppScriptRepo;

impl AppScriptRepo {
    /// Find the app script with exactly this key.
    pub async fn find(store: &Store, key: &AppScriptKey) -> Option<AppScript> {
        store.app_scripts.read().await.get(key).cloned()
    }

    /// Create or wholesale replace the app script at `key`.
    ///
    /// A replaced record keeps its position in the collection. Fields absent
    /// from `input` are cleared. Always succeeds.
    pub async fn upsert(store: &Store, key: AppScriptKey, input: UpsertAppScript) -> AppScript {
        if ExtensionPointRepo::find_by_name(store, &key.extension_point_name).is_none() {
            tracing::warn!(
                app_script = %key,
                "App script targets an extension point missing from the catalog",
            );
        }

        let record = AppScript::from_upsert(key.clone(), input);
        let replaced = store
            .app_scripts
            .write()
            .await
            .insert(key.clone(), record.clone())
            .is_some();

        tracing::info!(app_script = %key, replaced, "App script upserted");

        record
    }

    /// Resolve the app script a shop script binds to.
    ///
    /// Follows the `(app_key, extension_point_name)` prefix of the shop
    /// script's key. There is no fallback: if no such app script exists the
    /// result is `None`, even though the shop script itself exists.
    pub async fn find_for_shop_script(store: &Store, shop_script: &ShopScript) -> Option<AppScript> {
        Self::find(store, &shop_script.app_script_key()).await
    }
}
