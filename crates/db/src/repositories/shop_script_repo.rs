//! Repository for shop scripts.
//!
//! Besides the upsert/delete pair there are create-only and update-only
//! writes; those report a key clash or a missing record as a
//! [`CoreError`] instead of silently switching behaviour.

use indexmap::map::Entry;
use shopscripts_core::error::CoreError;
use shopscripts_core::keys::ShopScriptKey;

use crate::models::shop_script::{ShopScript, UpsertShopScript};
use crate::repositories::ExtensionPointRepo;
use crate::Store;

const ENTITY: &str = "ShopScript";

pub struct ShopScriptRepo;

impl ShopScriptRepo {
    /// Find the shop script with exactly this key.
    pub async fn find(store: &Store, key: &ShopScriptKey) -> Option<ShopScript> {
        store.shop_scripts.read().await.get(key).cloned()
    }

    /// Create or wholesale replace the shop script at `key`.
    ///
    /// The owning app script is not required to exist.
    pub async fn upsert(store: &Store, key: ShopScriptKey, input: UpsertShopScript) -> ShopScript {
        warn_on_unknown_extension_point(store, &key);

        let record = ShopScript::from_upsert(key.clone(), input);
        let replaced = store
            .shop_scripts
            .write()
            .await
            .insert(key.clone(), record.clone())
            .is_some();

        tracing::info!(shop_script = %key, replaced, "Shop script upserted");

        record
    }

    /// Create a shop script; fails with `Conflict` if the key is taken.
    pub async fn insert(
        store: &Store,
        key: ShopScriptKey,
        input: UpsertShopScript,
    ) -> Result<ShopScript, CoreError> {
        warn_on_unknown_extension_point(store, &key);

        let mut shop_scripts = store.shop_scripts.write().await;
        match shop_scripts.entry(key.clone()) {
            Entry::Occupied(_) => Err(CoreError::Conflict {
                entity: ENTITY,
                key: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                let record = slot.insert(ShopScript::from_upsert(key.clone(), input)).clone();
                tracing::info!(shop_script = %key, "Shop script created");
                Ok(record)
            }
        }
    }

    /// Replace an existing shop script; fails with `NotFound` if absent.
    pub async fn update(
        store: &Store,
        key: ShopScriptKey,
        input: UpsertShopScript,
    ) -> Result<ShopScript, CoreError> {
        let mut shop_scripts = store.shop_scripts.write().await;
        let Some(existing) = shop_scripts.get_mut(&key) else {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                key: key.to_string(),
            });
        };

        *existing = ShopScript::from_upsert(key.clone(), input);
        tracing::info!(shop_script = %key, "Shop script updated");

        Ok(existing.clone())
    }

    /// Remove the shop script at `key`, if any.
    ///
    /// Returns `true` if a record was removed. Deleting a missing key is not
    /// an error. Remaining records keep their relative order.
    pub async fn delete(store: &Store, key: &ShopScriptKey) -> bool {
        let removed = store.shop_scripts.write().await.shift_remove(key).is_some();

        if removed {
            tracing::info!(shop_script = %key, "Shop script deleted");
        } else {
            tracing::debug!(shop_script = %key, "Shop script delete was a no-op");
        }

        removed
    }
}

fn warn_on_unknown_extension_point(store: &Store, key: &ShopScriptKey) {
    if ExtensionPointRepo::find_by_name(store, &key.extension_point_name).is_none() {
        tracing::warn!(
            shop_script = %key,
            "Shop script targets an extension point missing from the catalog",
        );
    }
}
