//! Demo records installed when a server starts with seeding enabled.

use shopscripts_core::keys::{AppScriptKey, ShopScriptKey};

use crate::models::app_script::UpsertAppScript;
use crate::models::shop_script::UpsertShopScript;
use crate::repositories::{AppScriptRepo, ShopScriptRepo};
use crate::Store;

/// `(app_key, extension_point_name, title, config_schema)`
const APP_SCRIPTS: &[(&str, &str, &str, &str)] = &[
    ("1", "discount", "1", "{ discount: Int }"),
    ("2", "vanity_pricing", "2", ""),
    ("3", "shipping", "3", ""),
];

/// `(app_key, shop_id, extension_point_name, title, configuration)`
const SHOP_SCRIPTS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "1", "discount", "1", "{ discount: 99 }"),
    ("1", "2", "discount", "2", "{ discount: 95 }"),
    ("1", "3", "discount", "3", "{ discount: 90 }"),
];

/// Upsert the demo app scripts and shop scripts into `store`.
///
/// Running it again leaves the store unchanged apart from restoring any
/// demo record that was modified or deleted.
pub async fn seed_demo_data(store: &Store) {
    for (app_key, extension_point_name, title, config_schema) in APP_SCRIPTS {
        AppScriptRepo::upsert(
            store,
            AppScriptKey::new(*app_key, *extension_point_name),
            UpsertAppScript {
                title: Some((*title).into()),
                source_code: None,
                input_schema: Some("{}".into()),
                config_schema: Some((*config_schema).into()),
            },
        )
        .await;
    }

    for (app_key, shop_id, extension_point_name, title, configuration) in SHOP_SCRIPTS {
        ShopScriptRepo::upsert(
            store,
            ShopScriptKey::new(*app_key, *shop_id, *extension_point_name),
            UpsertShopScript {
                title: Some((*title).into()),
                configuration: Some((*configuration).into()),
            },
        )
        .await;
    }

    tracing::info!(
        app_scripts = APP_SCRIPTS.len(),
        shop_scripts = SHOP_SCRIPTS.len(),
        "Demo data seeded",
    );
}
