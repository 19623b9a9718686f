use async_graphql::{Context, ErrorExtensions, Object, ID};
use shopscripts_core::error::CoreError;
use shopscripts_core::keys::{AppScriptKey, ShopScriptKey};
use shopscripts_core::mutation::MutationOutcome;
use shopscripts_db::models::app_script::UpsertAppScript;
use shopscripts_db::models::shop_script::{ShopScript, UpsertShopScript};
use shopscripts_db::repositories::{AppScriptRepo, ShopScriptRepo};

use super::payload::{AppScriptPayload, ShopScriptDeletePayload, ShopScriptPayload};
use super::store;
use crate::error::AppError;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create the app script at `(appKey, extensionPointName)`, or replace
    /// it wholesale. Omitted fields are stored as null.
    async fn upsert_app_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        extension_point_name: String,
        title: Option<String>,
        source_code: Option<String>,
        input_schema: Option<String>,
        config_schema: Option<String>,
    ) -> async_graphql::Result<AppScriptPayload> {
        let store = store(ctx)?;
        let key = AppScriptKey::new(app_key.0, extension_point_name);
        let input = UpsertAppScript {
            title,
            source_code,
            input_schema,
            config_schema,
        };

        let app_script = AppScriptRepo::upsert(store, key, input).await;
        Ok(MutationOutcome::ok(app_script).into())
    }

    /// Create the shop script at `(appKey, shopId, extensionPointName)`, or
    /// replace it wholesale. The owning app script need not exist.
    async fn upsert_shop_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        shop_id: ID,
        extension_point_name: String,
        title: Option<String>,
        configuration: Option<String>,
    ) -> async_graphql::Result<ShopScriptPayload> {
        let store = store(ctx)?;
        let key = ShopScriptKey::new(app_key.0, shop_id.0, extension_point_name);

        let shop_script =
            ShopScriptRepo::upsert(store, key, UpsertShopScript { title, configuration }).await;
        Ok(MutationOutcome::ok(shop_script).into())
    }

    /// Create a shop script. Reports a user error if the key is taken.
    async fn create_shop_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        shop_id: ID,
        extension_point_name: String,
        title: Option<String>,
        configuration: Option<String>,
    ) -> async_graphql::Result<ShopScriptPayload> {
        let store = store(ctx)?;
        let key = ShopScriptKey::new(app_key.0, shop_id.0, extension_point_name);

        let result =
            ShopScriptRepo::insert(store, key, UpsertShopScript { title, configuration }).await;
        shop_script_payload(result)
    }

    /// Replace an existing shop script wholesale. Reports a user error if
    /// there is nothing to update.
    async fn update_shop_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        shop_id: ID,
        extension_point_name: String,
        title: Option<String>,
        configuration: Option<String>,
    ) -> async_graphql::Result<ShopScriptPayload> {
        let store = store(ctx)?;
        let key = ShopScriptKey::new(app_key.0, shop_id.0, extension_point_name);

        let result =
            ShopScriptRepo::update(store, key, UpsertShopScript { title, configuration }).await;
        shop_script_payload(result)
    }

    /// Remove a shop script. Deleting a missing key succeeds.
    async fn delete_shop_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        shop_id: ID,
        extension_point_name: String,
    ) -> async_graphql::Result<ShopScriptDeletePayload> {
        let store = store(ctx)?;
        let key = ShopScriptKey::new(app_key.0, shop_id.0, extension_point_name);

        ShopScriptRepo::delete(store, &key).await;
        Ok(MutationOutcome::<ShopScript>::empty().into())
    }
}

fn shop_script_payload(
    result: Result<ShopScript, CoreError>,
) -> async_graphql::Result<ShopScriptPayload> {
    MutationOutcome::from_result(result)
        .map(ShopScriptPayload::from)
        .map_err(|err| AppError::from(err).extend())
}
