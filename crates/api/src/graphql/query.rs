use async_graphql::{Context, Object, ID};
use shopscripts_core::keys::{AppScriptKey, ShopScriptKey};
use shopscripts_db::repositories::{AppScriptRepo, ExtensionPointRepo, ShopScriptRepo};

use super::store;
use super::types::{AppScriptNode, ExtensionPointNode, ShopScriptNode};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every extension point, in catalog order.
    async fn extension_points(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<ExtensionPointNode>> {
        let store = store(ctx)?;
        Ok(ExtensionPointRepo::list(store)
            .iter()
            .cloned()
            .map(ExtensionPointNode::from)
            .collect())
    }

    /// Look up an app script by its composite key. Null if absent.
    async fn app_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        extension_point_name: String,
    ) -> async_graphql::Result<Option<AppScriptNode>> {
        let store = store(ctx)?;
        let key = AppScriptKey::new(app_key.0, extension_point_name);
        Ok(AppScriptRepo::find(store, &key).await.map(AppScriptNode))
    }

    /// Look up a shop script by its composite key. Null if absent.
    async fn shop_script(
        &self,
        ctx: &Context<'_>,
        app_key: ID,
        shop_id: ID,
        extension_point_name: String,
    ) -> async_graphql::Result<Option<ShopScriptNode>> {
        let store = store(ctx)?;
        let key = ShopScriptKey::new(app_key.0, shop_id.0, extension_point_name);
        Ok(ShopScriptRepo::find(store, &key).await.map(ShopScriptNode))
    }
}
