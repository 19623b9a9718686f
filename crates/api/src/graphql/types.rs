//! GraphQL object types over the store models.

use async_graphql::{Context, Object, SimpleObject, ID};
use shopscripts_db::models::app_script::AppScript;
use shopscripts_db::models::extension_point::ExtensionPoint;
use shopscripts_db::models::shop_script::ShopScript;
use shopscripts_db::repositories::AppScriptRepo;

use super::store;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "ExtensionPoint")]
pub struct ExtensionPointNode {
    pub name: String,
    /// Opaque description of the configuration shape.
    pub schema: String,
}

impl From<ExtensionPoint> for ExtensionPointNode {
    fn from(point: ExtensionPoint) -> Self {
        Self {
            name: point.name,
            schema: point.schema,
        }
    }
}

pub struct AppScriptNode(pub AppScript);

/// A script definition owned by an app at one extension point.
#[Object(name = "AppScript")]
impl AppScriptNode {
    async fn app_key(&self) -> ID {
        ID(self.0.app_key.clone())
    }

    async fn extension_point_name(&self) -> String {
        self.0.extension_point_name.clone()
    }

    async fn title(&self) -> Option<String> {
        self.0.title.clone()
    }

    /// Identifier of the compiled script payload.
    async fn source_code(&self) -> Option<String> {
        self.0.source_code.clone()
    }

    async fn input_schema(&self) -> Option<String> {
        self.0.input_schema.clone()
    }

    async fn config_schema(&self) -> Option<String> {
        self.0.config_schema.clone()
    }
}

pub struct ShopScriptNode(pub ShopScript);

/// A shop's binding of an app script at an extension point.
#[Object(name = "ShopScript")]
impl ShopScriptNode {
    async fn app_key(&self) -> ID {
        ID(self.0.app_key.clone())
    }

    async fn shop_id(&self) -> ID {
        ID(self.0.shop_id.clone())
    }

    async fn extension_point_name(&self) -> String {
        self.0.extension_point_name.clone()
    }

    async fn title(&self) -> Option<String> {
        self.0.title.clone()
    }

    /// Shop-specific override of the app script's config schema.
    async fn configuration(&self) -> Option<String> {
        self.0.configuration.clone()
    }

    /// The app script sharing this record's app key and extension point.
    /// Null when no such app script exists.
    async fn app_script(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<AppScriptNode>> {
        let store = store(ctx)?;
        Ok(AppScriptRepo::find_for_shop_script(store, &self.0)
            .await
            .map(AppScriptNode))
    }
}
