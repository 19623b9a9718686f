//! App script models and DTOs.

use serde::Serialize;
use shopscripts_core::keys::AppScriptKey;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A script definition owned by an app, scoped to one extension point.
///
/// Identity is `(app_key, extension_point_name)`. Every other field is
/// opaque to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScript {
    pub app_key: String,
    pub extension_point_name: String,
    pub title: Option<String>,
    /// Identifier of the compiled script payload.
    pub source_code: Option<String>,
    pub input_schema: Option<String>,
    pub config_schema: Option<String>,
}

impl AppScript {
    /// Build a record from its key and the full set of fields.
    pub fn from_upsert(key: AppScriptKey, input: UpsertAppScript) -> Self {
        Self {
            app_key: key.app_key,
            extension_point_name: key.extension_point_name,
            title: input.title,
            source_code: input.source_code,
            input_schema: input.input_schema,
            config_schema: input.config_schema,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Field values for an app script upsert.
///
/// Replaces the whole record: a `None` here clears the stored value rather
/// than keeping it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertAppScript {
    pub title: Option<String>,
    pub source_code: Option<String>,
    pub input_schema: Option<String>,
    pub config_schema: Option<String>,
}
