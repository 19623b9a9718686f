use std::sync::Arc;

use shopscripts_db::Store;

use crate::config::ServerConfig;
use crate::graphql::{ReadOnlySchema, ScriptSchema};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store and config sit behind `Arc`, and the schema
/// is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Script storage. The schema holds a handle to the same store.
    pub store: Arc<Store>,
    /// Executable GraphQL schema.
    pub schema: ScriptSchema,
    /// Same queries without mutations, for `GET /graphql`.
    pub read_only_schema: ReadOnlySchema,
    pub config: Arc<ServerConfig>,
}
