//! GraphQL resolution layer.
//!
//! Translates queries and mutations into repository calls against the
//! [`Store`] injected as schema data, and wraps mutation results in the
//! `{ userErrors, ... }` payload envelope.

mod mutation;
mod payload;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, ObjectType, Schema, SchemaBuilder,
};
use shopscripts_db::Store;

use crate::error::AppError;

pub use mutation::MutationRoot;
pub use payload::{AppScriptPayload, ShopScriptDeletePayload, ShopScriptPayload, UserErrorNode};
pub use query::QueryRoot;
pub use types::{AppScriptNode, ExtensionPointNode, ShopScriptNode};

/// The executable schema served on `POST /graphql`.
pub type ScriptSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Query-only schema served on `GET /graphql`, so reads can be issued as
/// plain URLs without exposing writes to them.
pub type ReadOnlySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Knobs for [`build_schema`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOptions {
    /// Attach the `tracing` extension (one span per request phase).
    pub tracing: bool,
}

/// Build the schema over `store`.
pub fn build_schema(store: Arc<Store>, options: SchemaOptions) -> ScriptSchema {
    finish(
        Schema::build(QueryRoot, MutationRoot, EmptySubscription),
        store,
        options,
    )
}

/// Build the query-only schema over `store`.
pub fn build_read_only_schema(store: Arc<Store>, options: SchemaOptions) -> ReadOnlySchema {
    finish(
        Schema::build(QueryRoot, EmptyMutation, EmptySubscription),
        store,
        options,
    )
}

fn finish<Q, M>(
    builder: SchemaBuilder<Q, M, EmptySubscription>,
    store: Arc<Store>,
    options: SchemaOptions,
) -> Schema<Q, M, EmptySubscription>
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
{
    let mut builder = builder.data(store);
    if options.tracing {
        builder = builder.extension(Tracing);
    }
    builder.finish()
}

/// The store registered with the schema.
fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Store>> {
    ctx.data::<Arc<Store>>().map_err(|_| {
        AppError::InternalError("script store is not registered with the schema".into()).extend()
    })
}
