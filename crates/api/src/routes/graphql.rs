//! HTTP entry points for the GraphQL schema.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const GRAPHQL_PATH: &str = "/graphql";

const GRAPHIQL_TEMPLATE: &str = include_str!("graphiql.html");

/// Query the console opens with.
const DEFAULT_CONSOLE_QUERY: &str = r#"# Welcome to GraphiQL

query ExtensionPoints {
  extensionPoints {
    name
    schema
  }
  appScript(appKey: 1, extensionPointName: "discount") {
    appKey
    extensionPointName
    title
    inputSchema
    configSchema
  }
  shopScript(appKey: 1, shopId: 2, extensionPointName: "discount") {
    shopId
    extensionPointName
    title
    configuration
    appScript {
      title
    }
  }
}
"#;

/// POST /graphql
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql
///
/// Runs against the query-only schema; a mutation sent this way is
/// reported as a GraphQL error and never executed.
async fn graphql_get_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.read_only_schema.execute(req.into_inner()).await.into()
}

/// GET /graphiql
async fn graphiql() -> Html<String> {
    Html(render_graphiql(GRAPHQL_PATH, DEFAULT_CONSOLE_QUERY))
}

/// Fill the console template. Values are embedded as JS string literals.
fn render_graphiql(endpoint: &str, default_query: &str) -> String {
    GRAPHIQL_TEMPLATE
        .replace("__ENDPOINT__", &js_string(endpoint))
        .replace("__DEFAULT_QUERY__", &js_string(default_query))
}

fn js_string(value: &str) -> String {
    // A JSON string is a valid JS literal; `</` is split so the value can
    // never close the surrounding script element.
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}

pub fn router(graphiql_enabled: bool) -> Router<AppState> {
    let router = Router::new().route(
        GRAPHQL_PATH,
        get(graphql_get_handler).post(graphql_handler),
    );

    if graphiql_enabled {
        router.route("/graphiql", get(graphiql))
    } else {
        router
    }
}
