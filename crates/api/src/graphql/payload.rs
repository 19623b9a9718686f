//! Mutation payload envelopes.

use async_graphql::SimpleObject;
use shopscripts_core::mutation::{MutationOutcome, UserError};
use shopscripts_db::models::app_script::AppScript;
use shopscripts_db::models::shop_script::ShopScript;

use super::types::{AppScriptNode, ShopScriptNode};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "UserError")]
pub struct UserErrorNode {
    pub message: String,
    /// Path to input field which caused the error.
    pub field: Option<Vec<String>>,
}

impl From<UserError> for UserErrorNode {
    fn from(err: UserError) -> Self {
        Self {
            message: err.message,
            field: err.field,
        }
    }
}

fn user_errors(errors: Vec<UserError>) -> Vec<UserErrorNode> {
    errors.into_iter().map(Into::into).collect()
}

#[derive(SimpleObject)]
pub struct AppScriptPayload {
    pub user_errors: Vec<UserErrorNode>,
    pub app_script: Option<AppScriptNode>,
}

impl From<MutationOutcome<AppScript>> for AppScriptPayload {
    fn from(outcome: MutationOutcome<AppScript>) -> Self {
        Self {
            user_errors: user_errors(outcome.user_errors),
            app_script: outcome.entity.map(AppScriptNode),
        }
    }
}

#[derive(SimpleObject)]
pub struct ShopScriptPayload {
    pub user_errors: Vec<UserErrorNode>,
    pub shop_script: Option<ShopScriptNode>,
}

impl From<MutationOutcome<ShopScript>> for ShopScriptPayload {
    fn from(outcome: MutationOutcome<ShopScript>) -> Self {
        Self {
            user_errors: user_errors(outcome.user_errors),
            shop_script: outcome.entity.map(ShopScriptNode),
        }
    }
}

#[derive(SimpleObject)]
pub struct ShopScriptDeletePayload {
    pub user_errors: Vec<UserErrorNode>,
}

impl<T> From<MutationOutcome<T>> for ShopScriptDeletePayload {
    fn from(outcome: MutationOutcome<T>) -> Self {
        Self {
            user_errors: user_errors(outcome.user_errors),
        }
    }
}
