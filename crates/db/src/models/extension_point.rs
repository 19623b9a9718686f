//! Extension point model.

use serde::Serialize;

/// A named hook scripts can attach to. `schema` is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionPoint {
    pub name: String,
    pub schema: String,
}

impl ExtensionPoint {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }
}
