//! The static extension-point catalog.
//!
//! Extension points are seeded once when a store is built and are never
//! created, updated or deleted afterwards.

/// A catalog entry as `(name, schema)`; the schema is opaque.
pub type ExtensionPointSeed = (&'static str, &'static str);

/// Default catalog, in listing order.
pub const DEFAULT_EXTENSION_POINTS: &[ExtensionPointSeed] = &[
    ("discount", "{}"),
    ("vanity_pricing", "{}"),
    ("shipping", "{}"),
];
