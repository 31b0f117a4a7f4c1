//! Lookup errors.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The kind of theme attribute a registry hands out ids for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Color,
    Value,
    Override,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Color => "color",
            AttributeKind::Value => "value",
            AttributeKind::Override => "override",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an id or name is not known to a registry.
///
/// Accessors that panic on a miss (such as [`ColorRegistry::name`]) use this
/// error's message as the panic payload.
///
/// [`ColorRegistry::name`]: crate::ColorRegistry::name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The id was never issued by this registry.
    #[error("no {kind} registered with id {id}")]
    UnknownId { kind: AttributeKind, id: u32 },

    /// No entry carries this name.
    #[error("no {kind} registered under name \"{name}\"")]
    UnknownName { kind: AttributeKind, name: String },
}
