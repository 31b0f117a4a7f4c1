//! Scalar value id registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::config::RegistryConfig;
use super::error::{AttributeKind, LookupError};
use super::id::ValueId;
use super::table::{IdTable, TableEntry};
use crate::path::group_from_path;

/// How a stored scalar is scaled before the renderer uses it.
///
/// The registry only records the tag; scaling happens in whatever resolves
/// theme values at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ScaleType {
    /// Used as-is.
    #[default]
    Constant,
    /// Multiplied by the device pixel ratio.
    ScaledDpi,
    /// Proportional to the reference width.
    ScaledWidth,
    /// Proportional to the reference height.
    ScaledHeight,
}

impl ScaleType {
    /// Every scale type, in declaration order.
    pub const ALL: [ScaleType; 4] = [
        ScaleType::Constant,
        ScaleType::ScaledDpi,
        ScaleType::ScaledWidth,
        ScaleType::ScaledHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Constant => "Constant",
            ScaleType::ScaledDpi => "ScaledDpi",
            ScaleType::ScaledWidth => "ScaledWidth",
            ScaleType::ScaledHeight => "ScaledHeight",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scale type tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scale type \"{0}\"")]
pub struct ParseScaleTypeError(pub String);

impl FromStr for ScaleType {
    type Err = ParseScaleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleType::ALL
            .into_iter()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| ParseScaleTypeError(s.to_string()))
    }
}

/// Metadata stored for a registered scalar value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueEntry {
    pub name: String,
    pub group: String,
    pub default_value: f32,
    pub scale_type: ScaleType,
    /// Snap the resolved value to a whole pixel before use.
    pub round_to_pixel: bool,
}

impl TableEntry for ValueEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Option<&str> {
        Some(&self.group)
    }
}

/// Assigns [`ValueId`]s to named theme scalars such as sizes and radii.
///
/// # Example
///
/// ```rust
/// use theme_ids::{ScaleType, ValueRegistry};
///
/// let mut values = ValueRegistry::new();
/// let radius = values.register("Radius", "ui/Button.rs", 4.0, ScaleType::ScaledDpi, true);
///
/// let info = values.info(radius);
/// assert_eq!(info.group, "Button");
/// assert_eq!(info.scale_type, ScaleType::ScaledDpi);
/// assert!(info.round_to_pixel);
/// ```
#[derive(Debug, Clone)]
pub struct ValueRegistry {
    table: IdTable<ValueId, ValueEntry>,
}

impl ValueRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            table: IdTable::new(AttributeKind::Value, config),
        }
    }

    /// Registers a scalar and returns its new id.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source_path: &str,
        default_value: f32,
        scale_type: ScaleType,
        round_to_pixel: bool,
    ) -> ValueId {
        self.table.push(ValueEntry {
            name: name.into(),
            group: group_from_path(source_path).to_string(),
            default_value,
            scale_type,
            round_to_pixel,
        })
    }

    /// Returns the unscaled default for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn default_value(&self, id: ValueId) -> f32 {
        self.table.expect(id).default_value
    }

    /// Returns a copy of the full entry for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn info(&self, id: ValueId) -> ValueEntry {
        self.table.expect(id).clone()
    }

    /// Returns the group of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn group_name(&self, id: ValueId) -> &str {
        &self.table.expect(id).group
    }

    /// Returns the name of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: ValueId) -> &str {
        &self.table.expect(id).name
    }

    /// Returns the entry for `id`, if it exists.
    pub fn get(&self, id: ValueId) -> Option<&ValueEntry> {
        self.table.get(id)
    }

    /// Returns the entry for `id`, or [`LookupError::UnknownId`].
    pub fn entry(&self, id: ValueId) -> Result<&ValueEntry, LookupError> {
        self.table.entry(id)
    }

    /// Looks up the id registered under `name`; the latest id wins on duplicates.
    pub fn id_for_name(&self, name: &str) -> Result<ValueId, LookupError> {
        self.table.id_for_name(name)
    }

    /// Returns a snapshot of every name and its id.
    pub fn all_names_to_ids(&self) -> BTreeMap<String, ValueId> {
        self.table.names_to_ids()
    }

    /// Returns the number of ids issued so far.
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Iterates over all entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ValueId, &ValueEntry)> + '_ {
        self.table.iter()
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> RegistryConfig {
        self.table.config()
    }
}

impl Default for ValueRegistry {
    fn default() -> Self {
        Self::new()
    }
}
