//! Color id registry.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::RegistryConfig;
use super::error::{AttributeKind, LookupError};
use super::id::ColorId;
use super::table::{IdTable, TableEntry};
use crate::path::group_from_path;

/// Metadata stored for a registered color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub name: String,
    pub group: String,
    /// Packed 32-bit color, ARGB by convention (`0xFFFF0000` is opaque red).
    pub default_color: u32,
}

impl TableEntry for ColorEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Option<&str> {
        Some(&self.group)
    }
}

/// Assigns [`ColorId`]s to named theme colors.
///
/// Ids start at 0 and are issued densely in registration order, so a
/// renderer can keep its resolved colors in a plain `Vec` indexed by
/// [`ColorId::index`].
///
/// # Example
///
/// ```rust
/// use theme_ids::ColorRegistry;
///
/// let mut colors = ColorRegistry::new();
/// let red = colors.register("Red", "colors/Red.h", 0xFFFF0000);
/// let blue = colors.register("Blue", "colors/Blue.h", 0xFF0000FF);
///
/// assert_eq!(red.raw(), 0);
/// assert_eq!(colors.group_name(red), "Red");
/// assert_eq!(colors.default_color(blue), 0xFF0000FF);
/// ```
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    table: IdTable<ColorId, ColorEntry>,
}

impl ColorRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            table: IdTable::new(AttributeKind::Color, config),
        }
    }

    /// Registers a color and returns its new id.
    ///
    /// `source_path` is the path of the declaring file; only its base name is
    /// kept, as the entry's group. Registering the same name again issues a
    /// second, independent id.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source_path: &str,
        default_color: u32,
    ) -> ColorId {
        self.table.push(ColorEntry {
            name: name.into(),
            group: group_from_path(source_path).to_string(),
            default_color,
        })
    }

    /// Returns the default color for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn default_color(&self, id: ColorId) -> u32 {
        self.table.expect(id).default_color
    }

    /// Returns the group of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn group_name(&self, id: ColorId) -> &str {
        &self.table.expect(id).group
    }

    /// Returns the name of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: ColorId) -> &str {
        &self.table.expect(id).name
    }

    /// Returns the entry for `id`, if it exists.
    pub fn get(&self, id: ColorId) -> Option<&ColorEntry> {
        self.table.get(id)
    }

    /// Returns the entry for `id`, or [`LookupError::UnknownId`].
    pub fn entry(&self, id: ColorId) -> Result<&ColorEntry, LookupError> {
        self.table.entry(id)
    }

    /// Looks up the id registered under `name`.
    ///
    /// If the name was registered more than once, the latest id is returned.
    pub fn id_for_name(&self, name: &str) -> Result<ColorId, LookupError> {
        self.table.id_for_name(name)
    }

    /// Returns a snapshot of every name and its id.
    pub fn all_names_to_ids(&self) -> BTreeMap<String, ColorId> {
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
    pub fn iter(&self) -> impl Iterator<Item = (ColorId, &ColorEntry)> + '_ {
        self.table.iter()
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> RegistryConfig {
        self.table.config()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
