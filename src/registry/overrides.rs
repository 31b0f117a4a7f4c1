//! Palette override id registry.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::RegistryConfig;
use super::error::{AttributeKind, LookupError};
use super::id::OverrideId;
use super::table::{IdTable, TableEntry};

/// Name of the reserved override context at [`OverrideId::GLOBAL`].
pub const GLOBAL_OVERRIDE_NAME: &str = "Global";

/// A registered palette override context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideEntry {
    pub name: String,
}

impl TableEntry for OverrideEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Assigns [`OverrideId`]s to named palette override contexts.
///
/// Id 0 is always the global context, named `"Global"`, so user
/// registrations start at 1.
///
/// # Example
///
/// ```rust
/// use theme_ids::{OverrideId, OverrideRegistry};
///
/// let mut overrides = OverrideRegistry::new();
/// let dark = overrides.register("Dark");
///
/// assert_eq!(dark.raw(), 1);
/// assert_eq!(overrides.id_for_name("Global"), Ok(OverrideId::GLOBAL));
/// assert!(overrides.id_for_name("Nonexistent").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OverrideRegistry {
    table: IdTable<OverrideId, OverrideEntry>,
}

impl OverrideRegistry {
    /// Creates a registry holding only the global context.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry holding only the global context.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut table = IdTable::new(AttributeKind::Override, config);
        table.push(OverrideEntry {
            name: GLOBAL_OVERRIDE_NAME.to_string(),
        });
        Self { table }
    }

    /// Registers an override context and returns its new id.
    pub fn register(&mut self, name: impl Into<String>) -> OverrideId {
        self.table.push(OverrideEntry { name: name.into() })
    }

    /// Returns the name of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: OverrideId) -> &str {
        &self.table.expect(id).name
    }

    /// Returns the entry for `id`, if it exists.
    pub fn get(&self, id: OverrideId) -> Option<&OverrideEntry> {
        self.table.get(id)
    }

    /// Returns the entry for `id`, or [`LookupError::UnknownId`].
    pub fn entry(&self, id: OverrideId) -> Result<&OverrideEntry, LookupError> {
        self.table.entry(id)
    }

    /// Looks up the id of a named override context.
    ///
    /// If the name was registered more than once, the earliest id is
    /// returned, so `"Global"` always resolves to [`OverrideId::GLOBAL`].
    /// A miss is usually a programming error; callers that treat it as fatal
    /// can `expect` the result.
    pub fn id_for_name(&self, name: &str) -> Result<OverrideId, LookupError> {
        self.table.first_id_for_name(name)
    }

    /// Returns a snapshot of every name and its id.
    ///
    /// Unlike [`id_for_name`](Self::id_for_name), a repeated name maps to
    /// its latest id here.
    pub fn all_names_to_ids(&self) -> BTreeMap<String, OverrideId> {
        self.table.names_to_ids()
    }

    /// Returns the number of ids issued, counting the global context.
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing besides the global context has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 1
    }

    /// Iterates over all entries in id order, starting with the global context.
    pub fn iter(&self) -> impl Iterator<Item = (OverrideId, &OverrideEntry)> + '_ {
        self.table.iter()
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> RegistryConfig {
        self.table.config()
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_seeded() {
        let overrides = OverrideRegistry::new();
        assert_eq!(overrides.name(OverrideId::GLOBAL), "Global");
        assert_eq!(overrides.count(), 1);
    }

    #[test]
    fn test_dark_scenario() {
        let mut overrides = OverrideRegistry::new();
        let dark = overrides.register("Dark");

        assert_eq!(dark, OverrideId::from_raw(1));
        assert_eq!(overrides.id_for_name("Global"), Ok(OverrideId::GLOBAL));
        assert_eq!(overrides.id_for_name("Dark"), Ok(dark));
        assert_eq!(
            overrides.id_for_name("Nonexistent"),
            Err(LookupError::UnknownName {
                kind: AttributeKind::Override,
                name: "Nonexistent".to_string(),
            })
        );
    }

    #[test]
    #[should_panic(expected = "no override registered under name \"Nonexistent\"")]
    fn test_fatal_lookup_miss() {
        let overrides = OverrideRegistry::new();
        overrides
            .id_for_name("Nonexistent")
            .unwrap_or_else(|err| panic!("{err}"));
    }

    #[test]
    fn test_repeated_names_resolve_to_first_id() {
        let config = RegistryConfig::new().warn_on_duplicate_names(false);
        let mut overrides = OverrideRegistry::with_config(config);
        let shadow_global = overrides.register("Global");
        let dark = overrides.register("Dark");
        let dark_again = overrides.register("Dark");

        assert_eq!(shadow_global.raw(), 1);
        assert_eq!(overrides.id_for_name("Global"), Ok(OverrideId::GLOBAL));
        assert_eq!(overrides.id_for_name("Dark"), Ok(dark));
        assert_eq!(overrides.count(), 4);

        let map = overrides.all_names_to_ids();
        assert_eq!(map["Global"], shadow_global);
        assert_eq!(map["Dark"], dark_again);
    }

    #[test]
    fn test_is_empty_ignores_global() {
        let mut overrides = OverrideRegistry::new();
        assert!(overrides.is_empty());
        overrides.register("Popup");
        assert!(!overrides.is_empty());
        assert!(overrides.entry(OverrideId::from_raw(1)).is_ok());
        assert!(overrides.entry(OverrideId::from_raw(2)).is_err());
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut overrides = OverrideRegistry::new();
        let ids: Vec<u32> = ["Popup", "Sidebar", "Toolbar"]
            .into_iter()
            .map(|name| overrides.register(name).raw())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(overrides.count(), 4);
    }

    #[test]
    fn test_names_round_trip() {
        let mut overrides = OverrideRegistry::new();
        overrides.register("Popup");
        overrides.register("Sidebar");

        for (id, _) in overrides.iter() {
            assert_eq!(overrides.id_for_name(overrides.name(id)), Ok(id));
        }
        assert_eq!(overrides.all_names_to_ids().len(), 3);
    }
}
