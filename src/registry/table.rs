//! Append-only id table shared by the three registries.

use std::collections::BTreeMap;

use super::config::RegistryConfig;
use super::error::{AttributeKind, LookupError};
use super::id::RawId;

/// An entry stored in an [`IdTable`].
pub(crate) trait TableEntry {
    fn name(&self) -> &str;

    fn group(&self) -> Option<&str> {
        None
    }
}

/// Dense id table: the entry for id `n` lives at index `n`.
///
/// Entries are only ever appended. Two name indexes are kept alongside so
/// reverse lookups never scan: `by_name` points at the latest id registered
/// under a name, `first_by_name` at the earliest.
#[derive(Debug, Clone)]
pub(crate) struct IdTable<I, E> {
    kind: AttributeKind,
    entries: Vec<E>,
    by_name: BTreeMap<String, I>,
    first_by_name: BTreeMap<String, I>,
    config: RegistryConfig,
}

impl<I: RawId, E: TableEntry> IdTable<I, E> {
    pub(crate) fn new(kind: AttributeKind, config: RegistryConfig) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            by_name: BTreeMap::new(),
            first_by_name: BTreeMap::new(),
            config,
        }
    }

    pub(crate) fn push(&mut self, entry: E) -> I {
        let id = I::from_raw(raw_id(self.entries.len()));
        let name = entry.name().to_string();

        tracing::debug!(
            message = "theme.register",
            kind = self.kind.as_str(),
            id = id.raw(),
            name = name.as_str(),
            group = entry.group().unwrap_or_default()
        );

        self.first_by_name.entry(name.clone()).or_insert(id);
        if let Some(previous) = self.by_name.insert(name, id) {
            if self.config.warn_on_duplicate_names {
                tracing::warn!(
                    message = "theme.duplicate_name",
                    kind = self.kind.as_str(),
                    name = entry.name(),
                    previous = previous.raw(),
                    id = id.raw()
                );
            }
        }

        self.entries.push(entry);
        id
    }

    pub(crate) fn config(&self) -> RegistryConfig {
        self.config
    }

    pub(crate) fn get(&self, id: I) -> Option<&E> {
        self.entries.get(id.raw() as usize)
    }

    pub(crate) fn entry(&self, id: I) -> Result<&E, LookupError> {
        self.get(id).ok_or(LookupError::UnknownId {
            kind: self.kind,
            id: id.raw(),
        })
    }

    /// Fatal accessor: an id this table never issued is a programming error.
    pub(crate) fn expect(&self, id: I) -> &E {
        match self.entry(id) {
            Ok(entry) => entry,
            Err(err) => panic!("{err}"),
        }
    }

    /// Latest id registered under `name`.
    pub(crate) fn id_for_name(&self, name: &str) -> Result<I, LookupError> {
        self.lookup(&self.by_name, name)
    }

    /// Earliest id registered under `name`.
    pub(crate) fn first_id_for_name(&self, name: &str) -> Result<I, LookupError> {
        self.lookup(&self.first_by_name, name)
    }

    fn lookup(&self, index: &BTreeMap<String, I>, name: &str) -> Result<I, LookupError> {
        index
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownName {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    pub(crate) fn names_to_ids(&self) -> BTreeMap<String, I> {
        self.by_name.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (I, &E)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (I::from_raw(raw_id(index)), entry))
    }
}

fn raw_id(index: usize) -> u32 {
    u32::try_from(index).expect("theme id space exhausted")
}
