//! Property-based invariant tests for the id registries.
//!
//! 1. Ids are dense and issued in call order from the registry's base
//! 2. Every name resolves to the latest id registered under it
//! 3. With unique names, name -> id -> name round-trips
//! 4. Group labels never contain a path separator

use std::collections::HashMap;

use proptest::prelude::*;
use theme_ids::{
    group_from_path, ColorRegistry, OverrideId, OverrideRegistry, RegistryConfig, ScaleType,
    ValueRegistry,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    "([a-z]{1,4}[/\\\\]){0,3}[A-Za-z]{0,6}(\\.[a-z]{1,3})?"
}

fn scale_strategy() -> impl Strategy<Value = ScaleType> {
    prop::sample::select(ScaleType::ALL.to_vec())
}

fn quiet() -> RegistryConfig {
    RegistryConfig::new().warn_on_duplicate_names(false)
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Dense ids
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn color_ids_are_dense_from_zero(
        entries in prop::collection::vec((name_strategy(), path_strategy(), any::<u32>()), 0..64),
    ) {
        let mut colors = ColorRegistry::with_config(quiet());
        for (expected, (name, path, color)) in entries.iter().enumerate() {
            let id = colors.register(name.clone(), path, *color);
            prop_assert_eq!(id.index(), expected);
        }
        prop_assert_eq!(colors.count(), entries.len());
    }

    #[test]
    fn value_ids_are_dense_from_zero(
        entries in prop::collection::vec(
            (name_strategy(), -100.0f32..100.0, scale_strategy(), any::<bool>()),
            0..64,
        ),
    ) {
        let mut values = ValueRegistry::with_config(quiet());
        for (expected, (name, value, scale, round)) in entries.iter().enumerate() {
            let id = values.register(name.clone(), "widgets/Any.rs", *value, *scale, *round);
            prop_assert_eq!(id.index(), expected);
            prop_assert_eq!(values.default_value(id), *value);
        }
        prop_assert_eq!(values.count(), entries.len());
    }

    #[test]
    fn override_ids_are_dense_from_one(
        names in prop::collection::vec(name_strategy(), 0..64),
    ) {
        let mut overrides = OverrideRegistry::with_config(quiet());
        for (offset, name) in names.iter().enumerate() {
            let id = overrides.register(name.clone());
            prop_assert_eq!(id.index(), offset + 1);
        }
        prop_assert_eq!(overrides.count(), names.len() + 1);
        prop_assert_eq!(overrides.name(OverrideId::GLOBAL), "Global");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Latest id wins
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn name_map_points_at_latest_registration(
        names in prop::collection::vec("[a-c]", 1..32),
    ) {
        let mut colors = ColorRegistry::with_config(quiet());
        let mut latest = HashMap::new();
        for name in &names {
            let id = colors.register(name.clone(), "Palette.rs", 0);
            latest.insert(name.clone(), id);
        }

        let map = colors.all_names_to_ids();
        prop_assert_eq!(map.len(), latest.len());
        for (name, id) in &latest {
            prop_assert_eq!(map.get(name), Some(id));
            prop_assert_eq!(colors.id_for_name(name), Ok(*id));
        }
        prop_assert_eq!(colors.count(), names.len());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Round-trips with unique names
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unique_override_names_round_trip(
        names in prop::collection::btree_set("[A-Z][a-z]{1,6}", 0..32),
    ) {
        let mut overrides = OverrideRegistry::new();
        for name in names.iter().filter(|name| name.as_str() != "Global") {
            overrides.register(name.clone());
        }

        for (id, _) in overrides.iter() {
            prop_assert_eq!(overrides.id_for_name(overrides.name(id)), Ok(id));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Group labels
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn group_is_a_suffix_free_base_name(path in path_strategy()) {
        let group = group_from_path(&path);
        prop_assert!(!group.contains('/'));
        prop_assert!(!group.contains('\\'));
        prop_assert!(path.contains(group));
    }
}
