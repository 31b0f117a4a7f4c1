//! The combined registry a toolkit constructs once at startup.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::registry::{
    ColorEntry, ColorId, ColorRegistry, OverrideEntry, OverrideId, OverrideRegistry,
    RegistryConfig, ValueEntry, ValueId, ValueRegistry,
};

/// Color, value and override registries bundled together.
///
/// Construct one explicitly, run the registration pass, then hand it by
/// reference to whatever resolves theme attributes while rendering.
///
/// # Example
///
/// ```rust
/// use theme_ids::{theme_colors, theme_overrides, ThemeRegistry};
///
/// theme_colors! {
///     struct PanelColors {
///         PanelBackground = 0xFF202020,
///     }
/// }
///
/// theme_overrides! {
///     struct Palettes {
///         Dark,
///     }
/// }
///
/// let mut theme = ThemeRegistry::new();
/// let panel = PanelColors::register(theme.colors_mut());
/// let palettes = Palettes::register(theme.overrides_mut());
///
/// assert_eq!(theme.colors().default_color(panel.PanelBackground), 0xFF202020);
/// assert_eq!(theme.overrides().name(palettes.Dark), "Dark");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    colors: ColorRegistry,
    values: ValueRegistry,
    overrides: OverrideRegistry,
}

/// The ids of every color and value declared by one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupMembers {
    pub colors: Vec<ColorId>,
    pub values: Vec<ValueId>,
}

/// A serializable listing of every registered attribute, in id order.
///
/// Intended for inspection tooling and debug dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSnapshot {
    pub colors: Vec<Indexed<ColorId, ColorEntry>>,
    pub values: Vec<Indexed<ValueId, ValueEntry>>,
    pub overrides: Vec<Indexed<OverrideId, OverrideEntry>>,
}

/// An entry paired with its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indexed<I, E> {
    pub id: I,
    #[serde(flatten)]
    pub entry: E,
}

impl ThemeRegistry {
    /// Creates empty registries with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty registries sharing one configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            colors: ColorRegistry::with_config(config),
            values: ValueRegistry::with_config(config),
            overrides: OverrideRegistry::with_config(config),
        }
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorRegistry {
        &mut self.colors
    }

    pub fn values(&self) -> &ValueRegistry {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ValueRegistry {
        &mut self.values
    }

    pub fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut OverrideRegistry {
        &mut self.overrides
    }

    /// Clusters color and value ids by group label.
    pub fn groups(&self) -> BTreeMap<String, GroupMembers> {
        let mut groups: BTreeMap<String, GroupMembers> = BTreeMap::new();
        for (id, entry) in self.colors.iter() {
            groups.entry(entry.group.clone()).or_default().colors.push(id);
        }
        for (id, entry) in self.values.iter() {
            groups.entry(entry.group.clone()).or_default().values.push(id);
        }
        groups
    }

    /// Copies every entry out into a serializable snapshot.
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            colors: self
                .colors
                .iter()
                .map(|(id, entry)| Indexed {
                    id,
                    entry: entry.clone(),
                })
                .collect(),
            values: self
                .values
                .iter()
                .map(|(id, entry)| Indexed {
                    id,
                    entry: entry.clone(),
                })
                .collect(),
            overrides: self
                .overrides
                .iter()
                .map(|(id, entry)| Indexed {
                    id,
                    entry: entry.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScaleType;

    fn sample() -> ThemeRegistry {
        let mut theme = ThemeRegistry::new();
        theme
            .colors_mut()
            .register("Thumb", "widgets/Slider.rs", 0xFFAAAAAA);
        theme
            .colors_mut()
            .register("Caption", "widgets/Label.rs", 0xFFFFFFFF);
        theme
            .values_mut()
            .register("TrackWidth", "widgets/Slider.rs", 3.0, ScaleType::ScaledDpi, true);
        theme.overrides_mut().register("Dark");
        theme
    }

    #[test]
    fn test_registries_are_independent() {
        let theme = sample();
        assert_eq!(theme.colors().count(), 2);
        assert_eq!(theme.values().count(), 1);
        assert_eq!(theme.overrides().count(), 2);
    }

    #[test]
    fn test_groups_cluster_by_file() {
        let groups = sample().groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["Slider"],
            GroupMembers {
                colors: vec![ColorId::from_raw(0)],
                values: vec![ValueId::from_raw(0)],
            }
        );
        assert_eq!(groups["Label"].colors, vec![ColorId::from_raw(1)]);
        assert!(groups["Label"].values.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_entries_with_ids() {
        let snapshot = sample().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["colors"][1]["id"], 1);
        assert_eq!(json["colors"][1]["name"], "Caption");
        assert_eq!(json["colors"][1]["group"], "Label");
        assert_eq!(json["values"][0]["scale_type"], "ScaledDpi");
        assert_eq!(json["values"][0]["round_to_pixel"], true);
        assert_eq!(json["overrides"][0]["name"], "Global");
        assert_eq!(json["overrides"][1]["id"], 1);
    }

    #[test]
    fn test_with_config_applies_to_all() {
        let config = RegistryConfig::new().warn_on_duplicate_names(false);
        let theme = ThemeRegistry::with_config(config);
        assert_eq!(theme.colors().config(), config);
        assert_eq!(theme.values().config(), config);
        assert_eq!(theme.overrides().config(), config);
    }
}
