//! # theme-ids - stable ids for theme attributes
//!
//! `theme-ids` hands out small integer ids for the named attributes a GUI
//! theme is made of, so the renderer can resolve them through plain array
//! indexing instead of string lookups.
//!
//! Three kinds of attribute are tracked, each in its own registry:
//!
//! - **Colors** ([`ColorRegistry`]): a packed 32-bit default color per name
//! - **Values** ([`ValueRegistry`]): a default scalar, a [`ScaleType`] and a
//!   pixel rounding flag per name
//! - **Overrides** ([`OverrideRegistry`]): named palette override contexts,
//!   with id 0 reserved for `"Global"`
//!
//! Every color and value also records a *group*, the base name of the file
//! that declared it (see [`group_from_path`]), so tooling can cluster related
//! attributes.
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_ids::{theme_colors, theme_values, ThemeRegistry};
//!
//! theme_colors! {
//!     pub struct SliderColors {
//!         SliderTrack = 0xFF404040,
//!         SliderThumb = 0xFFE0E0E0,
//!     }
//! }
//!
//! theme_values! {
//!     pub struct SliderValues {
//!         SliderTrackWidth = (3.0, ScaledDpi, true),
//!     }
//! }
//!
//! // One explicit registration pass at startup.
//! let mut theme = ThemeRegistry::new();
//! let colors = SliderColors::register(theme.colors_mut());
//! let values = SliderValues::register(theme.values_mut());
//!
//! assert_eq!(colors.SliderTrack.raw(), 0);
//! assert_eq!(colors.SliderThumb.raw(), 1);
//! assert_eq!(theme.colors().default_color(colors.SliderThumb), 0xFFE0E0E0);
//! assert_eq!(theme.values().default_value(values.SliderTrackWidth), 3.0);
//! ```
//!
//! ## Ids
//!
//! Ids are dense and issued in registration order: colors and values start
//! at 0, overrides at 1. Entries are never removed or changed. Names are not
//! required to be unique; registering a name twice issues a second id, and
//! name lookups return the latest one.
//!
//! ## Declarations
//!
//! [`ColorDecl`], [`ValueDecl`] and [`OverrideDecl`] describe an attribute
//! without registering it, so a module can declare its attributes and leave
//! the registration to a separate pass. See the [`macros`] module.
//!
//! ## Global Registry
//!
//! The [`global`] module keeps a lazily created, process-wide
//! [`ThemeRegistry`] for callers that cannot pass one around.

mod decl;
pub mod global;
pub mod macros;
mod path;
mod registry;
mod theme;

pub use decl::{ColorDecl, OverrideDecl, ValueDecl};
pub use path::group_from_path;
pub use registry::{
    AttributeKind, ColorEntry, ColorId, ColorRegistry, LookupError, OverrideEntry, OverrideId,
    OverrideRegistry, ParseScaleTypeError, RegistryConfig, ScaleType, ValueEntry, ValueId,
    ValueRegistry, GLOBAL_OVERRIDE_NAME,
};
pub use theme::{GroupMembers, Indexed, ThemeRegistry, ThemeSnapshot};
