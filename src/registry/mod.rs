//! Id registries for theme colors, values and palette overrides.
//!
//! This module provides:
//!
//! - [`ColorRegistry`]: color names to [`ColorId`]s, with a default packed color
//! - [`ValueRegistry`]: scalar names to [`ValueId`]s, with a default and a [`ScaleType`]
//! - [`OverrideRegistry`]: override context names to [`OverrideId`]s
//! - [`LookupError`]: Errors from id and name lookups
//!
//! All three share one append-only table, so ids are dense and never reused.

mod color;
mod config;
mod error;
mod id;
mod overrides;
mod table;
mod value;

pub use color::{ColorEntry, ColorRegistry};
pub use config::RegistryConfig;
pub use error::{AttributeKind, LookupError};
pub use id::{ColorId, OverrideId, ValueId};
pub use overrides::{OverrideEntry, OverrideRegistry, GLOBAL_OVERRIDE_NAME};
pub use value::{ParseScaleTypeError, ScaleType, ValueEntry, ValueRegistry};
