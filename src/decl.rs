//! Declarations that are bound to registry slots later.
//!
//! A declaration records everything needed to register an attribute but
//! holds no id. Declarations are `const`, so a module can publish them next
//! to the code that uses them, while the application decides when the
//! registration pass runs and in which order.
//!
//! The [`theme_color!`], [`theme_value!`] and [`theme_override!`] macros
//! build declarations that capture the calling file.
//!
//! [`theme_color!`]: crate::theme_color
//! [`theme_value!`]: crate::theme_value
//! [`theme_override!`]: crate::theme_override

use crate::registry::{
    ColorId, ColorRegistry, OverrideId, OverrideRegistry, ScaleType, ValueId, ValueRegistry,
};

/// A color declared but not yet registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDecl {
    pub name: &'static str,
    pub source_path: &'static str,
    pub default_color: u32,
}

impl ColorDecl {
    pub const fn new(name: &'static str, source_path: &'static str, default_color: u32) -> Self {
        Self {
            name,
            source_path,
            default_color,
        }
    }

    /// Registers the declaration, returning a fresh id each time.
    pub fn register(&self, colors: &mut ColorRegistry) -> ColorId {
        colors.register(self.name, self.source_path, self.default_color)
    }
}

/// A scalar value declared but not yet registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDecl {
    pub name: &'static str,
    pub source_path: &'static str,
    pub default_value: f32,
    pub scale_type: ScaleType,
    pub round_to_pixel: bool,
}

impl ValueDecl {
    pub const fn new(
        name: &'static str,
        source_path: &'static str,
        default_value: f32,
        scale_type: ScaleType,
        round_to_pixel: bool,
    ) -> Self {
        Self {
            name,
            source_path,
            default_value,
            scale_type,
            round_to_pixel,
        }
    }

    /// Registers the declaration, returning a fresh id each time.
    pub fn register(&self, values: &mut ValueRegistry) -> ValueId {
        values.register(
            self.name,
            self.source_path,
            self.default_value,
            self.scale_type,
            self.round_to_pixel,
        )
    }
}

/// A palette override context declared but not yet registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideDecl {
    pub name: &'static str,
}

impl OverrideDecl {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn register(&self, overrides: &mut OverrideRegistry) -> OverrideId {
        overrides.register(self.name)
    }
}
