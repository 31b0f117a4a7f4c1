//! Declaration macros.
//!
//! Single declarations:
//!
//! - [`theme_color!`](crate::theme_color) builds a [`ColorDecl`](crate::ColorDecl)
//! - [`theme_value!`](crate::theme_value) builds a [`ValueDecl`](crate::ValueDecl)
//! - [`theme_override!`](crate::theme_override) builds an [`OverrideDecl`](crate::OverrideDecl)
//!
//! Grouped declarations generate a struct of ids with a `register` function
//! that binds every member, in the order written:
//!
//! - [`theme_colors!`](crate::theme_colors)
//! - [`theme_values!`](crate::theme_values)
//! - [`theme_overrides!`](crate::theme_overrides)
//!
//! # Example
//!
//! ```rust
//! use theme_ids::{theme_colors, theme_values, ColorRegistry, ValueRegistry};
//!
//! theme_colors! {
//!     pub struct ButtonColors {
//!         ButtonText = 0xFFFFFFFF,
//!         ButtonBackground = 0xFF333333,
//!     }
//! }
//!
//! theme_values! {
//!     pub struct ButtonValues {
//!         ButtonRounding = (4.0, ScaledDpi, true),
//!     }
//! }
//!
//! let mut colors = ColorRegistry::new();
//! let mut values = ValueRegistry::new();
//! let button = ButtonColors::register(&mut colors);
//! let sizes = ButtonValues::register(&mut values);
//!
//! assert_eq!(colors.name(button.ButtonBackground), "ButtonBackground");
//! assert_eq!(values.default_value(sizes.ButtonRounding), 4.0);
//! ```

/// Declares a color, capturing the calling file as its group source.
///
/// ```rust
/// use theme_ids::{theme_color, ColorDecl};
///
/// const ACCENT: ColorDecl = theme_color!(Accent, 0xFF00AAFF);
/// assert_eq!(ACCENT.name, "Accent");
/// ```
#[macro_export]
macro_rules! theme_color {
    ($name:ident, $default:expr) => {
        $crate::ColorDecl::new(::core::stringify!($name), ::core::file!(), $default)
    };
}

/// Declares a scalar value with its scale type and rounding flag.
///
/// The default may be any numeric literal; it is converted with `as f32`.
///
/// ```rust
/// use theme_ids::{theme_value, ScaleType, ValueDecl};
///
/// const PADDING: ValueDecl = theme_value!(Padding, 6, ScaledDpi, true);
/// assert_eq!(PADDING.default_value, 6.0);
/// assert_eq!(PADDING.scale_type, ScaleType::ScaledDpi);
/// ```
#[macro_export]
macro_rules! theme_value {
    ($name:ident, $default:expr, $scale:ident, $round:expr) => {
        $crate::ValueDecl::new(
            ::core::stringify!($name),
            ::core::file!(),
            ($default) as f32,
            $crate::ScaleType::$scale,
            $round,
        )
    };
}

/// Declares a palette override context.
#[macro_export]
macro_rules! theme_override {
    ($name:ident) => {
        $crate::OverrideDecl::new(::core::stringify!($name))
    };
}

/// Declares a struct of color ids and the pass that registers them.
#[macro_export]
macro_rules! theme_colors {
    (
        $(#[$meta:meta])*
        $vis:vis struct $group:ident {
            $($field:ident = $default:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $group {
            $(pub $field: $crate::ColorId,)*
        }

        impl $group {
            /// Declarations for every member, in registration order.
            pub const DECLS: &'static [$crate::ColorDecl] =
                &[$($crate::theme_color!($field, $default)),*];

            /// Registers every member and returns their ids.
            pub fn register(colors: &mut $crate::ColorRegistry) -> Self {
                Self {
                    $($field: $crate::theme_color!($field, $default).register(colors),)*
                }
            }
        }
    };
}

/// Declares a struct of value ids and the pass that registers them.
///
/// Each member is written `Name = (default, ScaleType, round_to_pixel)`.
#[macro_export]
macro_rules! theme_values {
    (
        $(#[$meta:meta])*
        $vis:vis struct $group:ident {
            $($field:ident = ($default:expr, $scale:ident, $round:expr)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $group {
            $(pub $field: $crate::ValueId,)*
        }

        impl $group {
            /// Declarations for every member, in registration order.
            pub const DECLS: &'static [$crate::ValueDecl] =
                &[$($crate::theme_value!($field, $default, $scale, $round)),*];

            /// Registers every member and returns their ids.
            pub fn register(values: &mut $crate::ValueRegistry) -> Self {
                Self {
                    $($field: $crate::theme_value!($field, $default, $scale, $round).register(values),)*
                }
            }
        }
    };
}

/// Declares a struct of override ids and the pass that registers them.
#[macro_export]
macro_rules! theme_overrides {
    (
        $(#[$meta:meta])*
        $vis:vis struct $group:ident {
            $($field:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $group {
            $(pub $field: $crate::OverrideId,)*
        }

        impl $group {
            /// Declarations for every member, in registration order.
            pub const DECLS: &'static [$crate::OverrideDecl] =
                &[$($crate::theme_override!($field)),*];

            /// Registers every member and returns their ids.
            pub fn register(overrides: &mut $crate::OverrideRegistry) -> Self {
                Self {
                    $($field: $crate::theme_override!($field).register(overrides),)*
                }
            }
        }
    };
}
