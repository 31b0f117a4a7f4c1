//! Registry behavior settings.

/// Settings shared by the color, value and override registries.
///
/// None of the settings affect id assignment; they only control diagnostics.
///
/// # Example
///
/// ```rust
/// use theme_ids::{ColorRegistry, RegistryConfig};
///
/// let config = RegistryConfig::new().warn_on_duplicate_names(false);
/// let mut colors = ColorRegistry::with_config(config);
/// let a = colors.register("Accent", file!(), 0xff00ffff);
/// let b = colors.register("Accent", file!(), 0xff00ffff);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    pub(crate) warn_on_duplicate_names: bool,
}

impl RegistryConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            warn_on_duplicate_names: true,
        }
    }

    /// Sets whether registering a name that already exists logs a warning.
    ///
    /// Duplicate names are always accepted and receive a fresh id; the
    /// name-to-id map then resolves to the most recent one.
    pub fn warn_on_duplicate_names(mut self, enabled: bool) -> Self {
        self.warn_on_duplicate_names = enabled;
        self
    }

    /// Returns whether duplicate names are logged.
    pub fn warns_on_duplicate_names(&self) -> bool {
        self.warn_on_duplicate_names
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_warns() {
        assert!(RegistryConfig::default().warns_on_duplicate_names());
    }

    #[test]
    fn test_config_builder() {
        let config = RegistryConfig::new().warn_on_duplicate_names(false);
        assert!(!config.warns_on_duplicate_names());
    }
}
