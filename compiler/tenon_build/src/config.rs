//! Construction settings.

/// Environment variable overriding [`BuildConfig::int_precision`].
const INT_PRECISION_VAR: &str = "TENON_INT_PRECISION";

/// Target-dependent settings consulted by the term factory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildConfig {
    /// Bit width of `int` and `uint`.
    pub int_precision: u32,
    /// Initial capacity of the type table.
    pub type_table_capacity: usize,
}

impl BuildConfig {
    /// Settings from the process environment, falling back to defaults.
    ///
    /// `TENON_INT_PRECISION` must be one of 8, 16, 32, 64 or 128; other
    /// values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(precision) = lookup(INT_PRECISION_VAR)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|p| matches!(p, 8 | 16 | 32 | 64 | 128))
        {
            config.int_precision = precision;
        } else {
            tracing::trace!("using default int precision");
        }
        config
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            int_precision: 32,
            type_table_capacity: 256,
        }
    }
}
