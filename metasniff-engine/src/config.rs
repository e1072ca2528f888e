//! Configuration types for the engine

use crate::charset::Charset;
use crate::error::{EngineError, Result};
use metasniff_core::{DEFAULT_PRESCAN_LIMIT, MAX_BOM_LEN};

/// Smallest accepted prescan window; the streaming sniffer must be able to
/// hold a complete byte-order mark.
pub const MIN_PRESCAN_LIMIT: usize = MAX_BOM_LEN;

/// Sniffer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnifferConfig {
    prescan_limit: usize,
    default_charset: Charset,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            prescan_limit: DEFAULT_PRESCAN_LIMIT, // 1KB
            default_charset: Charset::Windows1252,
        }
    }
}

impl SnifferConfig {
    /// Create a builder
    pub fn builder() -> SnifferConfigBuilder {
        SnifferConfigBuilder::default()
    }

    /// Number of leading bytes inspected for `<meta>` declarations
    pub fn prescan_limit(&self) -> usize {
        self.prescan_limit
    }

    /// Encoding reported when neither a BOM nor a usable declaration exists
    pub fn default_charset(&self) -> Charset {
        self.default_charset
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct SnifferConfigBuilder {
    config: SnifferConfig,
    default_label: Option<String>,
}

impl SnifferConfigBuilder {
    /// Set the prescan window in bytes
    pub fn prescan_limit(mut self, limit: usize) -> Self {
        self.config.prescan_limit = limit;
        self
    }

    /// Set the fallback encoding
    pub fn default_charset(mut self, charset: Charset) -> Self {
        self.config.default_charset = charset;
        self.default_label = None;
        self
    }

    /// Set the fallback encoding by label, validated in [`build`](Self::build)
    pub fn default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = Some(label.into());
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<SnifferConfig> {
        if self.config.prescan_limit < MIN_PRESCAN_LIMIT {
            return Err(EngineError::InvalidConfig(format!(
                "prescan limit must be at least {MIN_PRESCAN_LIMIT} bytes, got {}",
                self.config.prescan_limit
            )));
        }

        if let Some(label) = self.default_label.take() {
            self.config.default_charset = label.parse().map_err(|_| {
                EngineError::InvalidConfig(format!(
                    "default encoding '{label}' is not a supported charset"
                ))
            })?;
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnifferConfig::default();
        assert_eq!(config.prescan_limit(), 1024);
        assert_eq!(config.default_charset(), Charset::Windows1252);
        assert_eq!(SnifferConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SnifferConfig::builder()
            .prescan_limit(4096)
            .default_label("UTF8")
            .build()
            .unwrap();
        assert_eq!(config.prescan_limit(), 4096);
        assert_eq!(config.default_charset(), Charset::Utf8);
    }

    #[test]
    fn test_rejects_tiny_limit() {
        let err = SnifferConfig::builder().prescan_limit(2).build().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(SnifferConfig::builder().prescan_limit(3).build().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_default() {
        let err = SnifferConfig::builder()
            .default_label("replacement")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("replacement"));
    }

    #[test]
    fn test_later_charset_overrides_label() {
        let config = SnifferConfig::builder()
            .default_label("bogus")
            .default_charset(Charset::Big5)
            .build()
            .unwrap();
        assert_eq!(config.default_charset(), Charset::Big5);
    }
}
