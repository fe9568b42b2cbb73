//! Configuration builder
//!
//! Assembles a [`BannerConfig`] field by field and validates it on
//! build.

use crate::config::{BannerConfig, DEFAULT_STACK_DEPTH, DEFAULT_TRIGGER_COUNTS};
use crate::error::ConfigError;

/// Builder for [`BannerConfig`]
pub struct ConfigBuilder {
    package_name: Option<String>,
    developer_name: Option<String>,
    github_handle: Option<String>,
    image_url: Option<String>,
    repository_name: Option<String>,
    expected_stack_trace_depth: usize,
    trigger_counts: Vec<u64>,
}

impl ConfigBuilder {
    /// Create a new builder with default depth and triggers
    pub fn new() -> Self {
        Self {
            package_name: None,
            developer_name: None,
            github_handle: None,
            image_url: None,
            repository_name: None,
            expected_stack_trace_depth: DEFAULT_STACK_DEPTH,
            trigger_counts: DEFAULT_TRIGGER_COUNTS.to_vec(),
        }
    }

    /// Set the package name (required)
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Set the developer name (required)
    pub fn with_developer_name(mut self, name: impl Into<String>) -> Self {
        self.developer_name = Some(name.into());
        self
    }

    /// Set the GitHub handle (required)
    pub fn with_github_handle(mut self, handle: impl Into<String>) -> Self {
        self.github_handle = Some(handle.into());
        self
    }

    /// Set the banner image URL (required)
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the repository name linked from the banner
    pub fn with_repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// Set the stack frame index checked against the kernel launcher
    pub fn with_stack_depth(mut self, depth: usize) -> Self {
        self.expected_stack_trace_depth = depth;
        self
    }

    /// Set the cumulative import counts that show the banner
    pub fn with_trigger_counts(mut self, counts: Vec<u64>) -> Self {
        self.trigger_counts = counts;
        self
    }

    /// Build the final configuration
    ///
    /// # Errors
    /// Returns `ConfigError::MissingField` if a required field was not
    /// set, or a validation error from [`BannerConfig::validate`].
    pub fn build(self) -> Result<BannerConfig, ConfigError> {
        let config = BannerConfig {
            package_name: self
                .package_name
                .ok_or_else(|| ConfigError::MissingField("package_name".to_string()))?,
            developer_name: self
                .developer_name
                .ok_or_else(|| ConfigError::MissingField("developer_name".to_string()))?,
            github_handle: self
                .github_handle
                .ok_or_else(|| ConfigError::MissingField("github_handle".to_string()))?,
            image_url: self
                .image_url
                .ok_or_else(|| ConfigError::MissingField("image_url".to_string()))?,
            repository_name: self.repository_name,
            expected_stack_trace_depth: self.expected_stack_trace_depth,
            trigger_counts: self.trigger_counts,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_full() {
        let config = ConfigBuilder::new()
            .with_package_name("foo")
            .with_developer_name("Jane Doe")
            .with_github_handle("janedoe")
            .with_image_url("https://example.com/me.png")
            .with_repository_name("foo-rs")
            .with_stack_depth(3)
            .with_trigger_counts(vec![1, 10])
            .build()
            .unwrap();

        assert_eq!(config.package_name, "foo");
        assert_eq!(config.repository(), "foo-rs");
        assert_eq!(config.expected_stack_trace_depth, 3);
        assert_eq!(config.trigger_counts, vec![1, 10]);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new()
            .with_package_name("foo")
            .with_developer_name("Jane Doe")
            .with_github_handle("janedoe")
            .with_image_url("https://example.com/me.png")
            .build()
            .unwrap();

        assert_eq!(config.expected_stack_trace_depth, DEFAULT_STACK_DEPTH);
        assert_eq!(config.trigger_counts, DEFAULT_TRIGGER_COUNTS.to_vec());
        assert!(config.repository_name.is_none());
    }

    #[test]
    fn test_builder_missing_required_field() {
        let result = ConfigBuilder::new()
            .with_package_name("foo")
            .with_developer_name("Jane Doe")
            .with_github_handle("janedoe")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingField(field)) if field == "image_url"
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        let result = ConfigBuilder::new()
            .with_package_name("")
            .with_developer_name("Jane Doe")
            .with_github_handle("janedoe")
            .with_image_url("https://example.com/me.png")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
