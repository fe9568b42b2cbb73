//! Banner configuration
//!
//! Caller-supplied parameters controlling detection and rendering.
//! There is no config file; callers construct a [`BannerConfig`] in
//! code (or deserialize one themselves) and hand it to the service.

pub mod builder;

pub use builder::ConfigBuilder;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default stack frame index inspected for the notebook check
pub const DEFAULT_STACK_DEPTH: usize = 2;

/// Default cumulative import counts at which the banner is shown
pub const DEFAULT_TRIGGER_COUNTS: [u64; 4] = [5, 100, 1000, 5000];

/// Banner parameters
///
/// Bundles everything one call needs: who to credit, where to link,
/// and when to show the banner. Scoped to a single call, never
/// persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Name of the package to ask support for
    pub package_name: String,
    /// Name of the developer to display
    pub developer_name: String,
    /// GitHub handle of the developer
    pub github_handle: String,
    /// URL of the image shown in the banner
    pub image_url: String,
    /// Repository to link; defaults to the package name
    #[serde(default)]
    pub repository_name: Option<String>,
    /// Stack frame index that must point at the notebook kernel launcher
    #[serde(default = "default_stack_depth")]
    pub expected_stack_trace_depth: usize,
    /// Cumulative import counts at which the banner is shown
    ///
    /// The first element is treated as the smallest threshold; counts
    /// beyond it add the long-time-user line to the banner.
    #[serde(default = "default_trigger_counts")]
    pub trigger_counts: Vec<u64>,
}

fn default_stack_depth() -> usize {
    DEFAULT_STACK_DEPTH
}

fn default_trigger_counts() -> Vec<u64> {
    DEFAULT_TRIGGER_COUNTS.to_vec()
}

impl BannerConfig {
    /// Create a configuration with the default depth and triggers
    pub fn new(
        package_name: impl Into<String>,
        developer_name: impl Into<String>,
        github_handle: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            developer_name: developer_name.into(),
            github_handle: github_handle.into(),
            image_url: image_url.into(),
            repository_name: None,
            expected_stack_trace_depth: DEFAULT_STACK_DEPTH,
            trigger_counts: DEFAULT_TRIGGER_COUNTS.to_vec(),
        }
    }

    /// Start building a configuration field by field
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Repository name to link, falling back to the package name
    pub fn repository(&self) -> &str {
        self.repository_name.as_deref().unwrap_or(&self.package_name)
    }

    /// Whether a cumulative count is one of the trigger counts
    pub fn is_trigger(&self, count: u64) -> bool {
        self.trigger_counts.contains(&count)
    }

    /// Whether a count is past the first (smallest) trigger
    pub fn is_long_time_user(&self, count: u64) -> bool {
        self.trigger_counts.first().map_or(false, |first| count > *first)
    }

    /// Validate field contents
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for empty required strings
    /// or non-positive trigger counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_non_empty("package_name", &self.package_name)?;
        Self::require_non_empty("developer_name", &self.developer_name)?;
        Self::require_non_empty("github_handle", &self.github_handle)?;
        Self::require_non_empty("image_url", &self.image_url)?;

        if self.trigger_counts.iter().any(|&count| count == 0) {
            return Err(ConfigError::InvalidValue {
                key: "trigger_counts".to_string(),
                message: "counts must be positive".to_string(),
            });
        }

        Ok(())
    }

    fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
