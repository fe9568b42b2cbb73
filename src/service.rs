//! The banner check
//!
//! Runs the four steps in order: context check, counter record,
//! trigger check, render. Counting and rendering are decoupled: every
//! qualifying call advances the counter, whether or not it lands on a
//! trigger count.

use crate::config::BannerConfig;
use crate::counter::CounterStore;
use crate::error::Result;
use crate::render::{banner_html, NotebookRenderer, Renderer};
use crate::stack::{CallStack, StackVerdict};

/// What a single call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerOutcome {
    /// Stack had fewer frames than the configured depth requires
    ShallowStack,
    /// Designated frame was not the notebook kernel launcher
    NotNotebook,
    /// Import recorded; count is not a trigger, nothing rendered
    Recorded { count: u64 },
    /// Import recorded and the banner rendered
    Shown { count: u64, long_time_user: bool },
}

impl BannerOutcome {
    /// Whether the banner was rendered on this call
    pub fn is_shown(&self) -> bool {
        matches!(self, BannerOutcome::Shown { .. })
    }
}

/// Service wiring configuration, counter store, and display surface
pub struct BannerService<R: Renderer> {
    config: BannerConfig,
    store: CounterStore,
    renderer: R,
}

impl<R: Renderer> BannerService<R> {
    /// Create a new banner service
    ///
    /// # Errors
    /// Returns a configuration error if the config fails validation.
    pub fn new(config: BannerConfig, store: CounterStore, renderer: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            renderer,
        })
    }

    /// Capture the current call stack and run the banner check
    pub fn maybe_show(&self) -> Result<BannerOutcome> {
        let stack = CallStack::capture();
        self.maybe_show_with_stack(&stack)
    }

    /// Run the banner check against an explicit call stack
    ///
    /// Non-qualifying contexts return silently with no counter
    /// mutation; qualifying calls record the import and render only
    /// when the new count is one of the configured triggers.
    pub fn maybe_show_with_stack(&self, stack: &CallStack) -> Result<BannerOutcome> {
        let depth = self.config.expected_stack_trace_depth;

        let verdict = stack.classify(depth);
        if verdict != StackVerdict::NotebookImport {
            log::debug!(
                "Context check for {}: {} (frame {}, {} frames)",
                self.config.package_name,
                verdict,
                depth,
                stack.len()
            );
            return Ok(match verdict {
                StackVerdict::TooShallow => BannerOutcome::ShallowStack,
                _ => BannerOutcome::NotNotebook,
            });
        }

        let count = self.store.record_import(&self.config.package_name)?;

        if !self.config.is_trigger(count) {
            return Ok(BannerOutcome::Recorded { count });
        }

        let long_time_user = self.config.is_long_time_user(count);
        let html = banner_html(&self.config, long_time_user);
        self.renderer.render_html(&html)?;

        log::info!(
            "Support banner shown for {} (import #{})",
            self.config.package_name,
            count
        );
        Ok(BannerOutcome::Shown {
            count,
            long_time_user,
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// The counter store in use
    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    /// The injected renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Show the support banner when warranted
///
/// Convenience wrapper around [`BannerService`]: captures the current
/// call stack, uses the default counter location and the notebook
/// renderer, and discards the outcome.
pub fn maybe_show_support_banner(config: &BannerConfig) -> Result<()> {
    let service = BannerService::new(
        config.clone(),
        CounterStore::open_default(),
        NotebookRenderer::new(),
    )?;
    service.maybe_show().map(|_| ())
}
