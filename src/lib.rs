//! support-banner - one-time "support the developer" notices for
//! notebook imports
//!
//! Shows an HTML banner the first few times a package is imported
//! directly inside an interactive notebook session, with a link to the
//! author's repository and GitHub Sponsors page.
//!
//! Detection is a documented heuristic, not a guarantee: the stack
//! frame at a fixed index must resolve to the kernel launcher file
//! (`ipykernel_launcher.py`). It cannot tell a notebook apart from any
//! other runtime using that launcher, and an import routed through a
//! wrapper module shifts the effective depth. Other interactive
//! front-ends are unsupported. Per-package import counts persist in a
//! single JSON file with no locking; concurrent processes race with
//! last-writer-wins, which is acceptable for a best-effort banner.
//!
//! # Modules
//!
//! - [`config`]: Banner parameters and builder
//! - [`counter`]: Persistent per-package import counts
//! - [`error`]: Error types
//! - [`render`]: Display-surface capability and HTML template
//! - [`service`]: The banner check itself
//! - [`stack`]: Call-stack capture and the notebook heuristic

pub mod config;
pub mod counter;
pub mod error;
pub mod render;
pub mod service;
pub mod stack;

#[cfg(test)]
pub mod mock;

pub use config::{BannerConfig, ConfigBuilder};
pub use counter::CounterStore;
pub use error::{BannerError, Result};
pub use render::{NotebookRenderer, Renderer};
pub use service::{maybe_show_support_banner, BannerOutcome, BannerService};
pub use stack::{CallStack, KERNEL_LAUNCHER_FILE};
