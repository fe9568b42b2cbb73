//! Banner rendering
//!
//! The display surface is injected as a capability so embedders and
//! tests can substitute their own. The provided [`NotebookRenderer`]
//! speaks the interactive kernel's rich-display convention on stdout.

use crate::config::BannerConfig;
use crate::error::RenderError;

use std::io::{self, Write};

/// Rich-display surface for HTML fragments
pub trait Renderer: Send + Sync {
    /// Place an HTML fragment on the display surface
    fn render_html(&self, html: &str) -> Result<(), RenderError>;

    /// Surface name for identification
    fn name(&self) -> &str;
}

/// Renderer for interactive notebook kernels
///
/// Emits the rich-display framing understood by the Jupyter front-end
/// bridge: everything between `EVCXR_BEGIN_CONTENT <mime>` and
/// `EVCXR_END_CONTENT` on stdout is rendered as that MIME type.
#[derive(Debug, Default)]
pub struct NotebookRenderer;

impl NotebookRenderer {
    /// Create a new notebook renderer
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for NotebookRenderer {
    fn render_html(&self, html: &str) -> Result<(), RenderError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(handle, "{}", html)?;
        writeln!(handle, "EVCXR_END_CONTENT")?;
        handle.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "notebook"
    }
}

/// Build the banner HTML for the given configuration
///
/// `long_time_user` adds the acknowledgement line shown once the count
/// is past the first trigger threshold.
pub fn banner_html(config: &BannerConfig, long_time_user: bool) -> String {
    let long_time_line = if long_time_user {
        "<span>I hope my work has saved you some time!</span><br/>\n            "
    } else {
        ""
    };

    format!(
        r#"<style>
    .support-banner-box {{
        position: relative;
        display: table-cell;
        vertical-align: middle;
        width: 100%;
        height: 10em;
        padding: 1em;
        padding-left: 11em;
        background-color: #f7f7f7;
        border: 1px solid #cfcfcf;
        border-radius: 2px;
    }}
    .support-banner-box img {{
        position: absolute;
        height: 9em;
        width: 9em;
        left: 0.5em;
        top: 0.5em;
        border-radius: 1em;
    }}
</style>
<div class="support-banner-box">
    <img src="{image_url}" />
    <p>
    <b>Hi!</b><br/>
    <span>I am the author of
    <a href="https://github.com/{github_handle}/{repository_name}" target="_blank">
        {package_name}
    </a>, which you use in this Notebook.
    </span><br/>
    {long_time_line}<span>I love to code, but I also need coffee.</span>
    <a href="https://github.com/sponsors/{github_handle}" target="_blank">
        Please sponsor me on GitHub ❤️
    </a><br/>
    <i>Good luck in your coding 🍀!</i>
    <br/>
    <i>- {developer_name}</i>
    </p>
</div>"#,
        image_url = config.image_url,
        github_handle = config.github_handle,
        repository_name = config.repository(),
        package_name = config.package_name,
        long_time_line = long_time_line,
        developer_name = config.developer_name,
    )
}
