//! Mock implementations for testing
//!
//! Provides a capturing renderer for unit testing without a live
//! display surface.

use crate::error::RenderError;
use crate::render::Renderer;

use std::sync::Mutex;

/// Renderer that records every fragment instead of displaying it
#[derive(Debug, Default)]
pub struct MockRenderer {
    rendered: Mutex<Vec<String>>,
    fail: bool,
}

impl MockRenderer {
    /// Create a new capturing renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make every render call fail
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Fragments rendered so far, oldest first
    pub fn rendered(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }

    /// Number of fragments rendered
    pub fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }
}

impl Renderer for MockRenderer {
    fn render_html(&self, html: &str) -> Result<(), RenderError> {
        if self.fail {
            return Err(RenderError::Unavailable("mock failure".to_string()));
        }
        self.rendered.lock().unwrap().push(html.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_captures_fragments() {
        let renderer = MockRenderer::new();
        renderer.render_html("<b>hi</b>").unwrap();
        assert_eq!(renderer.render_count(), 1);
        assert_eq!(renderer.rendered(), vec!["<b>hi</b>".to_string()]);
    }

    #[test]
    fn test_mock_failure_mode() {
        let renderer = MockRenderer::new().with_failure();
        assert!(matches!(
            renderer.render_html("<b>hi</b>"),
            Err(RenderError::Unavailable(_))
        ));
        assert_eq!(renderer.render_count(), 0);
    }
}
