use crate::config::RenderConfig;
use crate::error::SqlResult;

/// Base trait for SQL fragment builders.
///
/// Rendering only reads builder state: a builder may be rendered any number
/// of times and always yields the same text for the same configuration.
pub trait SqlFragment {
    /// Render with an explicit configuration.
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String>;

    /// Render with the default configuration.
    fn render(&self) -> SqlResult<String> {
        self.render_with(&RenderConfig::default())
    }
}
