use serde::Deserialize;
use std::borrow::Cow;

use crate::error::SqlResult;

/// Letter case for the keywords the builders emit.
///
/// User supplied text (columns, operators, raw fragments, table names) is
/// never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    #[default]
    Lower,
    Upper,
}

/// How text literals produced by value conversion are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Wrap in single quotes and leave embedded quotes alone.
    ///
    /// **Warning**: untrusted input containing `'` can break out of the
    /// literal. Only feed trusted values through the comparison helpers in
    /// this mode.
    #[default]
    Verbatim,
    /// Wrap in single quotes and double every embedded `'`.
    Escape,
}

/// Configuration for rendering builders to SQL text.
///
/// The default renders lowercase keywords and unescaped literals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Keyword letter case.
    pub keyword_case: KeywordCase,
    /// Literal quoting mode.
    pub quote_style: QuoteStyle,
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML document.
    ///
    /// ```rust
    /// use sqlchain::{KeywordCase, QuoteStyle, RenderConfig};
    ///
    /// let cfg = RenderConfig::from_toml_str(
    ///     "keyword_case = \"upper\"\nquote_style = \"escape\"",
    /// )?;
    /// assert_eq!(cfg.keyword_case, KeywordCase::Upper);
    /// assert_eq!(cfg.quote_style, QuoteStyle::Escape);
    /// # Ok::<(), sqlchain::SqlError>(())
    /// ```
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Set the keyword case.
    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    /// Set the literal quoting mode.
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Apply the keyword case to a builder keyword.
    pub(crate) fn keyword(&self, kw: &'static str) -> Cow<'static, str> {
        match self.keyword_case {
            KeywordCase::Lower => Cow::Borrowed(kw),
            KeywordCase::Upper => Cow::Owned(kw.to_ascii_uppercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RenderConfig::new();
        assert_eq!(cfg.keyword_case, KeywordCase::Lower);
        assert_eq!(cfg.quote_style, QuoteStyle::Verbatim);
        assert_eq!(cfg.keyword("group by"), "group by");
    }

    #[test]
    fn test_upper_keywords() {
        let cfg = RenderConfig::new().with_keyword_case(KeywordCase::Upper);
        assert_eq!(cfg.keyword("union all"), "UNION ALL");
    }

    #[test]
    fn test_toml_partial_document() {
        let cfg = RenderConfig::from_toml_str("quote_style = \"escape\"").unwrap();
        assert_eq!(cfg.keyword_case, KeywordCase::Lower);
        assert_eq!(cfg.quote_style, QuoteStyle::Escape);

        let cfg = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, RenderConfig::default());
    }

    #[test]
    fn test_toml_bad_value() {
        let err = RenderConfig::from_toml_str("keyword_case = \"title\"").unwrap_err();
        assert!(matches!(err, crate::SqlError::Config(_)));
    }
}
