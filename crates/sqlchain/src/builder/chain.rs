//! Append-only chain of connected items shared by every builder.

use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};

/// Keyword placed between two chain items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Connector {
    And,
    Or,
    InnerJoin,
    LeftJoin,
    Union,
    UnionAll,
}

impl Connector {
    fn keyword(self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
            Connector::InnerJoin => "inner join",
            Connector::LeftJoin => "left join",
            Connector::Union => "union",
            Connector::UnionAll => "union all",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Link<T> {
    /// `None` only for the head.
    connector: Option<Connector>,
    item: T,
}

/// Ordered item sequence. Either empty, or a head followed by links that
/// all carry a connector.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chain<T> {
    links: Vec<Link<T>>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self { links: Vec::new() }
    }
}

impl<T> Chain<T> {
    /// Chain holding only `item` as its head.
    pub(crate) fn with_head(item: T) -> Self {
        Self {
            links: vec![Link {
                connector: None,
                item,
            }],
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    /// Set the head of an empty chain.
    pub(crate) fn init(&mut self, item: T) -> SqlResult<()> {
        if !self.is_empty() {
            return Err(SqlError::invalid_state("chain is already initialized"));
        }
        self.links.push(Link {
            connector: None,
            item,
        });
        Ok(())
    }

    /// Append after the current tail. The chain must be initialized.
    pub(crate) fn append(&mut self, connector: Connector, item: T) -> SqlResult<()> {
        if self.is_empty() {
            return Err(SqlError::invalid_state(format!(
                "cannot append '{}' before the chain is initialized",
                connector.keyword()
            )));
        }
        self.links.push(Link {
            connector: Some(connector),
            item,
        });
        Ok(())
    }

    /// `init` on an empty chain, `append` otherwise.
    pub(crate) fn append_or_init(&mut self, connector: Connector, item: T) {
        let connector = (!self.is_empty()).then_some(connector);
        self.links.push(Link { connector, item });
    }

    /// Concatenate items in order, each non-head item prefixed by its
    /// space padded connector keyword.
    pub(crate) fn render<F>(
        &self,
        cfg: &RenderConfig,
        min_len: usize,
        what: &str,
        mut render_item: F,
    ) -> SqlResult<String>
    where
        F: FnMut(&T, &RenderConfig) -> SqlResult<String>,
    {
        if self.len() < min_len {
            return Err(SqlError::invalid_state(format!(
                "{what} needs at least {min_len} item(s) to render, has {}",
                self.len()
            )));
        }

        let mut s = String::new();
        for link in &self.links {
            if let Some(connector) = link.connector {
                s.push(' ');
                s.push_str(&cfg.keyword(connector.keyword()));
                s.push(' ');
            }
            s.push_str(&render_item(&link.item, cfg)?);
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_strs(chain: &Chain<&'static str>, min_len: usize) -> SqlResult<String> {
        chain.render(&RenderConfig::default(), min_len, "test chain", |s, _| {
            Ok(s.to_string())
        })
    }

    #[test]
    fn test_append_requires_head() {
        let mut chain = Chain::default();
        let err = chain.append(Connector::And, "a").unwrap_err();
        assert!(err.is_invalid_state());
        assert!(chain.is_empty());
    }

    #[test]
    fn test_init_only_once() {
        let mut chain = Chain::default();
        chain.init("a").unwrap();
        assert!(chain.init("b").unwrap_err().is_invalid_state());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_append_or_init_omits_head_connector() {
        let mut chain = Chain::default();
        chain.append_or_init(Connector::Or, "a");
        chain.append_or_init(Connector::Or, "b");
        chain.append_or_init(Connector::And, "c");
        assert_eq!(render_strs(&chain, 1).unwrap(), "a or b and c");
    }

    #[test]
    fn test_with_head() {
        let mut chain = Chain::with_head("a");
        assert_eq!(chain.len(), 1);
        assert!(chain.init("b").unwrap_err().is_invalid_state());
        chain.append(Connector::LeftJoin, "b").unwrap();
        assert_eq!(render_strs(&chain, 2).unwrap(), "a left join b");
    }

    #[test]
    fn test_min_len() {
        let mut chain = Chain::default();
        assert!(render_strs(&chain, 1).unwrap_err().is_invalid_state());
        chain.init("a").unwrap();
        assert!(render_strs(&chain, 2).unwrap_err().is_invalid_state());
        chain.append(Connector::UnionAll, "b").unwrap();
        assert_eq!(render_strs(&chain, 2).unwrap(), "a union all b");
    }
}
