//! Table references consumed by [`Join`](crate::Join) and
//! [`Select`](crate::Select).

use std::fmt;
use std::sync::Arc;

use crate::builder::{Select, SqlFragment, Union};
use crate::config::RenderConfig;
use crate::error::SqlResult;

/// Anything that renders to a SQL source expression (a table name, an
/// aliased table, a derived table...).
///
/// Rendering must be stable: the builders may call it any number of times.
pub trait TableRef: fmt::Debug + Send + Sync {
    fn render(&self) -> String;

    /// Render under the caller's configuration. Plain names ignore it.
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        let _ = cfg;
        Ok(self.render())
    }
}

impl TableRef for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl TableRef for &'static str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

/// Shared handle to a table reference.
pub type SharedTable = Arc<dyn TableRef>;

pub(crate) fn share(table: impl TableRef + 'static) -> SharedTable {
    Arc::new(table)
}

#[derive(Debug, Clone)]
enum Statement {
    Select(Select),
    Union(Union),
}

impl Statement {
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        match self {
            Statement::Select(s) => s.render_with(cfg),
            Statement::Union(u) => u.render_with(cfg),
        }
    }
}

#[derive(Debug, Clone)]
enum TableSource {
    Name(String),
    /// Already rendered statement text.
    Derived(String),
    /// Builder rendered under the outer configuration. `sql` holds the
    /// default rendering, checked when the table was created.
    Statement { stmt: Box<Statement>, sql: String },
}

/// Table reference with an optional alias.
///
/// # Example
///
/// ```rust
/// use sqlchain::{Table, TableRef};
///
/// assert_eq!(Table::new("users").render(), "users");
/// assert_eq!(Table::new("users").alias("u").render(), "users u");
/// assert_eq!(Table::derived("select 1", "t").render(), "(select 1) t");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    source: TableSource,
    alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Name(name.into()),
            alias: None,
        }
    }

    /// Derived table from already rendered statement text.
    pub fn derived(sql: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Derived(sql.into()),
            alias: Some(alias.into()),
        }
    }

    pub(crate) fn from_select(select: Select, alias: &str) -> SqlResult<Self> {
        Self::from_statement(Statement::Select(select), alias)
    }

    pub(crate) fn from_union(union: Union, alias: &str) -> SqlResult<Self> {
        Self::from_statement(Statement::Union(union), alias)
    }

    fn from_statement(stmt: Statement, alias: &str) -> SqlResult<Self> {
        let sql = stmt.render_with(&RenderConfig::default())?;
        Ok(Self {
            source: TableSource::Statement {
                stmt: Box::new(stmt),
                sql,
            },
            alias: Some(alias.to_string()),
        })
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    fn with_alias(&self, mut s: String) -> String {
        if let Some(alias) = &self.alias {
            s.push(' ');
            s.push_str(alias);
        }
        s
    }
}

impl TableRef for Table {
    fn render(&self) -> String {
        let s = match &self.source {
            TableSource::Name(name) => name.clone(),
            TableSource::Derived(sql) | TableSource::Statement { sql, .. } => format!("({sql})"),
        };
        self.with_alias(s)
    }

    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        match &self.source {
            TableSource::Statement { stmt, .. } => {
                Ok(self.with_alias(format!("({})", stmt.render_with(cfg)?)))
            }
            _ => Ok(self.render()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeywordCase, QuoteStyle};

    #[test]
    fn test_derived_statement_follows_config() {
        let mut inner = Select::new();
        inner
            .add_column("id")
            .unwrap()
            .add_source("users")
            .unwrap()
            .where_and_cmp("name", "=", "o'neil")
            .unwrap();
        let table = Table::from_select(inner, "t").unwrap();

        assert_eq!(
            table.render(),
            "(select id from users where name = 'o'neil') t"
        );
        let cfg = RenderConfig::new()
            .with_keyword_case(KeywordCase::Upper)
            .with_quote_style(QuoteStyle::Escape);
        assert_eq!(
            table.render_with(&cfg).unwrap(),
            "(SELECT id FROM users WHERE name = 'o''neil') t"
        );
    }

    #[test]
    fn test_plain_tables_ignore_config() {
        let cfg = RenderConfig::new().with_keyword_case(KeywordCase::Upper);
        assert_eq!(Table::new("users").alias("u").render_with(&cfg).unwrap(), "users u");
        assert_eq!("orders".render_with(&cfg).unwrap(), "orders");
    }
}
