//! Join chain builder.

use super::chain::{Chain, Connector};
use super::expr::Expr;
use super::traits::SqlFragment;
use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};
use crate::table::{SharedTable, TableRef, share};

#[derive(Debug, Clone)]
struct JoinItem {
    table: SharedTable,
    on: Option<Expr>,
}

/// A source table followed by one or more `inner join` / `left join`
/// tables, each with an optional `on` predicate.
///
/// # Example
/// ```rust
/// use sqlchain::{Expr, Join, SqlFragment, Table};
///
/// let mut on = Expr::new();
/// on.and("u.id = o.user_id")?;
///
/// let mut join = Join::from_table(Table::new("users").alias("u"));
/// join.inner_join_on(Table::new("orders").alias("o"), on)?;
/// assert_eq!(join.render()?, "users u inner join orders o on u.id = o.user_id");
/// # Ok::<(), sqlchain::SqlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Join {
    chain: Chain<JoinItem>,
}

impl Join {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a join chain starting at `table`.
    pub fn from_table(table: impl TableRef + 'static) -> Self {
        Self {
            chain: Chain::with_head(JoinItem {
                table: share(table),
                on: None,
            }),
        }
    }

    /// Set the source table. The chain must be empty.
    pub fn init(&mut self, table: impl TableRef + 'static) -> SqlResult<&mut Self> {
        self.chain.init(JoinItem {
            table: share(table),
            on: None,
        })?;
        Ok(self)
    }

    /// Append `inner join table`.
    pub fn inner_join(&mut self, table: impl TableRef + 'static) -> SqlResult<&mut Self> {
        self.join(Connector::InnerJoin, share(table), None)
    }

    /// Append `inner join table on predicate`.
    pub fn inner_join_on(
        &mut self,
        table: impl TableRef + 'static,
        on: Expr,
    ) -> SqlResult<&mut Self> {
        self.join(Connector::InnerJoin, share(table), Some(on))
    }

    /// Append `left join table`.
    pub fn left_join(&mut self, table: impl TableRef + 'static) -> SqlResult<&mut Self> {
        self.join(Connector::LeftJoin, share(table), None)
    }

    /// Append `left join table on predicate`.
    pub fn left_join_on(
        &mut self,
        table: impl TableRef + 'static,
        on: Expr,
    ) -> SqlResult<&mut Self> {
        self.join(Connector::LeftJoin, share(table), Some(on))
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of tables in the chain, source included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    fn join(
        &mut self,
        connector: Connector,
        table: SharedTable,
        on: Option<Expr>,
    ) -> SqlResult<&mut Self> {
        if on.as_ref().is_some_and(Expr::is_empty) {
            return Err(SqlError::invalid_argument("join predicate cannot be empty"));
        }
        self.chain.append(connector, JoinItem { table, on })?;
        Ok(self)
    }
}

impl SqlFragment for Join {
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        self.chain.render(cfg, 2, "join", |item, cfg| {
            let mut s = item.table.render_with(cfg)?;
            if let Some(on) = &item.on {
                s.push(' ');
                s.push_str(&cfg.keyword("on"));
                s.push(' ');
                s.push_str(&on.render_with(cfg)?);
            }
            Ok(s)
        })
    }
}
