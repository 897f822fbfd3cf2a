use super::chain::{Chain, Connector};
use super::select::Select;
use super::traits::SqlFragment;
use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};
use crate::table::Table;

/// Two or more SELECT statements combined with `union` / `union all`.
#[derive(Debug, Clone, Default)]
pub struct Union {
    chain: Chain<Select>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a union starting at `select`.
    pub fn from_select(select: Select) -> Self {
        Self {
            chain: Chain::with_head(select),
        }
    }

    /// Set the first statement. The union must be empty.
    pub fn init(&mut self, select: Select) -> SqlResult<&mut Self> {
        self.chain.init(select)?;
        Ok(self)
    }

    /// Append with `union`.
    pub fn union(&mut self, select: Select) -> SqlResult<&mut Self> {
        self.chain.append(Connector::Union, select)?;
        Ok(self)
    }

    /// Append with `union all`.
    pub fn union_all(&mut self, select: Select) -> SqlResult<&mut Self> {
        self.chain.append(Connector::UnionAll, select)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Render into a derived table: `(<union>) alias`.
    pub fn as_table(&self, alias: &str) -> SqlResult<Table> {
        if alias.is_empty() {
            return Err(SqlError::invalid_argument(
                "derived table alias cannot be empty",
            ));
        }
        Table::from_union(self.clone(), alias)
    }
}

impl SqlFragment for Union {
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        let sql = self
            .chain
            .render(cfg, 2, "union", |select, cfg| select.render_with(cfg))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlchain.render", sql = %sql, "rendered union");

        Ok(sql)
    }
}
