use super::expr::{Expr, Fragment, to_expression};
use super::join::Join;
use super::traits::SqlFragment;
use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};
use crate::table::{SharedTable, Table, TableRef, share};
use crate::value::Value;

/// FROM source: either plain tables (implicit cross join) or one join chain.
#[derive(Debug, Clone)]
enum Source {
    Tables(Vec<SharedTable>),
    Join(Join),
}

#[derive(Debug, Clone)]
struct OrderItem {
    expr: String,
    desc: bool,
}

/// Structured SELECT statement builder.
///
/// # Example
/// ```rust
/// use sqlchain::{Select, SqlFragment};
///
/// let mut stmt = Select::new();
/// stmt.add_columns(["id", "name"])?
///     .add_source("users")?
///     .where_and_cmp("age", ">", 18)?
///     .add_order("name", false)?
///     .set_limit(0, 20);
/// assert_eq!(
///     stmt.render()?,
///     "select id, name from users where age > 18 order by name limit 0, 20"
/// );
/// # Ok::<(), sqlchain::SqlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Output expressions
    columns: Vec<String>,
    /// FROM source
    source: Option<Source>,
    /// WHERE predicate, created on first use
    predicate: Option<Expr>,
    /// GROUP BY expressions
    groups: Vec<String>,
    /// ORDER BY items
    orders: Vec<OrderItem>,
    /// (offset, count)
    limit: Option<(u64, u64)>,
}

fn non_empty(what: &str, expr: &str) -> SqlResult<()> {
    if expr.is_empty() {
        return Err(SqlError::invalid_argument(format!("{what} cannot be empty")));
    }
    Ok(())
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Columns ====================

    /// Append one output expression.
    pub fn add_column(&mut self, expr: &str) -> SqlResult<&mut Self> {
        non_empty("column", expr)?;
        self.columns.push(expr.to_string());
        Ok(self)
    }

    /// Append several output expressions. Nothing is added if any is empty.
    pub fn add_columns<I, S>(&mut self, exprs: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exprs = collect_non_empty("column", exprs)?;
        self.columns.extend(exprs);
        Ok(self)
    }

    // ==================== Source ====================

    /// Append a plain table to the FROM list.
    pub fn add_source(&mut self, table: impl TableRef + 'static) -> SqlResult<&mut Self> {
        match &mut self.source {
            None => self.source = Some(Source::Tables(vec![share(table)])),
            Some(Source::Tables(tables)) => tables.push(share(table)),
            Some(Source::Join(_)) => {
                return Err(SqlError::invalid_state(
                    "cannot add a table source after a join source was set",
                ));
            }
        }
        Ok(self)
    }

    /// Append several plain tables to the FROM list.
    pub fn add_sources<I, T>(&mut self, tables: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: TableRef + 'static,
    {
        if matches!(self.source, Some(Source::Join(_))) {
            return Err(SqlError::invalid_state(
                "cannot add a table source after a join source was set",
            ));
        }
        for table in tables {
            self.add_source(table)?;
        }
        Ok(self)
    }

    /// Use a join chain as the FROM source. No other source may exist.
    pub fn set_source(&mut self, join: Join) -> SqlResult<&mut Self> {
        match self.source {
            None => self.source = Some(Source::Join(join)),
            Some(Source::Tables(_)) => {
                return Err(SqlError::invalid_state(
                    "cannot set a join source after table sources were added",
                ));
            }
            Some(Source::Join(_)) => {
                return Err(SqlError::invalid_state("join source is already set"));
            }
        }
        Ok(self)
    }

    // ==================== WHERE ====================

    /// Append to the WHERE predicate with `and`.
    pub fn where_and(&mut self, fragment: impl Into<Fragment>) -> SqlResult<&mut Self> {
        let fragment = fragment.into();
        self.push_where(|p| p.and(fragment))
    }

    /// Append to the WHERE predicate with `or`.
    pub fn where_or(&mut self, fragment: impl Into<Fragment>) -> SqlResult<&mut Self> {
        let fragment = fragment.into();
        self.push_where(|p| p.or(fragment))
    }

    /// Append `column op value` to the WHERE predicate with `and`.
    pub fn where_and_cmp(
        &mut self,
        column: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        let fragment = to_expression(column, op, value)?;
        self.push_where(|p| p.and(fragment))
    }

    /// Append `column op value` to the WHERE predicate with `or`.
    pub fn where_or_cmp(
        &mut self,
        column: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        let fragment = to_expression(column, op, value)?;
        self.push_where(|p| p.or(fragment))
    }

    /// The predicate is only stored once the first append succeeded.
    fn push_where<F>(&mut self, append: F) -> SqlResult<&mut Self>
    where
        F: FnOnce(&mut Expr) -> SqlResult<&mut Expr>,
    {
        match &mut self.predicate {
            Some(predicate) => {
                append(predicate)?;
            }
            None => {
                let mut predicate = Expr::new();
                append(&mut predicate)?;
                self.predicate = Some(predicate);
            }
        }
        Ok(self)
    }

    // ==================== Grouping, ordering & limit ====================

    pub fn add_group(&mut self, expr: &str) -> SqlResult<&mut Self> {
        non_empty("group by expression", expr)?;
        self.groups.push(expr.to_string());
        Ok(self)
    }

    pub fn add_groups<I, S>(&mut self, exprs: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exprs = collect_non_empty("group by expression", exprs)?;
        self.groups.extend(exprs);
        Ok(self)
    }

    /// Append an ORDER BY item, `desc` when `descending`.
    pub fn add_order(&mut self, expr: &str, descending: bool) -> SqlResult<&mut Self> {
        non_empty("order by expression", expr)?;
        self.orders.push(OrderItem {
            expr: expr.to_string(),
            desc: descending,
        });
        Ok(self)
    }

    /// Append ascending ORDER BY items.
    pub fn add_orders<I, S>(&mut self, exprs: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exprs = collect_non_empty("order by expression", exprs)?;
        self.orders
            .extend(exprs.into_iter().map(|expr| OrderItem { expr, desc: false }));
        Ok(self)
    }

    /// Set `limit offset, count`. A later call replaces an earlier one.
    pub fn set_limit(&mut self, offset: u64, count: u64) -> &mut Self {
        self.limit = Some((offset, count));
        self
    }

    /// Render into a derived table: `(<select>) alias`.
    pub fn as_table(&self, alias: &str) -> SqlResult<Table> {
        non_empty("derived table alias", alias)?;
        Table::from_select(self.clone(), alias)
    }

    // ==================== SQL build ====================

    fn render_source(source: &Source, cfg: &RenderConfig) -> SqlResult<String> {
        match source {
            Source::Tables(tables) => Ok(tables
                .iter()
                .map(|t| t.render_with(cfg))
                .collect::<SqlResult<Vec<_>>>()?
                .join(", ")),
            Source::Join(join) => join.render_with(cfg),
        }
    }
}

fn collect_non_empty<I, S>(what: &str, exprs: I) -> SqlResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exprs
        .into_iter()
        .map(|expr| {
            let expr = expr.as_ref();
            non_empty(what, expr)?;
            Ok(expr.to_string())
        })
        .collect()
}

impl SqlFragment for Select {
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        if self.columns.is_empty() {
            return Err(SqlError::invalid_state("select has no columns"));
        }
        let Some(source) = &self.source else {
            return Err(SqlError::invalid_state("select has no source"));
        };

        let mut sql = format!(
            "{} {} {} {}",
            cfg.keyword("select"),
            self.columns.join(", "),
            cfg.keyword("from"),
            Self::render_source(source, cfg)?
        );

        if let Some(predicate) = &self.predicate {
            sql.push(' ');
            sql.push_str(&cfg.keyword("where"));
            sql.push(' ');
            sql.push_str(&predicate.render_with(cfg)?);
        }

        if !self.groups.is_empty() {
            sql.push(' ');
            sql.push_str(&cfg.keyword("group by"));
            sql.push(' ');
            sql.push_str(&self.groups.join(", "));
        }

        if !self.orders.is_empty() {
            let desc = cfg.keyword("desc");
            let orders: Vec<String> = self
                .orders
                .iter()
                .map(|o| {
                    if o.desc {
                        format!("{} {desc}", o.expr)
                    } else {
                        o.expr.clone()
                    }
                })
                .collect();
            sql.push(' ');
            sql.push_str(&cfg.keyword("order by"));
            sql.push(' ');
            sql.push_str(&orders.join(", "));
        }

        if let Some((offset, count)) = self.limit {
            sql.push_str(&format!(" {} {offset}, {count}", cfg.keyword("limit")));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlchain.render", sql = %sql, "rendered select");

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_where_leaves_no_predicate() {
        let mut stmt = Select::new();
        assert!(stmt.where_and("").unwrap_err().is_invalid_argument());
        assert!(stmt.where_or(Expr::new()).unwrap_err().is_invalid_argument());
        assert!(stmt.where_and_cmp("", "=", 1).unwrap_err().is_invalid_argument());
        assert!(stmt
            .where_or_cmp("id", "in", Vec::<i64>::new())
            .unwrap_err()
            .is_invalid_argument());
        assert!(stmt.predicate.is_none());

        stmt.where_and("a = 1").unwrap();
        assert!(stmt.where_or("").unwrap_err().is_invalid_argument());
        assert_eq!(stmt.predicate.as_ref().map(Expr::len), Some(1));
    }
}
