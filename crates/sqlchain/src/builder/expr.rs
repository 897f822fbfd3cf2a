//! Boolean expression builder for `where` and `on` clauses.

use super::chain::{Chain, Connector};
use super::traits::SqlFragment;
use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};
use crate::value::{Scalar, Value};

/// One item of an [`Expr`] chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Raw SQL text, inserted verbatim.
    ///
    /// **Warning**: no escaping of any kind is applied.
    Text(String),
    /// `column op literal`, rendered lazily so the literal follows the
    /// render configuration.
    Compare {
        column: String,
        op: String,
        value: Scalar,
    },
    /// Nested expression, rendered parenthesized.
    Group(Expr),
}

impl Fragment {
    fn validate(&self) -> SqlResult<()> {
        match self {
            Fragment::Text(s) if s.is_empty() => {
                Err(SqlError::invalid_argument("expression text cannot be empty"))
            }
            Fragment::Compare { column, op, .. } if column.is_empty() || op.is_empty() => Err(
                SqlError::invalid_argument("comparison needs a column and an operator"),
            ),
            Fragment::Compare { column, value, .. } if !value.is_finite() => Err(
                SqlError::invalid_argument(format!("value for '{column}' is not finite")),
            ),
            Fragment::Group(e) if e.is_empty() => Err(SqlError::invalid_argument(
                "nested expression cannot be empty",
            )),
            _ => Ok(()),
        }
    }

    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        match self {
            Fragment::Text(s) => Ok(s.clone()),
            Fragment::Compare { column, op, value } => Ok(format!(
                "{column} {op} {}",
                value.to_literal(cfg.quote_style)
            )),
            Fragment::Group(e) => Ok(format!("({})", e.render_with(cfg)?)),
        }
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

impl From<Expr> for Fragment {
    fn from(e: Expr) -> Self {
        Fragment::Group(e)
    }
}

/// Convert `(column, op, value)` into a fragment.
///
/// A scalar becomes a single [`Fragment::Compare`]. A list fans out into a
/// new expression that ORs one comparison per element, returned as
/// [`Fragment::Group`].
///
/// # Example
/// ```rust
/// use sqlchain::{to_expression, Fragment, SqlFragment};
///
/// let Fragment::Group(ids) = to_expression("id", "=", [1, 2, 3])? else {
///     unreachable!()
/// };
/// assert_eq!(ids.render()?, "id = 1 or id = 2 or id = 3");
/// # Ok::<(), sqlchain::SqlError>(())
/// ```
pub fn to_expression(column: &str, op: &str, value: impl Into<Value>) -> SqlResult<Fragment> {
    if column.is_empty() {
        return Err(SqlError::invalid_argument("column cannot be empty"));
    }
    if op.is_empty() {
        return Err(SqlError::invalid_argument("operator cannot be empty"));
    }

    match value.into() {
        Value::Scalar(value) => {
            if !value.is_finite() {
                return Err(SqlError::invalid_argument(format!(
                    "value for '{column}' is not finite"
                )));
            }
            Ok(Fragment::Compare {
                column: column.to_string(),
                op: op.to_string(),
                value,
            })
        }
        Value::List(values) => {
            if values.is_empty() {
                return Err(SqlError::invalid_argument(format!(
                    "value list for '{column}' cannot be empty"
                )));
            }
            let mut group = Expr::new();
            for value in values {
                group.or_cmp(column, op, value)?;
            }
            Ok(Fragment::Group(group))
        }
    }
}

/// A chain of fragments joined by `and` / `or`.
///
/// Connectors are applied strictly left to right; nest an [`Expr`] to
/// group.
///
/// # Example
/// ```rust
/// use sqlchain::{Expr, SqlFragment};
///
/// let mut role = Expr::new();
/// role.or_cmp("role", "=", "admin")?.or_cmp("role", "=", "owner")?;
///
/// let mut expr = Expr::new();
/// expr.and("deleted_at is null")?.and(role)?.and_cmp("age", ">=", 18)?;
/// assert_eq!(
///     expr.render()?,
///     "deleted_at is null and (role = 'admin' or role = 'owner') and age >= 18"
/// );
/// # Ok::<(), sqlchain::SqlError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    chain: Chain<Fragment>,
}

impl Expr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first fragment. The expression must be empty.
    pub fn init(&mut self, fragment: impl Into<Fragment>) -> SqlResult<&mut Self> {
        let fragment = fragment.into();
        fragment.validate()?;
        self.chain.init(fragment)?;
        Ok(self)
    }

    /// Append with `and` (or set the head when empty).
    pub fn and(&mut self, fragment: impl Into<Fragment>) -> SqlResult<&mut Self> {
        self.push(Connector::And, fragment.into())
    }

    /// Append with `or` (or set the head when empty).
    pub fn or(&mut self, fragment: impl Into<Fragment>) -> SqlResult<&mut Self> {
        self.push(Connector::Or, fragment.into())
    }

    /// Append `column op value` with `and`. See [`to_expression`].
    pub fn and_cmp(
        &mut self,
        column: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        let fragment = to_expression(column, op, value)?;
        self.push(Connector::And, fragment)
    }

    /// Append `column op value` with `or`. See [`to_expression`].
    pub fn or_cmp(
        &mut self,
        column: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        let fragment = to_expression(column, op, value)?;
        self.push(Connector::Or, fragment)
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of top-level fragments.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    fn push(&mut self, connector: Connector, fragment: Fragment) -> SqlResult<&mut Self> {
        fragment.validate()?;
        self.chain.append_or_init(connector, fragment);
        Ok(self)
    }
}

impl SqlFragment for Expr {
    fn render_with(&self, cfg: &RenderConfig) -> SqlResult<String> {
        self.chain
            .render(cfg, 1, "expression", |fragment, cfg| fragment.render_with(cfg))
    }
}
