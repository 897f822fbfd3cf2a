//! # sqlchain
//!
//! Build dynamic SQL text from composable fragments instead of ad-hoc
//! string concatenation.
//!
//! ## Builders
//!
//! - [`Expr`]: `and` / `or` predicate chains for WHERE and ON clauses
//! - [`Join`]: `inner join` / `left join` chains
//! - [`Select`]: a full SELECT statement
//! - [`Union`]: `union` / `union all` over statements
//!
//! Builders are append-only and render lazily: nothing is assembled until
//! [`SqlFragment::render`] is called, and a builder can be rendered (or
//! cloned into a parent) any number of times.
//!
//! ```rust
//! use sqlchain::prelude::*;
//!
//! let mut on = Expr::new();
//! on.and("u.id = o.user_id")?;
//!
//! let mut source = Join::from_table(Table::new("users").alias("u"));
//! source.left_join_on(Table::new("orders").alias("o"), on)?;
//!
//! let mut stmt = Select::new();
//! stmt.add_columns(["u.id", "count(o.id)"])?
//!     .set_source(source)?
//!     .where_and_cmp("u.status", "=", ["active", "trial"])?
//!     .add_group("u.id")?
//!     .add_order("count(o.id)", true)?;
//!
//! assert_eq!(
//!     stmt.render()?,
//!     "select u.id, count(o.id) from users u left join orders o on u.id = o.user_id \
//!      where (u.status = 'active' or u.status = 'trial') group by u.id order by count(o.id) desc"
//! );
//! # Ok::<(), sqlchain::SqlError>(())
//! ```
//!
//! ## Literals
//!
//! The `*_cmp` helpers turn `(column, op, value)` into `column op literal`.
//! Text is single quoted, text wrapped in parentheses is inlined as-is, and
//! lists fan out into an OR-group. By default embedded quotes are **not**
//! escaped; use [`QuoteStyle::Escape`] through [`RenderConfig`] when values
//! may come from untrusted input.

pub mod builder;
pub mod config;
pub mod error;
pub mod prelude;
pub mod table;
pub mod value;

pub use builder::{Expr, Fragment, Join, Select, SqlFragment, Union, to_expression};
pub use config::{KeywordCase, QuoteStyle, RenderConfig};
pub use error::{SqlError, SqlResult};
pub use table::{SharedTable, Table, TableRef};
pub use value::{Scalar, Value};
