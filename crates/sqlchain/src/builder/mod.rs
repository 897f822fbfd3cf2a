//! Fragment builders.
//!
//! Every builder is an ordered, append-only chain of items joined by a
//! connector keyword:
//!
//! - [`Expr`]: fragments joined by `and` / `or` (WHERE and ON clauses)
//! - [`Join`]: tables joined by `inner join` / `left join`
//! - [`Select`]: one SELECT statement (columns, source, where, group,
//!   order, limit)
//! - [`Union`]: statements joined by `union` / `union all`
//!
//! Nothing is rendered until [`SqlFragment::render`] is called, and
//! rendering never mutates the builder.
//!
//! Builders take `&mut self` for every append; share a finished builder by
//! cloning it.

mod chain;
pub mod expr;
pub mod join;
pub mod select;
pub mod traits;
pub mod union;

pub use expr::{Expr, Fragment, to_expression};
pub use join::Join;
pub use select::Select;
pub use traits::SqlFragment;
pub use union::Union;
