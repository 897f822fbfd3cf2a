//! Convenient imports for typical `sqlchain` usage.
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! ```

pub use crate::{
    Expr, Join, RenderConfig, Select, SqlError, SqlFragment, SqlResult, Table, TableRef, Union,
    to_expression,
};
