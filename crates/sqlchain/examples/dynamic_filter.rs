//! Build a search query from optional filters.
//!
//! Run with: `cargo run -p sqlchain --example dynamic_filter`

use sqlchain::prelude::*;
use sqlchain::{KeywordCase, QuoteStyle};

struct Filters {
    name: Option<&'static str>,
    min_age: Option<u32>,
    roles: Vec<&'static str>,
}

fn search(filters: &Filters) -> SqlResult<Select> {
    let mut on = Expr::new();
    on.and("r.user_id = u.id")?;

    let mut source = Join::from_table(Table::new("users").alias("u"));
    source.left_join_on(Table::new("roles").alias("r"), on)?;

    let mut stmt = Select::new();
    stmt.add_columns(["u.id", "u.name", "r.role"])?
        .set_source(source)?;

    if let Some(name) = filters.name {
        stmt.where_and_cmp("u.name", "=", name)?;
    }
    if let Some(age) = filters.min_age {
        stmt.where_and_cmp("u.age", ">=", age)?;
    }
    if !filters.roles.is_empty() {
        stmt.where_and_cmp("r.role", "=", filters.roles.as_slice())?;
    }

    stmt.add_order("u.name", false)?.set_limit(0, 25);
    Ok(stmt)
}

fn main() -> SqlResult<()> {
    let filters = Filters {
        name: Some("d'arcy"),
        min_age: Some(21),
        roles: vec!["admin", "editor"],
    };
    let stmt = search(&filters)?;

    println!("{}", stmt.render()?);

    let cfg = RenderConfig::new()
        .with_keyword_case(KeywordCase::Upper)
        .with_quote_style(QuoteStyle::Escape);
    println!("{}", stmt.render_with(&cfg)?);

    Ok(())
}
