//! Shared SQL expressions for name matching.
//!
//! Both sides of every comparison are folded by the database, so a value always matches
//! itself even where `LOWER` only folds ASCII (SQLite).

use sea_orm::sea_query::{Alias, BinOper, Expr, ExprTrait, Func, IntoColumnRef, SimpleExpr};

fn trimmed<T>(value: T) -> SimpleExpr
where
    T: Into<SimpleExpr>,
{
    Func::cust(Alias::new("TRIM")).arg(value).into()
}

/// `LOWER(TRIM(col)) = LOWER(TRIM(?))`
pub fn name_equals<C>(col: C, name: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::lower(trimmed(Expr::col(col))))
        .eq(Func::lower(trimmed(Expr::val(name.to_string()))))
}

/// `LOWER(col) LIKE LOWER('%<needle>%')`
///
/// `%` and `_` inside the needle are not escaped and keep their wildcard meaning.
pub fn contains_ignore_case<C>(col: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::lower(Expr::col(col))).binary(
        BinOper::Like,
        Func::lower(Expr::val(format!("%{}%", needle))),
    )
}
