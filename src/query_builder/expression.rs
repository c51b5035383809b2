//! # Aggregate Expressions
//!
//! Scalar SQL expressions usable in SELECT, HAVING and ORDER BY positions.
//! Every aggregate here evaluates to `BIGINT`, so a leaderboard value always
//! decodes as `i64`.
//!
//! | Builder | Rendering |
//! |---|---|
//! | [`Expr::count_if`] | `COUNT(CASE WHEN p THEN 1 END)` |
//! | [`Expr::sum_if`] | `COALESCE(SUM(CASE WHEN p THEN c END), 0)` |
//! | [`Expr::ratio`] | `COALESCE((n * scale) / NULLIF(d, 0), 0)` |

use super::conditions::Condition;
use super::params::{SqlValue, SqlWriter, Statement};
use crate::constants::{columns, RATIO_SCALE};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference, written verbatim
    Column(String),
    /// Crate-generated integer, inlined into the SQL text
    Literal(i64),
    /// Caller-supplied value, bound as a parameter
    Value(SqlValue),
    /// `COUNT(*)`
    CountAll,
    CountIf(Box<Condition>),
    Sum(Box<Expr>),
    SumIf {
        column: Box<Expr>,
        predicate: Box<Condition>,
    },
    Ratio {
        numerator: Box<Expr>,
        denominator: Box<Expr>,
        scale: i64,
    },
}

impl Expr {
    pub fn column(name: &str) -> Self {
        Expr::Column(name.to_string())
    }

    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    pub fn value(value: impl Into<SqlValue>) -> Self {
        Expr::Value(value.into())
    }

    /// Count of rows where `predicate` holds
    pub fn count_if(predicate: Condition) -> Self {
        Expr::CountIf(Box::new(predicate))
    }

    /// Sum of `column` over rows where `predicate` holds, 0 when none do
    pub fn sum_if(column: Expr, predicate: Condition) -> Self {
        Expr::SumIf {
            column: Box::new(column),
            predicate: Box::new(predicate),
        }
    }

    /// Sum of `column` over every row in the group, 0 for an empty group
    pub fn sum(column: Expr) -> Self {
        Expr::Sum(Box::new(column))
    }

    /// `numerator * scale / denominator`, 0 when the denominator is 0
    pub fn ratio(numerator: Expr, denominator: Expr, scale: i64) -> Self {
        Expr::Ratio {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
            scale,
        }
    }

    /// Percentage ratio of two expressions
    pub fn percentage(numerator: Expr, denominator: Expr) -> Self {
        Self::ratio(numerator, denominator, RATIO_SCALE)
    }

    /// Count of events with the given cause in the given game
    pub fn count_of_events(cause_id: &str, game_type: &str) -> Self {
        Self::count_if(Condition::event_of(cause_id, game_type))
    }

    pub fn write_sql(&self, w: &mut SqlWriter) {
        match self {
            Expr::Column(name) => w.push_str(name),
            Expr::Literal(value) => w.push_str(&value.to_string()),
            Expr::Value(value) => w.push_param(value.clone()),
            Expr::CountAll => w.push_str("COUNT(*)"),
            Expr::CountIf(predicate) => {
                w.push_str("COUNT(CASE WHEN ");
                predicate.write_sql(w);
                w.push_str(" THEN 1 END)");
            }
            Expr::Sum(column) => {
                w.push_str("COALESCE(SUM(");
                column.write_sql(w);
                w.push_str("), 0)");
            }
            Expr::SumIf { column, predicate } => {
                w.push_str("COALESCE(SUM(CASE WHEN ");
                predicate.write_sql(w);
                w.push_str(" THEN ");
                column.write_sql(w);
                w.push_str(" END), 0)");
            }
            Expr::Ratio {
                numerator,
                denominator,
                scale,
            } => {
                // Multiply first so integer division keeps the scaled precision
                w.push_str("COALESCE((");
                numerator.write_sql(w);
                w.push_str(&format!(" * {scale}) / NULLIF("));
                denominator.write_sql(w);
                w.push_str(", 0), 0)");
            }
        }
    }

    /// Render on its own, numbering placeholders from `$1`
    pub fn to_sql(&self) -> Statement {
        let mut w = SqlWriter::new();
        self.write_sql(&mut w);
        w.finish()
    }
}

/// The two shapes a leaderboard value can take
#[derive(Debug, Clone, PartialEq)]
pub enum ValueAggregate {
    /// Count of matching rows; every row in the group when unfiltered
    CountOf(Option<Condition>),
    /// Sum of a column over matching rows
    SumOf {
        column: String,
        predicate: Option<Condition>,
    },
}

impl ValueAggregate {
    /// Count of statistic events
    pub fn event_count() -> Self {
        ValueAggregate::CountOf(None)
    }

    /// Sum of awarded experience
    pub fn experience_sum() -> Self {
        ValueAggregate::SumOf {
            column: columns::EXPERIENCE_AMOUNT.to_string(),
            predicate: None,
        }
    }

    pub fn to_expr(&self) -> Expr {
        match self {
            ValueAggregate::CountOf(None) => Expr::CountAll,
            ValueAggregate::CountOf(Some(predicate)) => Expr::count_if(predicate.clone()),
            ValueAggregate::SumOf {
                column,
                predicate: None,
            } => Expr::sum(Expr::column(column)),
            ValueAggregate::SumOf {
                column,
                predicate: Some(predicate),
            } => Expr::sum_if(Expr::column(column), predicate.clone()),
        }
    }
}

impl From<ValueAggregate> for Expr {
    fn from(aggregate: ValueAggregate) -> Self {
        aggregate.to_expr()
    }
}
