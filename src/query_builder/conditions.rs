use super::expression::Expr;
use super::params::{SqlValue, SqlWriter, Statement};
use crate::constants::columns;

/// Comparison operators supported in predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn to_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

/// Represents different types of SQL conditions
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        left: Expr,
        operator: CompareOp,
        right: Expr,
    },
    Between {
        expr: Expr,
        start: Expr,
        end: Expr,
    },
    IsNull(Expr),
    IsNotNull(Expr),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn compare(left: Expr, operator: CompareOp, right: Expr) -> Self {
        Condition::Compare {
            left,
            operator,
            right,
        }
    }

    /// `column = $n`
    pub fn eq(column: &str, value: impl Into<SqlValue>) -> Self {
        Self::compare(Expr::column(column), CompareOp::Eq, Expr::value(value))
    }

    /// `left > right`, typically an aggregate against an inlined threshold
    pub fn gt(left: Expr, right: Expr) -> Self {
        Self::compare(left, CompareOp::Gt, right)
    }

    /// `column BETWEEN $n AND $m`, inclusive on both ends
    pub fn between(
        column: &str,
        start: impl Into<SqlValue>,
        end: impl Into<SqlValue>,
    ) -> Self {
        Condition::Between {
            expr: Expr::column(column),
            start: Expr::value(start),
            end: Expr::value(end),
        }
    }

    pub fn is_null(column: &str) -> Self {
        Condition::IsNull(Expr::column(column))
    }

    pub fn is_not_null(column: &str) -> Self {
        Condition::IsNotNull(Expr::column(column))
    }

    /// Statistic event of a cause within a game type
    pub fn event_of(cause_id: &str, game_type: &str) -> Self {
        Condition::And(vec![
            Self::eq(columns::CAUSE_ID, cause_id),
            Self::eq(columns::GAME_TYPE, game_type),
        ])
    }

    /// Conjunction, flattening nested ANDs
    pub fn and(self, other: Condition) -> Self {
        let mut conditions = match self {
            Condition::And(conditions) => conditions,
            single => vec![single],
        };
        match other {
            Condition::And(more) => conditions.extend(more),
            single => conditions.push(single),
        }
        Condition::And(conditions)
    }

    pub fn or(self, other: Condition) -> Self {
        Condition::Or(vec![self, other])
    }

    pub fn write_sql(&self, w: &mut SqlWriter) {
        match self {
            Condition::Compare {
                left,
                operator,
                right,
            } => {
                left.write_sql(w);
                w.push_str(" ");
                w.push_str(operator.to_sql());
                w.push_str(" ");
                right.write_sql(w);
            }
            Condition::Between { expr, start, end } => {
                expr.write_sql(w);
                w.push_str(" BETWEEN ");
                start.write_sql(w);
                w.push_str(" AND ");
                end.write_sql(w);
            }
            Condition::IsNull(expr) => {
                expr.write_sql(w);
                w.push_str(" IS NULL");
            }
            Condition::IsNotNull(expr) => {
                expr.write_sql(w);
                w.push_str(" IS NOT NULL");
            }
            Condition::And(conditions) => write_group(w, conditions, " AND ", "TRUE"),
            Condition::Or(conditions) => write_group(w, conditions, " OR ", "FALSE"),
        }
    }

    /// Render on its own, numbering placeholders from `$1`
    pub fn to_sql(&self) -> Statement {
        let mut w = SqlWriter::new();
        self.write_sql(&mut w);
        w.finish()
    }
}

fn write_group(w: &mut SqlWriter, conditions: &[Condition], separator: &str, empty: &str) {
    match conditions {
        [] => w.push_str(empty),
        [single] => single.write_sql(w),
        many => {
            w.push_str("(");
            for (index, condition) in many.iter().enumerate() {
                if index > 0 {
                    w.push_str(separator);
                }
                condition.write_sql(w);
            }
            w.push_str(")");
        }
    }
}
