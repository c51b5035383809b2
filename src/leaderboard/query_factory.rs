//! # Query Factory
//!
//! A base aggregate query paired with the expression a leaderboard ranks by.
//! Narrowing adds filters without touching the value expression; finalizing
//! groups by player, sorts and paginates.

use crate::constants::{columns, tables};
use crate::models::LeaderboardRow;
use crate::query_builder::{Condition, Expr, Pagination, QueryBuilder, ValueAggregate};

#[derive(Debug, Clone, PartialEq)]
pub struct QueryFactory {
    base: QueryBuilder,
    value: Expr,
}

impl QueryFactory {
    /// Factory over an arbitrary source table
    pub fn new(table: &str, value: Expr) -> Self {
        Self {
            base: QueryBuilder::new(table),
            value,
        }
    }

    /// Factory over the statistic events table
    pub fn statistics(value: impl Into<Expr>) -> Self {
        Self::new(tables::STATISTIC_EVENTS, value.into())
    }

    /// Count of events with `cause_id` in `game_type`
    pub fn event_count(game_type: &str, cause_id: &str) -> Self {
        Self::statistics(ValueAggregate::event_count()).narrow_to_event(game_type, cause_id)
    }

    /// Experience earned from events with `cause_id` in `game_type`
    pub fn experience_sum(game_type: &str, cause_id: &str) -> Self {
        Self::statistics(ValueAggregate::experience_sum()).narrow_to_event(game_type, cause_id)
    }

    /// Ratio of two event counts in one game, for players whose denominator
    /// count exceeds `threshold`
    pub fn event_ratio(
        game_type: &str,
        numerator_cause: &str,
        denominator_cause: &str,
        threshold: i64,
    ) -> Self {
        let value = Expr::percentage(
            Expr::count_of_events(numerator_cause, game_type),
            Expr::count_of_events(denominator_cause, game_type),
        );
        Self::statistics(value).narrow(|query| {
            query.having(Condition::gt(
                Expr::count_of_events(denominator_cause, game_type),
                Expr::literal(threshold),
            ))
        })
    }

    /// New factory with `transform` applied to the base query.
    ///
    /// `self` is left untouched, so one base can feed many narrowings.
    pub fn narrow<F>(&self, transform: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        Self {
            base: transform(self.base.clone()),
            value: self.value.clone(),
        }
    }

    /// Restrict to one cause within one game type
    pub fn narrow_to_event(&self, game_type: &str, cause_id: &str) -> Self {
        self.narrow(|query| {
            query
                .where_eq(columns::GAME_TYPE, game_type)
                .where_eq(columns::CAUSE_ID, cause_id)
        })
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }

    pub fn base(&self) -> &QueryBuilder {
        &self.base
    }

    /// Executable ranked query.
    ///
    /// Groups by player, orders by value descending with player id as the
    /// tie-break, and paginates only when `limit` is present.
    pub fn finalize(&self, limit: Option<u32>, offset: Option<u32>) -> QueryBuilder {
        self.base
            .clone()
            .select(&[columns::PLAYER_ID])
            .select_expr(self.value.clone(), columns::VALUE)
            .group_by(&[columns::PLAYER_ID])
            .order_desc(columns::VALUE)
            .order_asc(columns::PLAYER_ID)
            .paginate(Pagination::from_request(limit, offset))
    }

    /// Value of a finalized row, `None` when the cell was NULL
    pub fn extract_value(&self, row: &LeaderboardRow) -> Option<i64> {
        row.value
    }
}
