use super::{Condition, Expr, Join, Pagination, SqlValue, SqlWriter, Statement};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{Executor, FromRow, Postgres};

/// One entry of the SELECT list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<String>,
}

/// Immutable-by-value SELECT builder.
///
/// Every builder method consumes `self` and returns the extended query, so a
/// shared base query is reused by cloning it. Caller-supplied values travel
/// as bind parameters; [`QueryBuilder::build`] numbers them in textual order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    base_table: String,
    select_fields: Vec<SelectItem>,
    joins: Vec<Join>,
    where_clauses: Vec<Condition>,
    group_by: Vec<String>,
    having: Vec<Condition>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
}

impl QueryBuilder {
    /// Create a new query builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: Vec::new(),
            joins: Vec::new(),
            where_clauses: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    /// Add plain columns to the select list
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields
            .extend(fields.iter().map(|field| SelectItem {
                expr: Expr::column(field),
                alias: None,
            }));
        self
    }

    /// Add a computed expression to the select list under `alias`
    pub fn select_expr(mut self, expr: Expr, alias: &str) -> Self {
        self.select_fields.push(SelectItem {
            expr,
            alias: Some(alias.to_string()),
        });
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::inner(table, on_condition))
    }

    /// Add a LEFT JOIN
    pub fn left_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::left(table, on_condition))
    }

    /// Add a WHERE condition; multiple conditions are ANDed
    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.where_clauses.push(condition);
        self
    }

    /// Add a simple WHERE equality
    pub fn where_eq(self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause(Condition::eq(field, value))
    }

    /// Add GROUP BY clause
    pub fn group_by(mut self, fields: &[&str]) -> Self {
        self.group_by.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Add HAVING condition; multiple conditions are ANDed
    pub fn having(mut self, condition: Condition) -> Self {
        self.having.push(condition);
        self
    }

    /// Add ORDER BY DESC
    pub fn order_desc(mut self, field: &str) -> Self {
        self.order_by.push(format!("{field} DESC"));
        self
    }

    /// Add ORDER BY ASC
    pub fn order_asc(mut self, field: &str) -> Self {
        self.order_by.push(format!("{field} ASC"));
        self
    }

    /// Set pagination, replacing any earlier one
    pub fn paginate(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    /// Add LIMIT clause
    pub fn limit(self, limit: u32) -> Self {
        let offset = self.pagination.map_or(0, |p| p.offset);
        self.paginate(Some(Pagination::limit_offset(limit, offset)))
    }

    pub fn where_conditions(&self) -> &[Condition] {
        &self.where_clauses
    }

    /// Render SQL text and bind parameters
    pub fn build(&self) -> Statement {
        let mut w = SqlWriter::new();

        w.push_str("SELECT ");
        if self.select_fields.is_empty() {
            w.push_str("*");
        }
        for (index, item) in self.select_fields.iter().enumerate() {
            if index > 0 {
                w.push_str(", ");
            }
            item.expr.write_sql(&mut w);
            if let Some(ref alias) = item.alias {
                w.push_str(" AS ");
                w.push_str(alias);
            }
        }

        w.push_str(" FROM ");
        w.push_str(&self.base_table);

        for join in &self.joins {
            w.push_str(" ");
            w.push_str(&join.to_sql());
        }

        write_conditions(&mut w, " WHERE ", &self.where_clauses);

        if !self.group_by.is_empty() {
            w.push_str(" GROUP BY ");
            w.push_str(&self.group_by.join(", "));
        }

        write_conditions(&mut w, " HAVING ", &self.having);

        if !self.order_by.is_empty() {
            w.push_str(" ORDER BY ");
            w.push_str(&self.order_by.join(", "));
        }

        if let Some(ref pagination) = self.pagination {
            w.push_str(&pagination.to_sql());
        }

        w.finish()
    }

    /// Build the complete SQL query string
    pub fn build_sql(&self) -> String {
        self.build().sql
    }

    /// Execute the query and return all rows
    pub async fn fetch_all<'e, T, E>(&self, executor: E) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: Executor<'e, Database = Postgres>,
    {
        let statement = self.build();
        bind_params(sqlx::query_as::<_, T>(&statement.sql), &statement.params)
            .fetch_all(executor)
            .await
    }

    /// Execute the query and return one row
    pub async fn fetch_one<'e, T, E>(&self, executor: E) -> Result<T, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: Executor<'e, Database = Postgres>,
    {
        let statement = self.build();
        bind_params(sqlx::query_as::<_, T>(&statement.sql), &statement.params)
            .fetch_one(executor)
            .await
    }

    /// Execute the query and return optional row
    pub async fn fetch_optional<'e, T, E>(&self, executor: E) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: Executor<'e, Database = Postgres>,
    {
        let statement = self.build();
        bind_params(sqlx::query_as::<_, T>(&statement.sql), &statement.params)
            .fetch_optional(executor)
            .await
    }

    /// Check if any row matches
    pub async fn exists<'e, E>(&self, executor: E) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let mut probe = self.clone();
        probe.select_fields = vec![SelectItem {
            expr: Expr::literal(1),
            alias: Some("present".to_string()),
        }];
        probe.order_by.clear();
        let probe = probe.paginate(Some(Pagination::limit_only(1)));

        let row: Option<(i32,)> = probe.fetch_optional(executor).await?;
        Ok(row.is_some())
    }
}

fn write_conditions(w: &mut SqlWriter, keyword: &str, conditions: &[Condition]) {
    if conditions.is_empty() {
        return;
    }
    w.push_str(keyword);
    for (index, condition) in conditions.iter().enumerate() {
        if index > 0 {
            w.push_str(" AND ");
        }
        condition.write_sql(w);
    }
}

fn bind_params<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    params: &[SqlValue],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for param in params {
        query = match param {
            SqlValue::Text(value) => query.bind(value.clone()),
            SqlValue::Int(value) => query.bind(*value),
            SqlValue::Timestamp(value) => query.bind(*value),
        };
    }
    query
}
