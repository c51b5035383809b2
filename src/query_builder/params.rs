//! Positional bind parameters for rendered statements

use chrono::{DateTime, Utc};

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Timestamp(DateTime<Utc>),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<uuid::Uuid> for SqlValue {
    /// Player ids are stored as hyphenated text
    fn from(value: uuid::Uuid) -> Self {
        SqlValue::Text(value.hyphenated().to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(value)
    }
}

/// A rendered statement with its parameters in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Accumulates SQL text and numbers placeholders in the order they are written
#[derive(Debug, Default)]
pub struct SqlWriter {
    sql: String,
    params: Vec<SqlValue>,
}

impl SqlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a `$n` placeholder bound to `value`
    pub fn push_param(&mut self, value: SqlValue) {
        self.params.push(value);
        self.sql.push('$');
        self.sql.push_str(&self.params.len().to_string());
    }

    pub fn finish(self) -> Statement {
        Statement {
            sql: self.sql,
            params: self.params,
        }
    }
}
