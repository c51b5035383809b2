/// Represents pagination parameters for SQL queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    /// Create pagination with only limit
    pub fn limit_only(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    /// Create pagination with both limit and offset
    pub fn limit_offset(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Pagination applies only when a limit is present; offset defaults to 0
    pub fn from_request(limit: Option<u32>, offset: Option<u32>) -> Option<Self> {
        limit.map(|limit| Self::limit_offset(limit, offset.unwrap_or(0)))
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }
}
