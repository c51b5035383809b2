use super::query_factory::QueryFactory;
use crate::error::Result;
use crate::registry::Registry;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Per-request data-access context handed to factory producers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryContext {
    /// Reference instant for rolling time windows
    pub now: DateTime<Utc>,
}

impl QueryContext {
    pub fn now() -> Self {
        Self { now: Utc::now() }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// Builds a bound [`QueryFactory`] for one request
pub type FactoryProducer = Arc<dyn Fn(&QueryContext) -> QueryFactory + Send + Sync>;

/// A registered leaderboard: stable id, display title and factory producer
#[derive(Clone)]
pub struct LeaderboardDefinition {
    id: String,
    title: String,
    producer: FactoryProducer,
}

impl LeaderboardDefinition {
    pub fn new<F>(id: impl Into<String>, title: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&QueryContext) -> QueryFactory + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            producer: Arc::new(producer),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Invoke the producer for this request's context
    pub fn produce(&self, context: &QueryContext) -> QueryFactory {
        (self.producer)(context)
    }
}

impl fmt::Debug for LeaderboardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeaderboardDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub type LeaderboardRegistry = Registry<LeaderboardDefinition>;

/// Register a definition under its own id
pub fn register_leaderboard(
    registry: &mut LeaderboardRegistry,
    definition: LeaderboardDefinition,
) -> Result<Arc<LeaderboardDefinition>> {
    let id = definition.id().to_string();
    registry.register(id, definition)
}
