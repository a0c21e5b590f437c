//! Queue entries and service-type tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service-type tag for a queue entry.
///
/// `Priority` entries always rank ahead of `Normal` entries among the
/// unserved part of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Preferential service, ranked ahead of all normal entries.
    Priority,
    /// Regular service, ranked after all priority entries.
    Normal,
}

impl ServiceType {
    /// Returns the sort rank for this tag (lower ranks first).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Priority => 0,
            Self::Normal => 1,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "Priority"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

/// One person waiting for, or having received, service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// 1-based rank among unserved entries, reassigned on every
    /// recompute. `None` until first assignment and again once served.
    pub position: Option<u32>,
    /// Client name, 1-20 characters after trimming (validated at the
    /// HTTP boundary).
    pub name: String,
    /// Arrival timestamp (UTC), set at creation, immutable.
    pub arrival_time: DateTime<Utc>,
    /// Service-type tag.
    pub service_type: ServiceType,
    /// Whether this entry has already been dequeued.
    pub served: bool,
}

impl Entry {
    /// Creates a new unserved entry arriving now, with no position yet.
    #[must_use]
    pub fn new(name: impl Into<String>, service_type: ServiceType) -> Self {
        Self {
            position: None,
            name: name.into(),
            arrival_time: Utc::now(),
            service_type,
            served: false,
        }
    }
}
