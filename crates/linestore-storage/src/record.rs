//! Log records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged event: a key, a timestamp, an event name, and a free-form
/// value.
///
/// Records are immutable once constructed and have no identity beyond
/// field equality. Duplicate ids, events, and values are legal; the log is
/// an append-only event stream, not a keyed store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Key the record is filed under.
    pub id: String,
    /// When the record was accepted, with sub-second precision.
    pub timestamp: DateTime<Utc>,
    /// Event name.
    pub event: String,
    /// Free-form payload.
    pub value: String,
}

impl Record {
    /// Create a record stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        event: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(id, Utc::now(), event, value)
    }

    /// Create a record with an explicit timestamp.
    pub fn with_timestamp(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        event: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            event: event.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_current_time() {
        let before = Utc::now();
        let record = Record::new("example", "event", "hello");
        let after = Utc::now();

        assert_eq!(record.id, "example");
        assert_eq!(record.event, "event");
        assert_eq!(record.value, "hello");
        assert!(record.timestamp >= before && record.timestamp <= after);
    }

    #[test]
    fn test_equality_is_field_equality() {
        let timestamp = Utc::now();
        let a = Record::with_timestamp("example", timestamp, "event", "hello");
        let b = Record::with_timestamp("example", timestamp, "event", "hello");
        let c = Record::with_timestamp("other", timestamp, "event", "hello");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
