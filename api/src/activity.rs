//! The catalog data model as delivered by `GET /activities`.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// The complete set of activities keyed by activity name.
///
/// The map preserves the payload's own entry order; the default (unsorted)
/// view and sort tie-breaks both follow that order, so it must survive
/// deserialization intact.
pub type Catalog = IndexMap<String, ActivityRecord>;

/// One activity as the service describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    /// Human-readable schedule text. Also a search field.
    pub schedule: String,
    /// Absent or empty means uncategorized.
    #[serde(default)]
    pub category: Option<String>,
    /// Lexicographically sortable timestamp (ISO-8601 in practice).
    #[serde(default)]
    pub datetime: Option<String>,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    /// Remaining capacity. Negative when the service has allowed
    /// registration past `max_participants`.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_without_optional_fields() {
        let json = r#"{
            "description": "Weekly chess matches",
            "schedule": "Mon 3pm",
            "max_participants": 2,
            "participants": ["a@x.com"]
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, None);
        assert_eq!(record.datetime, None);
        assert_eq!(record.spots_left(), 1);
    }

    #[test]
    fn catalog_preserves_payload_order() {
        let json = r#"{
            "Zeta Club": {"description": "z", "schedule": "Fri", "max_participants": 5, "participants": []},
            "Alpha Club": {"description": "a", "schedule": "Mon", "max_participants": 5, "participants": []}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = catalog.keys().collect();
        assert_eq!(names, ["Zeta Club", "Alpha Club"]);
    }

    #[test]
    fn spots_left_goes_negative_past_capacity() {
        let record = ActivityRecord {
            description: "d".into(),
            schedule: "s".into(),
            category: None,
            datetime: None,
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(record.spots_left(), -1);
    }
}
