/// Entity identifiers are opaque server-generated strings (UUID v7 text).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity identifier.
///
/// UUID v7, so ids sort by creation time at millisecond resolution. Postgres
/// listings use this to break `created_at` ties.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7().to_string()
}
