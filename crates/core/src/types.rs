/// Cube identifiers are UUID v4 strings stored as TEXT.
pub type CubeId = String;

/// Card identifiers are the catalog's own ids (Scryfall UUIDs).
pub type CardId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
