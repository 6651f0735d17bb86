//! Stable placeholder ids for rows whose real id is missing or blank.

use mercy_core::constants::{SYNTHESIZED_ID_HEX_LEN, SYNTHESIZED_ID_PREFIX};
use serde_json::Value;

use super::values::{field, to_text, Row};

/// `missing:` + the first 8 hex chars of blake3 over the row's JSON text.
///
/// Identical rows always map to the same id; distinct rows collide only
/// on a digest-prefix collision.
pub fn synthesize_id(raw: &Value) -> String {
    let serialized = raw.to_string();
    let digest = blake3::hash(serialized.as_bytes()).to_hex();
    format!(
        "{SYNTHESIZED_ID_PREFIX}{}",
        &digest.as_str()[..SYNTHESIZED_ID_HEX_LEN]
    )
}

/// The trimmed id under `key`, or a synthesized one.
pub fn resolve_id(raw: &Value, row: Option<&Row>, key: &str) -> String {
    to_text(field(row, key)).unwrap_or_else(|| synthesize_id(raw))
}
