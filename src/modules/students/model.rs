use serde::Serialize;
use serde_json::{Map, Value};

/// A student record: an opaque id plus an open document.
///
/// The collection has no fixed schema beyond the `image` key, which the
/// create path guarantees is present. Everything else round-trips whatever
/// JSON the client submitted, serialized flat next to the id:
/// `{"id": "...", "image": "...", ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
