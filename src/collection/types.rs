//! Wire types for the collections API and payload preparation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a collection: an `info` object plus the request/folder tree.
///
/// Kept as a raw JSON object; only `info.name`, `info.schema` and the
/// top-level identifiers are ever touched.
pub type CollectionContent = Map<String, Value>;

/// Collection as returned by the list, create and update endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    pub uid: String,
    pub name: String,
}

impl CollectionSummary {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// `GET /collections` response
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionListResponse {
    pub collections: Vec<CollectionSummary>,
}

/// Single-collection wrapper used by every read and write of one collection
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CollectionEnvelope<T> {
    pub collection: T,
}

/// Remove the server-assigned identifiers, which create and update payloads
/// must not carry.
pub fn strip_identifiers(content: &mut CollectionContent) {
    content.remove("uid");
    content.remove("id");
}

/// The `info` object, replaced by an empty one when missing or not an object
pub fn info_mut(content: &mut CollectionContent) -> &mut Map<String, Value> {
    let info = content
        .entry("info")
        .or_insert_with(|| Value::Object(Map::new()));
    if !info.is_object() {
        *info = Value::Object(Map::new());
    }
    match info {
        Value::Object(map) => map,
        _ => unreachable!("info was just set to an object"),
    }
}

/// Copy of an existing collection's content renamed for a snapshot
pub fn snapshot_payload(content: &CollectionContent, name: &str) -> CollectionContent {
    let mut payload = content.clone();
    info_mut(&mut payload).insert("name".to_string(), Value::String(name.to_string()));
    strip_identifiers(&mut payload);
    payload
}

/// Freshly generated content prepared to become the "latest" collection
pub fn replacement_payload(
    mut content: CollectionContent,
    name: &str,
    default_schema: &str,
) -> CollectionContent {
    let info = info_mut(&mut content);
    info.insert("name".to_string(), Value::String(name.to_string()));
    let has_schema = info
        .get("schema")
        .is_some_and(|schema| !schema.is_null() && schema.as_str() != Some(""));
    if !has_schema {
        info.insert(
            "schema".to_string(),
            Value::String(default_schema.to_string()),
        );
    }
    strip_identifiers(&mut content);
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const SCHEMA: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

    fn content(value: Value) -> CollectionContent {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn snapshot_payload_renames_and_keeps_other_info_fields() {
        let source = content(json!({
            "info": {
                "_postman_id": "abc",
                "name": "Pinterest REST API (latest)",
                "schema": SCHEMA
            },
            "item": [{ "name": "List pins" }]
        }));

        let payload = snapshot_payload(&source, "Pinterest REST API 5.15.0");

        assert_eq!(
            Value::Object(payload),
            json!({
                "info": {
                    "_postman_id": "abc",
                    "name": "Pinterest REST API 5.15.0",
                    "schema": SCHEMA
                },
                "item": [{ "name": "List pins" }]
            })
        );
        // source is left untouched
        assert_eq!(source["info"]["name"], "Pinterest REST API (latest)");
    }

    #[rstest]
    #[case(json!({ "uid": "1-a", "id": "a", "info": {} }))]
    #[case(json!({ "uid": "1-a", "info": {} }))]
    #[case(json!({ "id": "a" }))]
    #[case(json!({ "info": {} }))]
    fn snapshot_payload_never_carries_identifiers(#[case] source: Value) {
        let payload = snapshot_payload(&content(source), "API 1.0.0");

        assert!(!payload.contains_key("uid"));
        assert!(!payload.contains_key("id"));
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "info": null }))]
    #[case(json!({ "info": "broken" }))]
    fn snapshot_payload_creates_missing_info(#[case] source: Value) {
        let payload = snapshot_payload(&content(source), "API 1.0.0");

        assert_eq!(payload["info"], json!({ "name": "API 1.0.0" }));
    }

    #[test]
    fn replacement_payload_sets_name_and_defaults_schema() {
        let payload = replacement_payload(
            content(json!({ "info": {}, "uid": "1-a", "id": "a" })),
            "Pinterest REST API (latest)",
            SCHEMA,
        );

        assert_eq!(
            Value::Object(payload),
            json!({
                "info": {
                    "name": "Pinterest REST API (latest)",
                    "schema": SCHEMA
                }
            })
        );
    }

    #[test]
    fn replacement_payload_keeps_existing_schema() {
        let payload = replacement_payload(
            content(json!({
                "info": { "name": "Generated", "schema": "https://example.com/v2.0.0" },
                "item": []
            })),
            "Pinterest REST API (latest)",
            SCHEMA,
        );

        assert_eq!(payload["info"]["name"], "Pinterest REST API (latest)");
        assert_eq!(payload["info"]["schema"], "https://example.com/v2.0.0");
        assert_eq!(payload["item"], json!([]));
    }

    #[test]
    fn replacement_payload_creates_info_when_missing() {
        let payload = replacement_payload(content(json!({ "item": [] })), "latest", SCHEMA);

        assert_eq!(payload["info"], json!({ "name": "latest", "schema": SCHEMA }));
    }

    #[test]
    fn collection_list_response_ignores_extra_fields() {
        let response: CollectionListResponse = serde_json::from_value(json!({
            "collections": [
                {
                    "id": "a",
                    "name": "Pinterest REST API (latest)",
                    "owner": "1",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "uid": "1-a"
                }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.collections,
            vec![CollectionSummary::new("1-a", "Pinterest REST API (latest)")]
        );
    }
}
