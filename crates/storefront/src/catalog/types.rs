//! Wire types for the catalog service's JSON payloads.

use serde::{Deserialize, Deserializer};

/// One element of the `GET /products` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub product_id: u64,
    pub name: String,
    pub price: f64,
    pub image_cover: String,
    /// Anything other than a string counts as uncategorized.
    #[serde(default, deserialize_with = "string_or_none")]
    pub category_name: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => Some(name),
        _ => None,
    })
}

/// Pull the service's explanation out of a failure body.
///
/// Failure bodies are objects with an optional `error` string. Returns `None`
/// for an empty or non-JSON body, a non-object, a missing field, or an `error`
/// that is not a non-empty string.
#[must_use]
pub fn error_message_from(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        serde_json::Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_category() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"product_id":3,"name":"Tuna","price":89.5,"image_cover":"t.png"}"#,
        )
        .unwrap();
        assert_eq!(record.product_id, 3);
        assert!(record.category_name.is_none());
    }

    #[test]
    fn test_record_with_null_category() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"product_id":3,"name":"Tuna","price":89,"image_cover":"t.png","category_name":null}"#,
        )
        .unwrap();
        assert!(record.category_name.is_none());
    }

    #[test]
    fn test_record_with_non_string_category() {
        for category in ["7", "true", r#"{"th":"ลูกแมว"}"#, r#"["ลูกแมว"]"#] {
            let json = format!(
                r#"{{"product_id":3,"name":"Tuna","price":89,"image_cover":"t.png","category_name":{category}}}"#
            );
            let record: ProductRecord = serde_json::from_str(&json).unwrap();
            assert!(record.category_name.is_none(), "category_name {category}");
        }
    }

    #[test]
    fn test_record_missing_required_field_fails() {
        let result = serde_json::from_str::<ProductRecord>(
            r#"{"product_id":3,"price":89,"image_cover":"t.png"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message_from(r#"{"error":"not found"}"#).as_deref(),
            Some("not found")
        );
        assert_eq!(error_message_from(""), None);
        assert_eq!(error_message_from("<html>502</html>"), None);
        assert_eq!(error_message_from("{}"), None);
        assert_eq!(error_message_from(r#"{"error":""}"#), None);
        assert_eq!(error_message_from(r#"{"error":42}"#), None);
        assert_eq!(error_message_from(r#"["not found"]"#), None);
    }
}
