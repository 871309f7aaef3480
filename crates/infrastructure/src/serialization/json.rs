//! JSON helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON: 2-space indent, trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_stable`], as bytes ready for writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    to_json_stable(value).map(String::into_bytes)
}

/// Deserializes JSON from bytes, pretty-printed or minified.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use nexus_domain::{Environment, WorkspaceSnapshot};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stable_output_format() {
        let json = to_json_stable(&WorkspaceSnapshot::default()).expect("serializes");
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\n  \"activeCollection\": \"Default\""));
    }

    #[test]
    fn test_variables_are_sorted() {
        let env = Environment::with_id("e", "E")
            .with_variable("zebra", "1")
            .with_variable("apple", "2");

        let json = to_json_stable(&env).unwrap();

        assert!(json.find("apple").unwrap() < json.find("zebra").unwrap());
    }

    #[test]
    fn test_same_value_same_bytes() {
        let snapshot = WorkspaceSnapshot::default();
        assert_eq!(
            to_json_stable_bytes(&snapshot).unwrap(),
            to_json_stable_bytes(&snapshot.clone()).unwrap()
        );
    }

    #[test]
    fn test_from_json_bytes_reads_minified() {
        let snapshot: WorkspaceSnapshot =
            from_json_bytes(br#"{"activeCollection":"Smoke"}"#).unwrap();
        assert_eq!(snapshot.active_collection, "Smoke");
    }

    #[test]
    fn test_from_json_bytes_rejects_garbage() {
        let result = from_json_bytes::<WorkspaceSnapshot>(b"{not json");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
