use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for show IDs that accepts both integers and numeric
/// strings (public feeds are inconsistent about which they emit)
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            n.as_u64().and_then(|id| u32::try_from(id).ok()).ok_or_else(|| Error::custom("invalid show ID"))
        }
        Value::String(s) => s
            .parse::<u32>()
            .map_err(|e| Error::custom(format!("invalid show ID '{}': {}", s, e))),
        _ => Err(Error::custom("show ID must be a number or string")),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::show::ShowSummary;

    #[test]
    fn test_show_id_as_number() {
        let json = r#"{"id": 5279, "title": "Test"}"#;
        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 5279);
    }

    #[test]
    fn test_show_id_as_numeric_string() {
        let json = r#"{"id": "5279", "title": "Test"}"#;
        let show: ShowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 5279);
    }

    #[test]
    fn test_show_id_rejects_garbage() {
        let json = r#"{"id": "not-a-number", "title": "Test"}"#;
        assert!(serde_json::from_str::<ShowSummary>(json).is_err());

        let json = r#"{"id": true, "title": "Test"}"#;
        assert!(serde_json::from_str::<ShowSummary>(json).is_err());
    }
}
