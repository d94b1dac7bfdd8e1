use serde::de::DeserializeOwned;
use std::path::Path;

/// Deserialize a DSL document, choosing the format from the file extension.
///
/// `.json` is read as JSON and `.toml` as TOML. Everything else, including
/// `.yaml`/`.yml` and extension-less names, is read as YAML, which also
/// accepts plain JSON documents.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use the_switchboard::utils::parse_dsl;
///
/// #[derive(Deserialize)]
/// struct Head {
///     #[serde(rename = "type")]
///     kind: String,
/// }
///
/// let head: Head = parse_dsl("main.conn.json", br#"{"type": "database"}"#).unwrap();
/// assert_eq!(head.kind, "database");
/// ```
pub fn parse_dsl<T: DeserializeOwned>(file: &str, data: &[u8]) -> Result<T, String> {
    let extension = Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => serde_json::from_slice(data).map_err(|e| e.to_string()),
        Some("toml") => {
            let text = std::str::from_utf8(data).map_err(|e| e.to_string())?;
            toml::from_str(text).map_err(|e| e.to_string())
        }
        _ => serde_yaml::from_slice(data).map_err(|e| e.to_string()),
    }
}
