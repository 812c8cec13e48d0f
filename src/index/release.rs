use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_yaml_ng::Value;

/// Accepts a YAML scalar and keeps its textual form.
///
/// Chart versions are usually quoted, but hand-written indexes sometimes
/// carry `version: 1.2` or `appVersion: 7`, which YAML reads as numbers.
fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!(
            "expected a string or number, found {:?}",
            other
        ))),
    }
}

fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
}

fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(value).map(Some),
    }
}

/// Like [`deserialize_optional_scalar`], with null read as an empty string.
fn deserialize_nullable_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_scalar(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let version = deserialize_scalar_string(deserializer)?;
    if version.trim().is_empty() {
        return Err(D::Error::custom("release version must not be empty"));
    }
    Ok(version)
}

/// Chart maintainer as listed in `Chart.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Maintainer {
    #[serde(default, deserialize_with = "deserialize_nullable_scalar")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One version of a chart and its metadata.
///
/// Fields other than these (digest, urls, created, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Chart name; filled from the index key when the entry omits it.
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainers: Option<Vec<Maintainer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl Release {
    /// Case-insensitive search over name, description and keywords.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self
                .keywords
                .iter()
                .flatten()
                .any(|k| k.to_lowercase().contains(needle))
    }
}
