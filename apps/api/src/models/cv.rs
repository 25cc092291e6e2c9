use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Structured CV data as supplied by the data store.
///
/// Every section is optional. Leaf values tolerate strings, numbers and booleans
/// so partially filled or loosely typed documents still render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    /// Present whenever the source object has any key, known or not.
    #[serde(default, deserialize_with = "non_empty_record")]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default)]
    pub education: Option<Vec<EducationEntry>>,
    /// Category name -> list or scalar, plus an optional `notes` entry.
    /// Kept as raw JSON so key order survives and non-mapping values can be ignored.
    #[serde(default)]
    pub skills: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "non_empty_record")]
    pub contact: Option<Contact>,
    #[serde(default, deserialize_with = "non_empty_record")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: Option<String>,
    /// Used in place of `degree` for boot camps and certificate programs.
    #[serde(default, deserialize_with = "lenient_string")]
    pub program: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub graduation_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// Accepts any JSON scalar as text. `null` becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Deserializes a sub-record only when its JSON object has at least one key.
/// `null` and `{}` become `None`; null leaves and unknown keys still mark the record present.
fn non_empty_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(map) if !map.is_empty() => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Returns false for `null`, `false`, `0`, `""`, `[]` and `{}`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders a JSON value as plain text: strings verbatim, `null` as empty, everything else as JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
