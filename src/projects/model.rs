use serde::{Deserialize, Deserializer, Serialize};

/// Path segment appended to the API base.
pub const RECENT_PROJECTS_ENDPOINT: &str = "get-recent-projects";

/// One project as served by the projects API. Identity is `id`.
///
/// Decoding is lenient: the id may arrive as `_id` or `id` (or both), as a string,
/// number, or `{ "$oid": ... }`; `null` text fields decode as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProjectRecord")]
pub struct ProjectRecord {
    pub id: String,
    #[serde(rename = "projectTitle")]
    pub title: String,
    #[serde(rename = "projectDescription")]
    pub description: String,
    #[serde(rename = "profilePicture")]
    pub image_url: String,
    /// Opened in a new browsing context by the card's action; empty means none.
    #[serde(rename = "projectLink", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Deserialize)]
struct RawProjectRecord {
    #[serde(rename = "_id", default)]
    underscore_id: Option<serde_json::Value>,
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(rename = "projectTitle", default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(rename = "projectDescription", default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(rename = "profilePicture", default, deserialize_with = "null_as_default")]
    image_url: String,
    #[serde(rename = "projectLink", default, deserialize_with = "empty_as_none")]
    link: Option<String>,
}

impl From<RawProjectRecord> for ProjectRecord {
    fn from(raw: RawProjectRecord) -> Self {
        // `_id` is the storage key; `id` is the virtual copy some serializers add.
        let id = raw
            .underscore_id
            .and_then(id_text)
            .or_else(|| raw.id.and_then(id_text))
            .unwrap_or_default();
        Self {
            id,
            title: raw.title,
            description: raw.description,
            image_url: raw.image_url,
            link: raw.link,
        }
    }
}

fn id_text(v: serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(mut map) => match map.remove("$oid") {
            Some(Value::String(s)) => Some(s),
            _ => Some(Value::Object(map).to_string()),
        },
        other => Some(other.to_string()),
    }
}

/// Success body. A missing or `null` `projects` field means no projects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecentProjectsBody {
    #[serde(default)]
    pub projects: Option<Vec<ProjectRecord>>,
}

impl RecentProjectsBody {
    pub fn into_projects(self) -> Vec<ProjectRecord> {
        self.projects.unwrap_or_default()
    }
}

/// Failure body carried with a non-success status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(de)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
#[path = "../../tests/unit/projects/model.rs"]
mod tests;
