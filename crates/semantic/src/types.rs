use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Dense embedding produced by [`to_vector_1d`](crate::to_vector_1d).
pub type EmbeddingVector = Vec<f64>;

/// Caller-supplied content node.
///
/// Unknown JSON fields are kept in [`extra`](Self::extra) so a node survives a
/// round trip through the batch embedder untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateNode {
    /// Opaque identifier, echoed back verbatim (string or number).
    #[serde(default)]
    pub id: Value,
    /// Display name. Scalars are stringified, anything else reads as `""`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag: Option<String>,
    /// Non-scalar entries are dropped.
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
    /// Pre-computed embedding. Anything that is not an array of numbers
    /// deserializes to `None` instead of failing the whole request.
    #[serde(
        default,
        deserialize_with = "lenient_vector",
        skip_serializing_if = "Option::is_none"
    )]
    pub vec: Option<EmbeddingVector>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Value::String(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_vec(mut self, vec: EmbeddingVector) -> Self {
        self.vec = Some(vec);
        self
    }

    /// The node's vector when it can take part in similarity ranking.
    pub fn vector(&self) -> Option<&[f64]> {
        self.vec.as_deref().filter(|v| !v.is_empty())
    }

    /// Text sent to the embedding provider: `"name | tag | tag1 tag2"`.
    pub fn description(&self) -> String {
        let tag = self.tag.as_deref().unwrap_or("");
        let tags = self.tags.as_deref().unwrap_or(&[]).join(" ");
        format!("{} | {} | {}", self.name, tag, tags)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text).unwrap_or_default())
}

fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect()))
}

fn lenient_vector<'de, D>(deserializer: D) -> Result<Option<EmbeddingVector>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_array)
        .and_then(|items| items.iter().map(Value::as_f64).collect()))
}

/// Which provider/model produced a vector, and how wide it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingMeta {
    pub provider: String,
    pub model: String,
    pub dims: usize,
}
