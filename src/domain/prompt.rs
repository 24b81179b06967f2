// src/domain/prompt.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Server-assigned prompt identifier.
///
/// Backends hand out numbers or strings (UUIDs, object ids); either is kept as
/// received so it serializes back unchanged. Ids compare by their text form,
/// so `7` from a response matches `7` typed on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptId {
    Number(i64),
    Text(String),
}

impl PromptId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for PromptId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PromptId {}

impl Hash for PromptId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for PromptId {
    type Err = Infallible;

    /// Canonical integers become numbers; anything else ("007", "65f1a") stays text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Number(n),
            _ => Self::Text(s.to_string()),
        })
    }
}

impl From<i64> for PromptId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PromptId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PromptId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// The editable part of a prompt, as sent to the server on create and update.
///
/// A value of this type without an id is an unsaved record: it only lives in
/// the edit form until the server assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptFields {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "imageUrl", deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub attention_note: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub example_question: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub example_answer: String,
}

/// Nullable columns come back as `null`; treat them like missing keys.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A saved prompt as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    #[serde(flatten)]
    pub fields: PromptFields,
}

impl Prompt {
    pub fn new(id: impl Into<PromptId>, fields: PromptFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Form input where every field may still be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub attention_note: Option<String>,
    pub example_question: Option<String>,
    pub example_answer: Option<String>,
}

impl PromptDraft {
    /// Build a fresh field set; unset fields become empty and fail validation.
    pub fn into_fields(self) -> PromptFields {
        self.apply_to(PromptFields::default())
    }

    /// Overlay the set fields on existing ones (edit form pre-filled from a record).
    pub fn apply_to(self, mut fields: PromptFields) -> PromptFields {
        if let Some(title) = self.title {
            fields.title = title;
        }
        if let Some(description) = self.description {
            fields.description = description;
        }
        if let Some(image_url) = self.image_url {
            fields.image_url = image_url;
        }
        if let Some(kind) = self.kind {
            fields.kind = kind;
        }
        if let Some(attention_note) = self.attention_note {
            fields.attention_note = attention_note;
        }
        if let Some(example_question) = self.example_question {
            fields.example_question = example_question;
        }
        if let Some(example_answer) = self.example_answer {
            fields.example_answer = example_answer;
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
