use crate::utils::error::{PoetryError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// One poem as returned by PoetryDB. Lines are kept verbatim, blank lines included.
///
/// `title` and `author` are required; a missing `lines` or `linecount` decodes
/// as empty, and a numeric `linecount` is kept as its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub linecount: String,
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Count::deserialize(deserializer)? {
        Count::Text(text) => text,
        Count::Number(number) => number.to_string(),
    })
}

impl Poem {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.title, &self.author)
    }
}

/// `title|author`, compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    pub fn new(title: &str, author: &str) -> Self {
        Self(format!("{}|{}", title, author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A combined search. Both fields are trimmed and at least one is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    author: String,
    title: String,
}

impl SearchRequest {
    pub fn new(author: &str, title: &str) -> Result<Self> {
        let author = author.trim();
        let title = title.trim();

        if author.is_empty() && title.is_empty() {
            return Err(PoetryError::InvalidArgument {
                message: "At least one search parameter is required".to_string(),
            });
        }

        Ok(Self {
            author: author.to_string(),
            title: title.to_string(),
        })
    }

    pub fn author(&self) -> Option<&str> {
        Some(self.author.as_str()).filter(|a| !a.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        Some(self.title.as_str()).filter(|t| !t.is_empty())
    }

    /// Number of sub-queries this request dispatches.
    pub fn lookup_count(&self) -> usize {
        usize::from(self.author().is_some()) + usize::from(self.title().is_some())
    }
}

/// Body of an author/title lookup. PoetryDB normally answers with a bare list,
/// some deployments wrap it as `{"poems": [...]}`, and "not found" comes back
/// as an arbitrary object with a 200 status.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PoemsPayload {
    List(Vec<serde_json::Value>),
    Wrapped {
        poems: Vec<serde_json::Value>,
        #[serde(rename = "totalResults", default)]
        total_results: Option<usize>,
    },
    Unrecognized(serde_json::Value),
}

impl PoemsPayload {
    pub fn from_value(value: serde_json::Value) -> Self {
        // Unrecognized accepts any value, so this cannot fail.
        serde_json::from_value(value.clone()).unwrap_or(Self::Unrecognized(value))
    }

    /// Unrecognized shapes count as zero results, not as a fault. Inside a
    /// list every entry is decoded on its own; entries that are not poems are
    /// skipped and the rest kept in order.
    pub fn into_poems(self) -> Vec<Poem> {
        match self {
            Self::List(entries) | Self::Wrapped { poems: entries, .. } => decode_entries(entries),
            Self::Unrecognized(_) => Vec::new(),
        }
    }
}

fn decode_entries(entries: Vec<serde_json::Value>) -> Vec<Poem> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Poem>(entry) {
            Ok(poem) => Some(poem),
            Err(e) => {
                tracing::warn!("skipping list entry {} that is not a poem: {}", index, e);
                None
            }
        })
        .collect()
}
