// src/quotes/types.rs
use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// A single line of dialogue. `character_name` stays empty until the
/// aggregator joins it against the character index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    #[serde(rename = "dialog", default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(rename = "character", default, deserialize_with = "null_as_empty")]
    pub character_id: String,
    #[serde(skip_deserializing, default)]
    pub character_name: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, character_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            character_id: character_id.into(),
            character_name: String::new(),
        }
    }

    /// Response body for `/quote`: text immediately followed by the speaker.
    ///
    /// There is no separator between the two; clients already depend on the
    /// exact `"<text><name>"` shape.
    pub fn attributed_line(&self) -> String {
        format!("{}{}", self.text, self.character_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    #[serde(rename = "_id", default, deserialize_with = "null_as_empty")]
    pub character_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Missing and `null` string fields decode as `""`, so one incomplete record
/// does not fail the whole list; blank names are rejected at lookup.
fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

impl Character {
    pub fn new(character_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            name: name.into(),
        }
    }
}

/// character id -> display name
pub type CharacterIndex = HashMap<String, String>;

/// Fold a character list into an id -> name index. Later duplicates win.
pub fn index_characters<I>(characters: I) -> CharacterIndex
where
    I: IntoIterator<Item = Character>,
{
    characters
        .into_iter()
        .map(|c| (c.character_id, c.name))
        .collect()
}

/// Upstream list envelope: `{ "docs": [ ... ] }`. Paging fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Docs<T> {
    pub docs: Vec<T>,
}
