//! Text notes with tags
//!
//! Tags are case-sensitive, never empty and never duplicated. Every path that
//! writes tags goes through `unique_non_empty`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult, EntityKind};

/// A titled note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Note title (store key; changed only through `NoteStore::edit`)
    title: String,
    /// Optional free-text body
    #[serde(default)]
    pub description: Option<String>,
    /// Tags for retrieval
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: BTreeSet<String>,
}

impl Note {
    /// Create a note with no description and no tags
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Replace all tags
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = unique_non_empty(tags);
    }

    /// Add tags, skipping empty and already present ones
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(unique_non_empty(tags));
    }

    /// Remove tags
    ///
    /// Either every tag is removed or, if any one is missing, none are and
    /// the first missing tag is reported.
    pub fn delete_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> CoreResult<()> {
        let missing = tags
            .iter()
            .map(|t| t.as_ref())
            .find(|t| !self.tags.contains(*t));
        if let Some(missing) = missing {
            return Err(CoreError::not_found(EntityKind::Tag, missing));
        }
        for tag in tags {
            self.tags.remove(tag.as_ref());
        }
        Ok(())
    }

    /// True if the note carries at least one of `tags`
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.tags.contains(t.as_ref()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title:       {}", self.title)?;
        writeln!(
            f,
            "Description: {}",
            self.description.as_deref().unwrap_or("(none)")
        )?;
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(
            f,
            "Tags:        {}",
            if tags.is_empty() {
                "(none)".to_string()
            } else {
                tags.join(", ")
            }
        )
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(unique_non_empty(tags))
}

/// Drop empty strings and duplicates
pub fn unique_non_empty<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .filter(|t| !t.is_empty())
        .collect()
}
