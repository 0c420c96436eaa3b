//! Note store
//!
//! Notes are keyed by title. Because the title is also editable, `edit`
//! re-keys the map when it changes; a rename never leaves a stale entry
//! behind and never overwrites a different note.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::note::Note;

/// Quote characters stripped from tag queries
const TAG_QUOTES: &[char] = &['"', '\''];

/// Fields to change in `NoteStore::edit`; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// All notes, keyed by title
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteStore {
    notes: BTreeMap<String, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a note, replacing any note with the same title
    pub fn add(&mut self, note: Note) {
        debug!(title = note.title(), "Storing note");
        self.notes.insert(note.title().to_string(), note);
    }

    /// Apply the given changes to the note titled `title`
    pub fn edit(&mut self, title: &str, changes: NoteEdit) -> CoreResult<&Note> {
        if !self.notes.contains_key(title) {
            return Err(CoreError::not_found(EntityKind::Note, title));
        }

        let key = match changes.title {
            Some(new_title) if new_title != title => {
                if self.notes.contains_key(&new_title) {
                    return Err(CoreError::TitleTaken(new_title));
                }
                let mut note = self
                    .notes
                    .remove(title)
                    .ok_or_else(|| CoreError::not_found(EntityKind::Note, title))?;
                note.set_title(new_title.clone());
                self.notes.insert(new_title.clone(), note);
                debug!(from = title, to = %new_title, "Renamed note");
                new_title
            }
            _ => title.to_string(),
        };

        let note = self
            .notes
            .get_mut(&key)
            .ok_or_else(|| CoreError::not_found(EntityKind::Note, key.as_str()))?;
        if let Some(description) = changes.description {
            note.set_description(description);
        }
        if let Some(tags) = changes.tags {
            note.set_tags(tags);
        }
        Ok(&*note)
    }

    /// Remove a note by title
    pub fn delete(&mut self, title: &str) -> CoreResult<Note> {
        let note = self
            .notes
            .remove(title)
            .ok_or_else(|| CoreError::not_found(EntityKind::Note, title))?;
        debug!(title, "Deleted note");
        Ok(note)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.get(title)
    }

    /// Add tags to the note titled `title`
    pub fn add_tags(&mut self, title: &str, tags: &[String]) -> CoreResult<&Note> {
        let note = self.get_mut(title)?;
        note.add_tags(tags.iter().cloned());
        Ok(&*note)
    }

    /// Remove tags from the note titled `title`; all-or-nothing
    pub fn delete_tags(&mut self, title: &str, tags: &[String]) -> CoreResult<&Note> {
        let note = self.get_mut(title)?;
        note.delete_tags(tags)?;
        Ok(&*note)
    }

    /// Notes carrying any of `tags`
    ///
    /// Surrounding quotes are stripped from each query tag, so `"health"`
    /// and `health` match the same notes.
    pub fn find_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Note> {
        let query: Vec<&str> = tags
            .iter()
            .map(|t| t.as_ref().trim_matches(TAG_QUOTES))
            .collect();
        self.notes
            .values()
            .filter(|n| n.has_any_tag(&query))
            .collect()
    }

    /// Stable sort putting notes that carry any of `tags` first
    pub fn sort_by_tags<'a, S: AsRef<str>>(
        &self,
        mut notes: Vec<&'a Note>,
        tags: &[S],
    ) -> Vec<&'a Note> {
        notes.sort_by_key(|n| !n.has_any_tag(tags));
        notes
    }

    /// All notes, ordered by title
    pub fn all(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Every tag in use with the number of notes carrying it, by tag name
    pub fn tags_with_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in self.notes.values().flat_map(|n| n.tags()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        counts.sort();
        counts
    }

    fn get_mut(&mut self, title: &str) -> CoreResult<&mut Note> {
        self.notes
            .get_mut(title)
            .ok_or_else(|| CoreError::not_found(EntityKind::Note, title))
    }
}

impl From<Vec<Note>> for NoteStore {
    fn from(notes: Vec<Note>) -> Self {
        let mut store = Self::new();
        for note in notes {
            store.add(note);
        }
        store
    }
}

impl From<NoteStore> for Vec<Note> {
    fn from(store: NoteStore) -> Self {
        store.notes.into_values().collect()
    }
}
