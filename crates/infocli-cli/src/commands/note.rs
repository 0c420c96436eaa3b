//! Note command handlers

use anyhow::{bail, Result};

use infocli_core::{CoreError, EntityKind, Note, NoteEdit, Store};

use crate::output::Output;

/// Create a new note
pub fn add(
    store: &mut Store,
    title: String,
    description: Option<String>,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    if store.notes().find_by_title(&title).is_some() {
        return Err(CoreError::TitleTaken(title).into());
    }

    let mut note = Note::new(title.clone());
    if let Some(description) = description {
        note.set_description(description);
    }
    note.set_tags(tags);
    store.notes_mut().add(note);

    output.success(&format!("Created note: {}", title));
    Ok(())
}

pub fn show(store: &Store, title: &str, output: &Output) -> Result<()> {
    let note = store
        .notes()
        .find_by_title(title)
        .ok_or_else(|| CoreError::not_found(EntityKind::Note, title))?;
    output.print_note(note);
    Ok(())
}

/// List notes, optionally with the given tags first
pub fn list(store: &Store, sort_by_tag: &[String], output: &Output) -> Result<()> {
    let notes = store.notes().all();
    let notes = if sort_by_tag.is_empty() {
        notes
    } else {
        store.notes().sort_by_tags(notes, sort_by_tag)
    };
    output.print_notes(&notes);
    Ok(())
}

pub fn edit(
    store: &mut Store,
    title: &str,
    new_title: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    output: &Output,
) -> Result<()> {
    if new_title.is_none() && description.is_none() && tags.is_none() {
        bail!("Nothing to change. Use --title, --description or --tags.");
    }

    let changes = NoteEdit {
        title: new_title,
        description,
        tags,
    };
    let note = store.notes_mut().edit(title, changes)?;
    output.success(&format!("Updated note: {}", note.title()));
    Ok(())
}

pub fn delete(store: &mut Store, title: &str, output: &Output) -> Result<()> {
    store.notes_mut().delete(title)?;
    output.success(&format!("Deleted note: {}", title));
    Ok(())
}

/// Notes carrying any of the given tags
pub fn find(store: &Store, tags: &[String], output: &Output) -> Result<()> {
    let notes = store.notes().find_by_tags(tags);

    if !output.is_quiet() && notes.is_empty() {
        output.message(&format!("No notes tagged {}", tags.join(", ")));
        return Ok(());
    }

    output.print_notes(&notes);
    Ok(())
}

pub fn tag(store: &mut Store, title: &str, tags: &[String], output: &Output) -> Result<()> {
    let note = store.notes_mut().add_tags(title, tags)?;
    output.success(&format!("Tagged note: {}", note.title()));
    Ok(())
}

pub fn untag(store: &mut Store, title: &str, tags: &[String], output: &Output) -> Result<()> {
    let note = store.notes_mut().delete_tags(title, tags)?;
    output.success(&format!("Removed tags from note: {}", note.title()));
    Ok(())
}
