//! Contact command handlers

use anyhow::Result;

use infocli_core::{CoreError, EntityKind, Record, Store};

use crate::output::Output;

/// Add a contact, or a phone to an existing one
pub fn add(store: &mut Store, name: &str, phone: Option<&str>, output: &Output) -> Result<()> {
    let contacts = store.contacts_mut();

    if contacts.find(name).is_ok() {
        let record = contacts.find_mut(name)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        output.success("Contact updated.");
    } else {
        // Validate before inserting so a bad phone leaves no empty contact behind
        let mut record = Record::new(name);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        contacts.add(record);
        output.success("Contact added.");
    }

    Ok(())
}

pub fn show(store: &Store, name: &str, output: &Output) -> Result<()> {
    let record = store.contacts().find(name)?;
    output.print_contact(record);
    Ok(())
}

pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_contacts(&store.contacts().all());
    Ok(())
}

pub fn delete(store: &mut Store, name: &str, output: &Output) -> Result<()> {
    store.contacts_mut().delete(name)?;
    output.success(&format!("Deleted contact {}", name));
    Ok(())
}

/// Case-insensitive search across every contact field
pub fn search(store: &Store, query: &str, output: &Output) -> Result<()> {
    let results = store.contacts().search(query);

    if !output.is_quiet() && results.is_empty() {
        output.message(&format!("No contacts matching '{}'", query));
        return Ok(());
    }

    output.print_contacts(&results);
    Ok(())
}

pub fn phones(store: &Store, name: &str, output: &Output) -> Result<()> {
    let record = store.contacts().find(name)?;
    output.print_phones(record);
    Ok(())
}

pub fn change_phone(
    store: &mut Store,
    name: &str,
    old: &str,
    new: &str,
    output: &Output,
) -> Result<()> {
    let record = store.contacts_mut().find_mut(name)?;
    if record.find_phone(old)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Phone, old).into());
    }
    record.edit_phone(old, new)?;
    output.success("Phone changed.");
    Ok(())
}

pub fn remove_phone(store: &mut Store, name: &str, phone: &str, output: &Output) -> Result<()> {
    store.contacts_mut().find_mut(name)?.remove_phone(phone);
    output.success("Phone removed.");
    Ok(())
}

pub fn add_email(store: &mut Store, name: &str, email: &str, output: &Output) -> Result<()> {
    store.contacts_mut().find_mut(name)?.add_email(email)?;
    output.success("Email added.");
    Ok(())
}

pub fn change_email(
    store: &mut Store,
    name: &str,
    old: &str,
    new: &str,
    output: &Output,
) -> Result<()> {
    let record = store.contacts_mut().find_mut(name)?;
    if record.find_email(old)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Email, old).into());
    }
    record.change_email(old, new)?;
    output.success("Email changed.");
    Ok(())
}

pub fn remove_email(store: &mut Store, name: &str, email: &str, output: &Output) -> Result<()> {
    store.contacts_mut().find_mut(name)?.remove_email(email);
    output.success("Email removed.");
    Ok(())
}

pub fn set_birthday(store: &mut Store, name: &str, birthday: &str, output: &Output) -> Result<()> {
    store.contacts_mut().find_mut(name)?.add_birthday(birthday)?;
    output.success("Birthday added.");
    Ok(())
}

pub fn show_birthday(store: &Store, name: &str, output: &Output) -> Result<()> {
    let record = store.contacts().find(name)?;
    output.print_birthday(record);
    Ok(())
}

pub fn set_address(store: &mut Store, name: &str, address: &str, output: &Output) -> Result<()> {
    store.contacts_mut().find_mut(name)?.add_address(address);
    output.success("Address added.");
    Ok(())
}
