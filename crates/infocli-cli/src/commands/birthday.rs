//! Birthday command handlers

use anyhow::Result;

use infocli_core::{Clock, Store};

use crate::output::Output;

/// Birthdays in the `days`-day window starting today
pub fn upcoming(store: &Store, days: u32, clock: &impl Clock, output: &Output) -> Result<()> {
    let window = store.contacts().birthdays_in_window(days, clock)?;
    output.print_birthday_window(&window, days);
    Ok(())
}

/// Contacts whose birthday is today
pub fn today(store: &Store, clock: &impl Clock, output: &Output) -> Result<()> {
    let names = store.contacts().today_birthdays(clock);
    output.print_today_birthdays(&names);
    Ok(())
}
