use anyhow::Result;
use monthcal_core::{EventEditor, MonthcalError, YearMonth};
use owo_colors::OwoColorize;

use super::Context;

/// Change the time and/or description of an existing event, keeping its id.
pub fn run(
    ctx: &mut Context,
    day: u32,
    id: &str,
    time: Option<String>,
    description: Option<String>,
    month: Option<YearMonth>,
) -> Result<()> {
    let month = ctx.month_for_day(month, day)?;

    let existing = ctx
        .store
        .event(month.year(), month.month(), day, id)
        .cloned()
        .ok_or_else(|| MonthcalError::EventNotFound {
            day: format!("{} {}", day, month.label()),
            id: id.to_string(),
        })?;

    let mut editor = EventEditor::edit(day, existing);
    if let Some(time) = time {
        editor.set_time(time);
    }
    if let Some(description) = description {
        editor.set_description(description);
    }

    let (day, event) = editor.save()?;
    ctx.store.upsert(month.year(), month.month(), day, event.clone())?;

    println!("{} {} on {} {}", "Updated".yellow(), event, day, month.label());

    Ok(())
}
