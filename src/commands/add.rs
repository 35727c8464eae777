use anyhow::Result;
use monthcal_core::{EventEditor, YearMonth};
use owo_colors::OwoColorize;

use super::Context;

/// Validate a new event and store it on `day`.
pub fn run(
    ctx: &mut Context,
    day: u32,
    time: String,
    description: String,
    month: Option<YearMonth>,
) -> Result<()> {
    let month = ctx.month_for_day(month, day)?;

    let mut editor = EventEditor::add(day);
    editor.set_time(time);
    editor.set_description(description);

    let (day, event) = editor.save()?;
    ctx.store.upsert(month.year(), month.month(), day, event.clone())?;

    println!("{} {} on {} {}", "Added".green(), event, day, month.label());
    println!("  id: {}", event.id.dimmed());

    Ok(())
}
