use anyhow::Result;
use monthcal_core::YearMonth;

use super::Context;
use crate::render;

/// List one day's events, earliest first.
pub fn run(ctx: &Context, day: u32, month: Option<YearMonth>) -> Result<()> {
    let month = ctx.month_for_day(month, day)?;
    let events = ctx.store.events_for_day(month.year(), month.month(), day);
    println!("{}", render::render_day(month, day, &events));
    Ok(())
}
