use anyhow::Result;
use monthcal_core::{build_cells, YearMonth};

use super::{highlights, Context};
use crate::render;

/// Print the cursor month, jumping to `month` first if given.
pub fn run(ctx: &mut Context, month: Option<YearMonth>, list: bool) -> Result<()> {
    if let Some(month) = month {
        ctx.set_cursor(month)?;
    }
    println!("{}", month_view(ctx, list));
    Ok(())
}

/// Rendered grid (or list) for the cursor month.
pub fn month_view(ctx: &Context, list: bool) -> String {
    let month = ctx.cursor;
    let counts = ctx.store.days_with_events(month);
    let marks = highlights(&counts, month);
    let cells = build_cells(month);

    if list {
        render::render_list(cells, &marks)
    } else {
        render::render_month(cells, &marks)
    }
}
