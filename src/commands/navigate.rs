use anyhow::Result;
use monthcal_core::YearMonth;

use super::{show, Context};

#[derive(Debug, Clone, Copy)]
pub enum Step {
    Next,
    Prev,
    Today,
}

/// Move the cursor one step and print the month it lands on.
pub fn run(ctx: &mut Context, step: Step, list: bool) -> Result<()> {
    let target = target(ctx.cursor, step);
    ctx.set_cursor(target)?;
    println!("{}", show::month_view(ctx, list));
    Ok(())
}

fn target(cursor: YearMonth, step: Step) -> YearMonth {
    match step {
        Step::Next => cursor.next_month(),
        Step::Prev => cursor.prev_month(),
        Step::Today => YearMonth::today(),
    }
}
