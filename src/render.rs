//! Terminal rendering for the month grid and day listings.
//!
//! Extension traits add colored output to monthcal-core types using owo_colors.

use std::collections::BTreeMap;

use monthcal_core::grid::WEEKDAY_LABELS;
use monthcal_core::{DayCell, Event, MonthCells, YearMonth};
use owo_colors::OwoColorize;

/// Width of one grid column, including the event marker.
const CELL_WIDTH: usize = 4;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "  {}  {}  {}",
            self.time.bold(),
            self.description,
            self.id.dimmed()
        )
    }
}

/// Per-day event counts for the month being drawn, plus today's day if it
/// falls in that month.
pub struct Highlights<'a> {
    pub counts: &'a BTreeMap<u32, usize>,
    pub today: Option<u32>,
}

fn render_cell(cell: &DayCell, highlights: &Highlights) -> String {
    let Some(day) = cell.day() else {
        return " ".repeat(CELL_WIDTH);
    };

    let has_events = highlights.counts.contains_key(&day);
    let marker = if has_events { "*" } else { " " };
    let text = format!("{:>3}{}", day, marker);

    match (highlights.today == Some(day), has_events) {
        (true, _) => text.reversed().to_string(),
        (false, true) => text.green().to_string(),
        (false, false) => text,
    }
}

/// Month label, weekday header and the grid, one week per line.
pub fn render_month(cells: MonthCells, highlights: &Highlights) -> String {
    let mut lines = vec![cells.month().label().bold().to_string()];

    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{:>width$}", label, width = CELL_WIDTH))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in cells.weeks() {
        let row: String = week.iter().map(|cell| render_cell(cell, highlights)).collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

/// Narrow layout: one line per day with its weekday.
pub fn render_list(cells: MonthCells, highlights: &Highlights) -> String {
    let mut lines = vec![cells.month().label().bold().to_string()];

    for cell in cells.filter(|c| c.is_valid) {
        let day = cell.day_number;
        let mut line = format!("{:>3} {}", day, cell.weekday_label().dimmed());
        if let Some(count) = highlights.counts.get(&(day as u32)) {
            let label = format!("({} {})", count, pluralize("event", *count));
            line.push_str(&format!("  {}", label.green()));
        }
        if highlights.today == Some(day as u32) {
            line = line.reversed().to_string();
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Events of one day, already sorted by the store.
pub fn render_day(month: YearMonth, day: u32, events: &[Event]) -> String {
    let mut lines = vec![format!("{} {}", day, month.label()).bold().to_string()];

    if events.is_empty() {
        lines.push("  No events".dimmed().to_string());
    } else {
        lines.extend(events.iter().map(Render::render));
    }

    lines.join("\n")
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthcal_core::build_cells;

    fn november() -> YearMonth {
        YearMonth::new(2024, 11).unwrap()
    }

    #[test]
    fn test_month_has_label_header_and_five_weeks() {
        let counts = BTreeMap::new();
        let out = render_month(
            build_cells(november()),
            &Highlights { counts: &counts, today: None },
        );
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("November 2024"));
        for label in WEEKDAY_LABELS {
            assert!(lines[1].contains(label));
        }
        assert_eq!(lines.len(), 2 + 5);
        // 1 November 2024 is a Friday, the sixth column
        assert_eq!(lines[2], format!("{}{:>3}{}{:>3}", " ".repeat(20), 1, " ", 2));
        assert!(lines[6].ends_with(" 30"));
    }

    #[test]
    fn test_days_with_events_are_marked() {
        let counts = BTreeMap::from([(15, 2)]);
        let out = render_month(
            build_cells(november()),
            &Highlights { counts: &counts, today: None },
        );
        assert!(out.contains(" 15*"));
        assert!(!out.contains(" 14*"));
    }

    #[test]
    fn test_list_layout() {
        let counts = BTreeMap::from([(15, 1)]);
        let out = render_list(
            build_cells(november()),
            &Highlights { counts: &counts, today: None },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + 30);
        assert!(lines[1].contains("  1") && lines[1].contains("Fri"));
        assert!(lines[15].contains("(1 event)"));
    }

    #[test]
    fn test_day_listing_keeps_time_and_description_apart() {
        let events = vec![
            Event {
                id: "b".to_string(),
                time: "09:00".to_string(),
                description: "Morning Call".to_string(),
            },
            Event {
                id: "a".to_string(),
                time: "15:00".to_string(),
                description: "Afternoon Meeting".to_string(),
            },
        ];
        let out = render_day(november(), 15, &events);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("15 November 2024"));
        assert!(lines[1].contains("09:00") && lines[1].contains("Morning Call"));
        assert!(lines[2].contains("15:00") && lines[2].contains("Afternoon Meeting"));
    }

    #[test]
    fn test_empty_day() {
        let out = render_day(november(), 3, &[]);
        assert!(out.contains("No events"));
    }
}
