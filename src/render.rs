use itertools::Itertools;
use std::fmt;

use crate::config::RenderConfig;
use crate::grid::MonthGrid;

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// Seven two-column day cells joined by single spaces, plus the "Wk " prefix
// when the week-number column is shown.
const DAY_BODY_WIDTH: usize = 21;
const WEEK_COLUMN_WIDTH: usize = 3;

/// A month ready for fixed-width text output.
pub struct MonthView {
    config: RenderConfig,
    grid: MonthGrid,
}

impl MonthView {
    pub fn new(config: RenderConfig) -> Self {
        MonthView {
            grid: MonthGrid::new(&config),
            config,
        }
    }

    fn body_width(&self) -> usize {
        if self.config.week_numbers {
            DAY_BODY_WIDTH + WEEK_COLUMN_WIDTH
        } else {
            DAY_BODY_WIDTH
        }
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{} {}", self.config.month.name(), self.config.year);
        let padding = self.body_width().saturating_sub(header.len()) / 2;
        writeln!(f, "{:pad$}{}", "", header, pad = padding)?;

        if self.config.week_numbers {
            f.write_str("Wk ")?;
        }

        let start = self.config.start_weekday.num_days_from_sunday() as usize;
        let labels = (0..7).map(|i| WEEKDAY_LABELS[(start + i) % 7]).join(" ");
        writeln!(f, "{}", labels)?;

        for week in self.grid.weeks() {
            if self.config.week_numbers {
                write!(f, "{:>2} ", week.number())?;
            }

            let cells = week
                .days()
                .iter()
                .map(|cell| match cell {
                    Some(day) => format!("{:>2}", day),
                    None => "  ".to_owned(),
                })
                .join(" ");
            writeln!(f, "{}", cells)?;
        }

        Ok(())
    }
}

/// Renders the configured month as lines of fixed-width text, each
/// terminated by a newline.
pub fn render_month(config: RenderConfig) -> String {
    log::trace!("rendering {} {}", config.month.name(), config.year);

    MonthView::new(config).to_string()
}
