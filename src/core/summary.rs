use crate::config::Config;
use crate::core::aggregate::AttendanceLogic;
use crate::core::range::{self, CheckInStore, DateRange};
use crate::errors::AppResult;
use crate::models::attendance::{AttendanceSummary, Presence};
use crate::models::meal::Meal;
use crate::ui::messages::header;
use crate::utils::table::Table;
use ansi_term::Colour::{Fixed, Green};

/// Fetch the window and aggregate it. `from > to` is rejected.
pub fn build_summary<S>(
    store: &S,
    from: &str,
    to: &str,
    filter: Option<&str>,
) -> AppResult<(DateRange, AttendanceSummary)>
where
    S: CheckInStore + ?Sized,
{
    let window = DateRange::parse(from, to)?.ensure_ordered()?;
    let records = range::fetch(store, &window)?;
    let summary = AttendanceLogic::aggregate(&records, filter)?;
    Ok((window, summary))
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn print(range: &DateRange, summary: &AttendanceSummary, cfg: &Config) {
        header(format!("Attendance summary {}", range.label()));

        if summary.is_empty() {
            println!("No records found for the selected date range.");
            return;
        }

        println!("{}\n", totals_line(summary));

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", summary_table(summary, sep));
    }
}

/// Column index of the first meal cell in the summary table.
const FIRST_MEAL_COLUMN: usize = 4;

/// Presence table with the meal cells coloured.
pub fn summary_table(summary: &AttendanceSummary, sep: char) -> String {
    let mut table = Table::new(
        &[
            "Unique ID",
            "Name",
            "Roll No",
            "Date",
            "Breakfast",
            "Lunch",
            "Snacks",
            "Dinner",
        ],
        sep,
    );

    for row in &summary.rows {
        let mut cells = vec![
            row.identifier_id.clone(),
            row.display_name.clone(),
            row.roll_number.clone(),
            row.date.to_string(),
        ];
        cells.extend(Meal::ALL.iter().map(|m| row.meal(*m).as_str().to_string()));
        table.add_row(cells);
    }

    table.render_styled(|col, cell| {
        if col < FIRST_MEAL_COLUMN {
            cell.to_string()
        } else {
            paint_presence(cell)
        }
    })
}

/// `Total Present: Breakfast: 1 | Lunch: 0 | Snacks: 0 | Dinner: 2`
pub fn totals_line(summary: &AttendanceSummary) -> String {
    let parts: Vec<String> = Meal::ALL
        .iter()
        .map(|m| format!("{}: {}", m, summary.totals.get(*m)))
        .collect();
    format!("Total Present: {}", parts.join(" | "))
}

fn paint_presence(cell: &str) -> String {
    if cell == Presence::Present.as_str() {
        Green.paint(cell).to_string()
    } else if cell == Presence::Absent.as_str() {
        Fixed(8).paint(cell).to_string()
    } else {
        cell.to_string()
    }
}
