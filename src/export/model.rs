// src/export/model.rs

use crate::models::attendance::AttendanceRow;
use crate::models::meal::Meal;
use serde::Serialize;

/// Flat, string-only view of a presence row, one per exported line.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub identifier_id: String,
    pub display_name: String,
    pub roll_number: String,
    pub date: String,
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
}

impl From<&AttendanceRow> for AttendanceExport {
    fn from(r: &AttendanceRow) -> Self {
        Self {
            identifier_id: r.identifier_id.clone(),
            display_name: r.display_name.clone(),
            roll_number: r.roll_number.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            breakfast: r.meal(Meal::Breakfast).as_str().to_string(),
            lunch: r.meal(Meal::Lunch).as_str().to_string(),
            snacks: r.meal(Meal::Snacks).as_str().to_string(),
            dinner: r.meal(Meal::Dinner).as_str().to_string(),
        }
    }
}

/// Position of `date` in the header and cell lists.
pub(crate) const DATE_COLUMN: usize = 3;

/// Header for CSV / XLSX, same order as the struct fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "identifier_id",
        "display_name",
        "roll_number",
        "date",
        "breakfast",
        "lunch",
        "snacks",
        "dinner",
    ]
}

pub(crate) fn export_to_cells(e: &AttendanceExport) -> Vec<String> {
    vec![
        e.identifier_id.clone(),
        e.display_name.clone(),
        e.roll_number.clone(),
        e.date.clone(),
        e.breakfast.clone(),
        e.lunch.clone(),
        e.snacks.clone(),
        e.dinner.clone(),
    ]
}

pub(crate) fn rows_to_export(rows: &[AttendanceRow]) -> Vec<AttendanceExport> {
    rows.iter().map(AttendanceExport::from).collect()
}
