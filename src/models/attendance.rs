use super::meal::Meal;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Present => "Present",
            Presence::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// Grouping key of a presence row: one person on one UTC day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    pub identifier_id: String,
    pub date: NaiveDate,
}

/// One person's meals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow {
    pub identifier_id: String,
    pub display_name: String,
    pub roll_number: String,
    pub date: NaiveDate,
    pub breakfast: Presence,
    pub lunch: Presence,
    pub snacks: Presence,
    pub dinner: Presence,
}

impl AttendanceRow {
    /// Fresh row with every meal marked absent.
    pub fn absent(
        identifier_id: impl Into<String>,
        display_name: impl Into<String>,
        roll_number: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            identifier_id: identifier_id.into(),
            display_name: display_name.into(),
            roll_number: roll_number.into(),
            date,
            breakfast: Presence::Absent,
            lunch: Presence::Absent,
            snacks: Presence::Absent,
            dinner: Presence::Absent,
        }
    }

    pub fn meal(&self, meal: Meal) -> Presence {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Snacks => self.snacks,
            Meal::Dinner => self.dinner,
        }
    }

    pub fn mark_present(&mut self, meal: Meal) {
        let slot = match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Snacks => &mut self.snacks,
            Meal::Dinner => &mut self.dinner,
        };
        *slot = Presence::Present;
    }
}

/// Distinct (person, day) pairs present for each meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealTotals {
    pub breakfast: usize,
    pub lunch: usize,
    pub snacks: usize,
    pub dinner: usize,
}

impl MealTotals {
    pub fn get(&self, meal: Meal) -> usize {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Snacks => self.snacks,
            Meal::Dinner => self.dinner,
        }
    }

    pub(crate) fn set(&mut self, meal: Meal, count: usize) {
        match meal {
            Meal::Breakfast => self.breakfast = count,
            Meal::Lunch => self.lunch = count,
            Meal::Snacks => self.snacks = count,
            Meal::Dinner => self.dinner = count,
        }
    }

    pub fn is_empty(&self) -> bool {
        Meal::ALL.iter().all(|m| self.get(*m) == 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub rows: Vec<AttendanceRow>,
    pub totals: MealTotals,
}

impl AttendanceSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
