use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

/// Inclusive minute-of-day interval mapped to a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealWindow {
    pub meal: Meal,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl MealWindow {
    pub const fn new(meal: Meal, start_minute: u32, end_minute: u32) -> Self {
        Self {
            meal,
            start_minute,
            end_minute,
        }
    }

    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_minute && minute <= self.end_minute
    }
}

/// Serving windows, in the order they are matched.
pub const MEAL_WINDOWS: [MealWindow; 4] = [
    MealWindow::new(Meal::Breakfast, 450, 600), // 07:30–10:00
    MealWindow::new(Meal::Lunch, 720, 870),     // 12:00–14:30
    MealWindow::new(Meal::Snacks, 1020, 1115),  // 17:00–18:35
    MealWindow::new(Meal::Dinner, 1170, 1290),  // 19:30–21:30
];

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Snacks, Meal::Dinner];

    /// Meal served at `minute` of the day, if any.
    pub fn from_minute(minute: u32) -> Option<Self> {
        MEAL_WINDOWS
            .iter()
            .find(|w| w.contains(minute))
            .map(|w| w.meal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Snacks => "Snacks",
            Meal::Dinner => "Dinner",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Meal::Breakfast => 0,
            Meal::Lunch => 1,
            Meal::Snacks => 2,
            Meal::Dinner => 3,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
