//! What the widget shows: the mode bar and the "Days between dates" panel.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::form::{CalculatorMode, DateDifferenceForm};
use crate::weekday::WeekdaySelection;

/// One mode button as displayed.
#[derive(Debug, Clone, Serialize)]
pub struct ModeButton {
    pub mode: CalculatorMode,
    pub label: &'static str,
    pub enabled: bool,
    pub selected: bool,
}

/// The row of mode buttons for the current form state.
pub fn mode_buttons(form: &DateDifferenceForm) -> Vec<ModeButton> {
    CalculatorMode::ALL
        .iter()
        .map(|&mode| ModeButton {
            mode,
            label: mode.label(),
            enabled: mode.is_enabled(),
            selected: form.is_mode_selected(mode),
        })
        .collect()
}

/// The result panel, present once a calculation has succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPanel {
    /// Start date, formatted for display.
    pub from: String,
    /// End date, formatted for display.
    pub to: String,
    pub days: i64,
    pub hours: i64,
    pub include_end_day: bool,
    pub day_filter_visible: bool,
    pub selected_days: WeekdaySelection,
}

impl ResultPanel {
    pub const TITLE: &'static str = "Days between dates";

    /// Build the panel from the form's last result, if there is one.
    pub fn from_form(form: &DateDifferenceForm) -> Option<Self> {
        let calculation = form.result()?;
        let inputs = form.inputs();
        Some(Self {
            from: format_display_date(calculation.start_date),
            to: format_display_date(calculation.end_date),
            days: calculation.difference.days,
            hours: calculation.difference.hours,
            include_end_day: inputs.include_end_day,
            day_filter_visible: form.is_day_filter_visible(),
            selected_days: inputs.selected_days,
        })
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        writeln!(f, "From: {}", self.from)?;
        writeln!(f, "To:   {}", self.to)?;
        writeln!(f, "Days: {} day(s)", self.days)?;
        write!(f, "OR:   {} hours", self.hours)?;
        if self.day_filter_visible && !self.selected_days.is_empty() {
            write!(f, "\nDays to include: {}", self.selected_days.labels().join(" "))?;
        }
        Ok(())
    }
}

/// Format a date the way an en-US browser's `toLocaleDateString` does
/// (`1/3/2024`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
