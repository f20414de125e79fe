//! State behind the "Days & Time Between Dates" widget.
//!
//! [`DateDifferenceForm`] owns every input field, the visible panel and the
//! last computed result. Front ends feed it [`FormEvent`]s one at a time;
//! each event is applied synchronously before the next.
//!
//! Editing a field never touches the result. A result stays on screen,
//! possibly stale, until Calculate runs again.

use chrono::{NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calculator::{compute_difference, DateDifference, LocalInstant, DEFAULT_TIME};
use crate::error::Result;
use crate::weekday::WeekdaySelection;

// ── Modes ───────────────────────────────────────────────────────────────────

/// The calculator mode buttons across the top of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorMode {
    DaysUntil,
    DaysFromToday,
    DaysBetween,
}

impl CalculatorMode {
    /// All mode buttons, in display order.
    pub const ALL: [CalculatorMode; 3] = [
        CalculatorMode::DaysUntil,
        CalculatorMode::DaysFromToday,
        CalculatorMode::DaysBetween,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CalculatorMode::DaysUntil => "Days Until...",
            CalculatorMode::DaysFromToday => "Days From Today",
            CalculatorMode::DaysBetween => "Days Between Dates",
        }
    }

    /// Only "Days Between Dates" is implemented; the others are disabled.
    pub fn is_enabled(self) -> bool {
        matches!(self, CalculatorMode::DaysBetween)
    }
}

/// Which panel is showing below the mode buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    Collapsed,
    DaysBetween,
}

// ── Inputs ──────────────────────────────────────────────────────────────────

/// Raw field values, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub include_all_days: bool,
    pub include_end_day: bool,
    pub selected_days: WeekdaySelection,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            start_time: DEFAULT_TIME.to_string(),
            end_time: DEFAULT_TIME.to_string(),
            include_all_days: false,
            include_end_day: false,
            selected_days: WeekdaySelection::new(),
        }
    }
}

/// A user interaction with the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    PressMode(CalculatorMode),
    SetStartDate(String),
    SetEndDate(String),
    SetStartTime(String),
    SetEndTime(String),
    ToggleIncludeAllDays,
    ToggleIncludeEndDay,
    ToggleWeekday(Weekday),
    Calculate,
}

/// Whether an event reached a visible control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    /// The event targeted a disabled button or a control that is not shown.
    Ignored,
}

/// The outcome of the last successful Calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub difference: DateDifference,
}

// ── Form ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DateDifferenceForm {
    panel: Panel,
    inputs: FormInputs,
    timezone: Tz,
    result: Option<Calculation>,
}

impl Default for DateDifferenceForm {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

impl DateDifferenceForm {
    /// A collapsed form whose endpoints are interpreted in `timezone`.
    pub fn new(timezone: Tz) -> Self {
        Self {
            panel: Panel::Collapsed,
            inputs: FormInputs::default(),
            timezone,
            result: None,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn result(&self) -> Option<&Calculation> {
        self.result.as_ref()
    }

    /// Whether `mode`'s button shows the check mark.
    pub fn is_mode_selected(&self, mode: CalculatorMode) -> bool {
        mode == CalculatorMode::DaysBetween && self.panel == Panel::DaysBetween
    }

    /// The "Days to include" buttons are hidden while all days are included.
    pub fn is_day_filter_visible(&self) -> bool {
        self.panel == Panel::DaysBetween && !self.inputs.include_all_days
    }

    /// Press a mode button. Disabled buttons do nothing.
    pub fn press_mode(&mut self, mode: CalculatorMode) -> Dispatch {
        if !mode.is_enabled() {
            return Dispatch::Ignored;
        }
        self.panel = Panel::DaysBetween;
        Dispatch::Applied
    }

    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.inputs.start_date = value.into();
    }

    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.inputs.end_date = value.into();
    }

    pub fn set_start_time(&mut self, value: impl Into<String>) {
        self.inputs.start_time = value.into();
    }

    pub fn set_end_time(&mut self, value: impl Into<String>) {
        self.inputs.end_time = value.into();
    }

    pub fn toggle_include_all_days(&mut self) {
        self.inputs.include_all_days = !self.inputs.include_all_days;
    }

    pub fn toggle_include_end_day(&mut self) {
        self.inputs.include_end_day = !self.inputs.include_end_day;
    }

    /// Flip one weekday in the selection. The selection is kept for display
    /// only and does not feed into [`calculate`](Self::calculate).
    pub fn toggle_weekday(&mut self, day: Weekday) {
        self.inputs.selected_days.toggle(day);
    }

    /// Run the calculation against the current fields.
    ///
    /// With either date empty this is a no-op and any previous result is
    /// returned unchanged. Otherwise the new result replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed field. The previous result is
    /// cleared first so it cannot be mistaken for the answer to bad input.
    pub fn calculate(&mut self) -> Result<Option<&Calculation>> {
        let inputs = &self.inputs;
        if inputs.start_date.trim().is_empty() || inputs.end_date.trim().is_empty() {
            tracing::debug!("start or end date missing; keeping previous result");
            return Ok(self.result.as_ref());
        }

        let tz = self.timezone;
        let endpoints = LocalInstant::from_fields(&inputs.start_date, &inputs.start_time, tz)
            .and_then(|start| {
                LocalInstant::from_fields(&inputs.end_date, &inputs.end_time, tz)
                    .map(|end| (start, end))
            });

        let (start, end) = match endpoints {
            Ok(pair) => pair,
            Err(e) => {
                tracing::debug!(error = %e, "calculation rejected; clearing result");
                self.result = None;
                return Err(e);
            }
        };

        self.result = Some(Calculation {
            start_date: start.date(),
            end_date: end.date(),
            difference: compute_difference(&start, &end, inputs.include_end_day),
        });
        Ok(self.result.as_ref())
    }

    /// Apply one UI event.
    ///
    /// Events aimed at controls that are not on screen (anything but a mode
    /// button while collapsed, weekday toggles while all days are included)
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Only [`FormEvent::Calculate`] can fail; see [`calculate`](Self::calculate).
    pub fn handle(&mut self, event: FormEvent) -> Result<Dispatch> {
        tracing::trace!(?event, panel = ?self.panel, "form event");

        match event {
            FormEvent::PressMode(mode) => return Ok(self.press_mode(mode)),
            _ if self.panel == Panel::Collapsed => return Ok(Dispatch::Ignored),
            FormEvent::SetStartDate(value) => self.set_start_date(value),
            FormEvent::SetEndDate(value) => self.set_end_date(value),
            FormEvent::SetStartTime(value) => self.set_start_time(value),
            FormEvent::SetEndTime(value) => self.set_end_time(value),
            FormEvent::ToggleIncludeAllDays => self.toggle_include_all_days(),
            FormEvent::ToggleIncludeEndDay => self.toggle_include_end_day(),
            FormEvent::ToggleWeekday(day) => {
                if !self.is_day_filter_visible() {
                    return Ok(Dispatch::Ignored);
                }
                self.toggle_weekday(day);
            }
            FormEvent::Calculate => {
                self.calculate()?;
            }
        }
        Ok(Dispatch::Applied)
    }
}
