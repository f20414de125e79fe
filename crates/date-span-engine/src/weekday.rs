//! The "Days to include" selection.
//!
//! Seven toggle buttons labelled `M T W Th F S S`, Monday first. The two `S`
//! buttons share a label, so a selection is keyed by [`Weekday`] (the
//! button's position) rather than by label.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::error::{DateSpanError, Result};

/// Button labels and the weekday each one toggles, in display order.
pub const DAY_BUTTONS: [(&str, Weekday); 7] = [
    ("M", Weekday::Mon),
    ("T", Weekday::Tue),
    ("W", Weekday::Wed),
    ("Th", Weekday::Thu),
    ("F", Weekday::Fri),
    ("S", Weekday::Sat),
    ("S", Weekday::Sun),
];

/// A set of weekdays, stored as a bitmask indexed from Monday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdaySelection {
    mask: u8,
}

impl WeekdaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    /// Add `day` if absent, remove it if present.
    pub fn toggle(&mut self, day: Weekday) {
        self.mask ^= Self::bit(day);
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & Self::bit(day) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Selected weekdays, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        DAY_BUTTONS
            .iter()
            .map(|&(_, day)| day)
            .filter(move |day| self.contains(*day))
    }

    /// Button labels of the selected weekdays, Monday first.
    pub fn labels(&self) -> Vec<&'static str> {
        DAY_BUTTONS
            .iter()
            .filter(|(_, day)| self.contains(*day))
            .map(|&(label, _)| label)
            .collect()
    }
}

impl FromIterator<Weekday> for WeekdaySelection {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut selection = Self::new();
        for day in iter {
            if !selection.contains(day) {
                selection.toggle(day);
            }
        }
        selection
    }
}

impl Serialize for WeekdaySelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Parse a weekday token as typed on a command line.
///
/// Accepts the button labels, the usual English abbreviations and full names,
/// case-insensitively. A bare `S` is rejected because it names two buttons.
pub fn parse_weekday_token(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "m" | "mo" | "mon" | "monday" => Ok(Weekday::Mon),
        "t" | "tu" | "tue" | "tues" | "tuesday" => Ok(Weekday::Tue),
        "w" | "we" | "wed" | "wednesday" => Ok(Weekday::Wed),
        "th" | "thu" | "thurs" | "thursday" => Ok(Weekday::Thu),
        "f" | "fr" | "fri" | "friday" => Ok(Weekday::Fri),
        "sa" | "sat" | "saturday" => Ok(Weekday::Sat),
        "su" | "sun" | "sunday" => Ok(Weekday::Sun),
        "s" => Err(DateSpanError::InvalidWeekday(
            "'S' is ambiguous; use 'Sa' or 'Su'".to_string(),
        )),
        _ => Err(DateSpanError::InvalidWeekday(format!("'{}'", s.trim()))),
    }
}

/// Parse a comma-separated list such as `M,W,F` into a selection.
pub fn parse_weekday_list(s: &str) -> Result<WeekdaySelection> {
    s.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(parse_weekday_token)
        .collect()
}
