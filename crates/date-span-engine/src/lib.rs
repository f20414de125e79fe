//! # date-span-engine
//!
//! The "Days & Time Between Dates" calculator: two date/time endpoints in,
//! whole days and whole hours between them out.
//!
//! ## Modules
//!
//! - [`calculator`] — endpoint parsing and the day/hour difference arithmetic
//! - [`weekday`] — the "Days to include" weekday selection
//! - [`form`] — widget state: mode, input fields, last result, UI events
//! - [`report`] — the mode bar and result panel as displayed
//! - [`error`] — Error types

pub mod calculator;
pub mod error;
pub mod form;
pub mod report;
pub mod weekday;

pub use calculator::{
    compute_difference, difference_between, parse_date, parse_time, parse_timezone,
    whole_days_between, whole_hours_between, DateDifference, LocalInstant, DEFAULT_TIME,
    DEFAULT_TIMEZONE,
};
pub use error::DateSpanError;
pub use form::{
    Calculation, CalculatorMode, DateDifferenceForm, Dispatch, FormEvent, FormInputs, Panel,
};
pub use report::{format_display_date, mode_buttons, ModeButton, ResultPanel};
pub use weekday::{parse_weekday_list, parse_weekday_token, WeekdaySelection, DAY_BUTTONS};
