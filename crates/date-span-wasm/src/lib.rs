//! WASM bindings for the days-between-dates widget.
//!
//! A page keeps one [`DateSpanWidget`] per calculator and forwards every
//! input change and button press to it, then re-renders from
//! [`DateSpanWidget::result_json`] and the visibility getters.

use date_span_engine::{
    parse_timezone, CalculatorMode, DateDifferenceForm, FormEvent, ResultPanel,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct DateSpanWidget {
    form: DateDifferenceForm,
}

#[wasm_bindgen]
impl DateSpanWidget {
    /// Create a collapsed widget. `timezone` is an IANA name, normally the
    /// browser's `Intl.DateTimeFormat().resolvedOptions().timeZone`.
    #[wasm_bindgen(constructor)]
    pub fn new(timezone: &str) -> Result<DateSpanWidget, JsValue> {
        let tz = parse_timezone(timezone).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            form: DateDifferenceForm::new(tz),
        })
    }

    /// The "Days Between Dates" button.
    #[wasm_bindgen(js_name = openDaysBetween)]
    pub fn open_days_between(&mut self) {
        self.form.press_mode(CalculatorMode::DaysBetween);
    }

    #[wasm_bindgen(getter, js_name = calculatorVisible)]
    pub fn calculator_visible(&self) -> bool {
        self.form.is_mode_selected(CalculatorMode::DaysBetween)
    }

    #[wasm_bindgen(getter, js_name = dayFilterVisible)]
    pub fn day_filter_visible(&self) -> bool {
        self.form.is_day_filter_visible()
    }

    #[wasm_bindgen(js_name = setStartDate)]
    pub fn set_start_date(&mut self, value: &str) {
        self.form.set_start_date(value);
    }

    #[wasm_bindgen(js_name = setEndDate)]
    pub fn set_end_date(&mut self, value: &str) {
        self.form.set_end_date(value);
    }

    #[wasm_bindgen(js_name = setStartTime)]
    pub fn set_start_time(&mut self, value: &str) {
        self.form.set_start_time(value);
    }

    #[wasm_bindgen(js_name = setEndTime)]
    pub fn set_end_time(&mut self, value: &str) {
        self.form.set_end_time(value);
    }

    #[wasm_bindgen(js_name = toggleIncludeAllDays)]
    pub fn toggle_include_all_days(&mut self) {
        self.form.toggle_include_all_days();
    }

    #[wasm_bindgen(js_name = toggleIncludeEndDay)]
    pub fn toggle_include_end_day(&mut self) {
        self.form.toggle_include_end_day();
    }

    /// Toggle the weekday button at `index` (0 = Monday ... 6 = Sunday).
    #[wasm_bindgen(js_name = toggleDay)]
    pub fn toggle_day(&mut self, index: u8) -> Result<(), JsValue> {
        let day = date_span_engine::DAY_BUTTONS
            .get(index as usize)
            .map(|&(_, day)| day)
            .ok_or_else(|| JsValue::from_str(&format!("no weekday button at index {index}")))?;
        self.form.toggle_weekday(day);
        Ok(())
    }

    /// Whether the weekday button at `index` is highlighted.
    #[wasm_bindgen(js_name = isDaySelected)]
    pub fn is_day_selected(&self, index: u8) -> bool {
        date_span_engine::DAY_BUTTONS
            .get(index as usize)
            .is_some_and(|&(_, day)| self.form.inputs().selected_days.contains(day))
    }

    /// The Calculate button. Errors carry the message for a malformed field.
    pub fn calculate(&mut self) -> Result<(), JsValue> {
        self.form
            .calculate()
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply one JSON-encoded form event, e.g.
    /// `{"event":"set_start_date","value":"2024-01-01"}`.
    pub fn dispatch(&mut self, event_json: &str) -> Result<bool, JsValue> {
        let event: FormEvent =
            serde_json::from_str(event_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.form
            .handle(event)
            .map(|dispatch| dispatch == date_span_engine::Dispatch::Applied)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The result panel as JSON, or `"null"` before the first calculation.
    #[wasm_bindgen(js_name = resultJson)]
    pub fn result_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&ResultPanel::from_form(&self.form))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
