use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use date_span_engine::{
    compute_difference, CalculatorMode, DateDifferenceForm, LocalInstant, WeekdaySelection,
};
use proptest::prelude::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn arb_instant() -> impl Strategy<Value = LocalInstant> {
    // 2000-01-01 plus up to ~50 years, any minute of the day.
    (0i64..18_000, 0u32..24, 0u32..60).prop_map(|(offset, hour, minute)| {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset);
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        LocalInstant::new(date, time, chrono_tz::UTC).unwrap()
    })
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0usize..7).prop_map(|i| WEEKDAYS[i])
}

proptest! {
    #[test]
    fn days_match_truncated_span(start in arb_instant(), end in arb_instant()) {
        let diff = compute_difference(&start, &end, false);
        let seconds = (end.datetime() - start.datetime()).num_seconds();
        prop_assert_eq!(diff.days, seconds / 86_400);
        prop_assert_eq!(diff.hours, seconds / 3_600);
    }

    #[test]
    fn include_end_day_adds_exactly_one(start in arb_instant(), end in arb_instant()) {
        let exclusive = compute_difference(&start, &end, false);
        let inclusive = compute_difference(&start, &end, true);
        prop_assert_eq!(inclusive.days, exclusive.days + 1);
        prop_assert_eq!(inclusive.hours, exclusive.hours);
    }

    #[test]
    fn reversed_endpoints_negate(start in arb_instant(), end in arb_instant()) {
        let forward = compute_difference(&start, &end, false);
        let backward = compute_difference(&end, &start, false);
        prop_assert_eq!(forward.days, -backward.days);
        prop_assert_eq!(forward.hours, -backward.hours);
    }

    #[test]
    fn double_toggle_restores_selection(
        initial in proptest::collection::vec(arb_weekday(), 0..7),
        day in arb_weekday(),
    ) {
        let original: WeekdaySelection = initial.into_iter().collect();
        let mut selection = original;
        selection.toggle(day);
        selection.toggle(day);
        prop_assert_eq!(selection, original);
    }

    #[test]
    fn weekday_selection_never_changes_result(
        days in proptest::collection::vec(arb_weekday(), 0..10),
        include_all_days in any::<bool>(),
        offset in 0i64..1000,
    ) {
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset);

        let mut plain = DateDifferenceForm::default();
        plain.press_mode(CalculatorMode::DaysBetween);
        plain.set_start_date("2024-01-01");
        plain.set_end_date(end.format("%Y-%m-%d").to_string());
        let expected = plain.calculate().unwrap().copied();

        let mut filtered = plain.clone();
        for day in days {
            filtered.toggle_weekday(day);
        }
        if include_all_days {
            filtered.toggle_include_all_days();
        }
        prop_assert_eq!(filtered.calculate().unwrap().copied(), expected);
    }
}
