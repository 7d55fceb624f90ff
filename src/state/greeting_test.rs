use super::*;

// =============================================================
// DayPeriod::from_hour
// =============================================================

#[test]
fn morning_covers_five_to_eleven() {
    for hour in 5..12 {
        assert_eq!(DayPeriod::from_hour(hour), DayPeriod::Morning, "hour {hour}");
    }
}

#[test]
fn afternoon_covers_twelve_to_seventeen() {
    for hour in 12..18 {
        assert_eq!(DayPeriod::from_hour(hour), DayPeriod::Afternoon, "hour {hour}");
    }
}

#[test]
fn evening_covers_late_and_early_hours() {
    for hour in (18..24).chain(0..5) {
        assert_eq!(DayPeriod::from_hour(hour), DayPeriod::Evening, "hour {hour}");
    }
}

#[test]
fn boundaries_land_on_expected_side() {
    assert_eq!(DayPeriod::from_hour(0), DayPeriod::Evening);
    assert_eq!(DayPeriod::from_hour(4), DayPeriod::Evening);
    assert_eq!(DayPeriod::from_hour(5), DayPeriod::Morning);
    assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
    assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
    assert_eq!(DayPeriod::from_hour(23), DayPeriod::Evening);
}

#[test]
fn out_of_range_hour_is_evening() {
    assert_eq!(DayPeriod::from_hour(24), DayPeriod::Evening);
    assert_eq!(DayPeriod::from_hour(u32::MAX), DayPeriod::Evening);
}

// =============================================================
// greeting_for_hour
// =============================================================

#[test]
fn greeting_text_matches_period() {
    let copy = GreetingCopy::default();
    assert_eq!(greeting_for_hour(9, &copy), "Good morning! ☀️ Ready for a productive day.");
    assert_eq!(greeting_for_hour(15, &copy), "Good afternoon! ☕ Hope you're having a great day.");
    assert_eq!(greeting_for_hour(21, &copy), "Good evening! 🌙 Thanks for visiting my portfolio.");
}

#[test]
fn greeting_uses_overridden_copy() {
    let copy = GreetingCopy { morning: "Hi early bird".to_owned(), ..GreetingCopy::default() };
    assert_eq!(greeting_for_hour(6, &copy), "Hi early bird");
}
