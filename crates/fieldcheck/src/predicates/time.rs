//! Time predicates backed by `chrono` layouts.
//!
//! A layout is a `chrono` format string such as `"%Y-%m-%d"`. How the parsed
//! value becomes an instant depends on what the layout carries:
//!
//! | Layout fields          | Resulting instant                    |
//! |------------------------|--------------------------------------|
//! | date, time and offset  | that instant, converted to UTC       |
//! | date and time          | that wall time, read as UTC          |
//! | date only              | midnight UTC of that date            |
//! | date and offset        | midnight at that offset, in UTC      |
//! | time only              | that time on 0000-01-01 UTC          |
//!
//! Missing fields take their zero value: a layout without a day (`"%Y-%m"`)
//! means the first of the month, one without a year means year 0, and one
//! without minutes or seconds (`"%H"`) means the top of the hour.
//!
//! Past/future checks read the clock on every call. Values within a few
//! milliseconds of "now" may flip between two consecutive calls.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::foundation::Predicate;

/// Common layouts.
pub mod layouts {
    /// `2023-05-10`
    pub const DATE: &str = "%Y-%m-%d";
    /// `2023-05-10 14:30:00`
    pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
    /// `14:30:00`
    pub const TIME: &str = "%H:%M:%S";
    /// `2023-05-10T14:30:00+02:00`
    pub const RFC3339: &str = "%+";
}

// ============================================================================
// CLOCK
// ============================================================================

/// Source of the current instant.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses `value` with `layout` into a UTC instant.
///
/// Returns `None` when the value does not match the layout, the layout is
/// malformed, or the fields do not form a valid timestamp.
#[must_use]
pub fn parse_time(value: &str, layout: &str) -> Option<DateTime<Utc>> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, value, StrftimeItems::new(layout)).ok()?;

    if parsed.timestamp().is_some() {
        return parsed.to_datetime().ok().map(|instant| instant.with_timezone(&Utc));
    }

    let local = date_part(&mut parsed)?.and_time(time_part(&mut parsed)?);
    match parsed.offset() {
        Some(seconds) => FixedOffset::east_opt(seconds)?
            .from_local_datetime(&local)
            .single()
            .map(|instant| instant.with_timezone(&Utc)),
        None => Some(local.and_utc()),
    }
}

fn date_part(parsed: &mut Parsed) -> Option<NaiveDate> {
    if let Ok(date) = parsed.to_naive_date() {
        return Some(date);
    }
    // Week and ordinal dates are complete or wrong; never fill them in.
    if parsed.isoyear().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.ordinal().is_some()
    {
        return None;
    }
    if parsed.year().is_none()
        && parsed.year_div_100().is_none()
        && parsed.year_mod_100().is_none()
    {
        parsed.set_year(0).ok()?;
    }
    if parsed.month().is_none() {
        parsed.set_month(1).ok()?;
    }
    if parsed.day().is_none() {
        parsed.set_day(1).ok()?;
    }
    parsed.to_naive_date().ok()
}

fn time_part(parsed: &mut Parsed) -> Option<NaiveTime> {
    if parsed.hour_mod_12().is_none() {
        parsed.set_hour(0).ok()?;
    }
    // `%I` without `%p` reads as AM.
    if parsed.hour_div_12().is_none() {
        parsed.set_ampm(false).ok()?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0).ok()?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0).ok()?;
    }
    parsed.to_naive_time().ok()
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Passes when the input parses with the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Time {
    /// `chrono` format string.
    pub layout: String,
}

impl Time {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
        }
    }
}

impl Predicate for Time {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        parse_time(input, &self.layout).is_some()
    }
}

/// Passes when the input parses and lies strictly before the clock's now.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PastTime<C = SystemClock> {
    /// `chrono` format string.
    pub layout: String,
    clock: C,
}

impl PastTime {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> PastTime<C> {
    /// Replaces the clock used as "now".
    pub fn with_clock<D: Clock>(self, clock: D) -> PastTime<D> {
        PastTime {
            layout: self.layout,
            clock,
        }
    }
}

impl<C: Clock> Predicate for PastTime<C> {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        is_time_past_with(input, &self.layout, &self.clock)
    }
}

/// Passes when the input parses and lies strictly after the clock's now.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FutureTime<C = SystemClock> {
    /// `chrono` format string.
    pub layout: String,
    clock: C,
}

impl FutureTime {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> FutureTime<C> {
    /// Replaces the clock used as "now".
    pub fn with_clock<D: Clock>(self, clock: D) -> FutureTime<D> {
        FutureTime {
            layout: self.layout,
            clock,
        }
    }
}

impl<C: Clock> Predicate for FutureTime<C> {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        is_time_future_with(input, &self.layout, &self.clock)
    }
}

/// Returns `true` if `value` parses with `layout`.
#[must_use]
pub fn is_time(value: &str, layout: &str) -> bool {
    parse_time(value, layout).is_some()
}

/// Returns `true` if `value` parses with `layout` and is before now.
#[must_use]
pub fn is_time_past(value: &str, layout: &str) -> bool {
    is_time_past_with(value, layout, &SystemClock)
}

/// Returns `true` if `value` parses with `layout` and is after now.
#[must_use]
pub fn is_time_future(value: &str, layout: &str) -> bool {
    is_time_future_with(value, layout, &SystemClock)
}

/// [`is_time_past`] against an explicit clock.
#[must_use]
pub fn is_time_past_with<C: Clock + ?Sized>(value: &str, layout: &str, clock: &C) -> bool {
    parse_time(value, layout).is_some_and(|instant| instant < clock.now())
}

/// [`is_time_future`] against an explicit clock.
#[must_use]
pub fn is_time_future_with<C: Clock + ?Sized>(value: &str, layout: &str, clock: &C) -> bool {
    parse_time(value, layout).is_some_and(|instant| instant > clock.now())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    const PAST: &str = "1999-01-01";
    const FUTURE: &str = "2999-01-01";

    fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    #[rstest]
    #[case("2023-05-10", layouts::DATE, true)]
    #[case("not-a-date", layouts::DATE, false)]
    #[case("2023-02-30", layouts::DATE, false)]
    #[case("2023-05-10 14:30:00", layouts::DATE_TIME, true)]
    #[case("2023-05-10", layouts::DATE_TIME, false)]
    #[case("14:30:00", layouts::TIME, true)]
    #[case("25:00:00", layouts::TIME, false)]
    #[case("2023-05-10T14:30:00+02:00", layouts::RFC3339, true)]
    #[case("2023-05-10", "%Q", false)]
    #[case("", layouts::DATE, false)]
    fn parses(#[case] value: &str, #[case] layout: &str, #[case] expected: bool) {
        assert_eq!(is_time(value, layout), expected);
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let instant = parse_time("2023-05-10", layouts::DATE).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 5, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let instant = parse_time("2023-05-10 02:00:00 +0300", "%Y-%m-%d %H:%M:%S %z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 5, 9, 23, 0, 0).unwrap());
    }

    #[test]
    fn offset_applies_to_date_only_layout() {
        let instant = parse_time("2023-05-10 +0300", "%Y-%m-%d %z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 5, 9, 21, 0, 0).unwrap());

        let instant = parse_time("2023-05-10 -0500", "%Y-%m-%d %z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 5, 10, 5, 0, 0).unwrap());
    }

    #[test]
    fn date_only_offset_shifts_past_and_future() {
        // Midnight at +14:00 is 10:00 the previous day in UTC.
        let clock = FixedClock(Utc.with_ymd_and_hms(2023, 5, 9, 12, 0, 0).unwrap());
        assert!(is_time_past_with("2023-05-10 +1400", "%Y-%m-%d %z", &clock));
        assert!(!is_time_future_with("2023-05-10 +1400", "%Y-%m-%d %z", &clock));
    }

    #[rstest]
    #[case("2023-05", "%Y-%m", (2023, 5, 1, 0, 0, 0))]
    #[case("2023", "%Y", (2023, 1, 1, 0, 0, 0))]
    #[case("05-10", "%m-%d", (0, 5, 10, 0, 0, 0))]
    #[case("2023-05-10 14", "%Y-%m-%d %H", (2023, 5, 10, 14, 0, 0))]
    #[case("2023-05-10 02:30 PM", "%Y-%m-%d %I:%M %p", (2023, 5, 10, 14, 30, 0))]
    #[case("2023-05-10 02:30", "%Y-%m-%d %I:%M", (2023, 5, 10, 2, 30, 0))]
    fn missing_fields_default_to_zero(
        #[case] value: &str,
        #[case] layout: &str,
        #[case] expected: (i32, u32, u32, u32, u32, u32),
    ) {
        let (y, mo, d, h, mi, s) = expected;
        let instant = parse_time(value, layout).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap());
    }

    #[test]
    fn time_only_is_on_year_zero() {
        let instant = parse_time("14:30:00", layouts::TIME).unwrap();
        let expected = NaiveDate::from_ymd_opt(0, 1, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(instant, expected);
    }

    #[rstest]
    #[case("2023-13", "%Y-%m")]
    #[case("2023-05-10 61", "%Y-%m-%d %M")]
    #[case("2023-05-10 +9900", "%Y-%m-%d %z")]
    #[case("2023-05-10 extra", layouts::DATE)]
    fn partial_layouts_still_reject_bad_values(#[case] value: &str, #[case] layout: &str) {
        assert!(parse_time(value, layout).is_none());
    }

    #[test]
    fn past_and_future_against_wall_clock() {
        assert!(is_time_past(PAST, layouts::DATE));
        assert!(!is_time_past(FUTURE, layouts::DATE));
        assert!(is_time_future(FUTURE, layouts::DATE));
        assert!(!is_time_future(PAST, layouts::DATE));
    }

    #[test]
    fn invalid_layout_is_false() {
        assert!(!is_time_past(PAST, "not-a-date"));
        assert!(!is_time_future(FUTURE, "not-a-date"));
    }

    #[test]
    fn equal_instant_is_neither_past_nor_future() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(!is_time_past_with("2020-01-01", layouts::DATE, &clock));
        assert!(!is_time_future_with("2020-01-01", layouts::DATE, &clock));
    }

    #[test]
    fn struct_forms_use_injected_clock() {
        let clock = clock_at(2000, 6, 1);
        let past = PastTime::new(layouts::DATE).with_clock(clock);
        let future = FutureTime::new(layouts::DATE).with_clock(clock);

        assert!(past.test("2000-05-31"));
        assert!(!past.test("2000-06-02"));
        assert!(future.test("2000-06-02"));
        assert!(!future.test("2000-05-31"));
    }

    #[test]
    fn time_only_layout_is_in_the_past() {
        assert!(is_time_past("08:00:00", layouts::TIME));
    }
}
