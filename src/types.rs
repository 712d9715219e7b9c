//! Public value types: an immutable solar date triple and an immutable
//! lunar date quadruple, each validated once at construction and standing
//! alone with its own operations (spec.md §6, §9 "Polymorphism over date
//! kinds").

use chrono::{Datelike, NaiveDate};

use crate::error::{validate_day_of_month, validate_month, validate_year, Result};
use crate::julian::{jdn_from_ymd, ymd_from_jdn};
use crate::lucky_hours::{lucky_hours, LuckyHour};
use crate::lunar::{lunar_to_solar, solar_to_lunar};
use crate::sexagenary::{day_can_chi, hour_stem, month_can_chi, year_can_chi, CanChi, STEMS};
use crate::solar_terms::term_name;

/// Default timezone offset (hours east of UTC): Indochina Time.
pub const DEFAULT_TZ: f64 = 7.0;

/// An immutable Gregorian/Julian solar date, valid across the 1582
/// calendar-reform boundary (spec.md §3 "Solar date").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i64,
    month: i64,
    day: i64,
}

impl SolarDate {
    /// Constructs a `SolarDate` from a (year, month, day) triple, validating
    /// the month range and the day count for that specific month (the
    /// Gregorian leap rule applies after 1582-10-15, the Julian rule
    /// before, per spec.md §3).
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self> {
        validate_year(year)?;
        validate_month(month)?;
        let max_day = days_in_month(year, month);
        validate_day_of_month(day, max_day)?;
        Ok(Self { year, month, day })
    }

    /// Constructs a `SolarDate` from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = ymd_from_jdn(jdn);
        Self { year, month, day }
    }

    /// Constructs a `SolarDate` from a platform `chrono::NaiveDate`.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            year: date.year() as i64,
            month: date.month() as i64,
            day: date.day() as i64,
        }
    }

    /// The Gregorian/Julian year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The month, 1..=12.
    pub fn month(&self) -> i64 {
        self.month
    }

    /// The day of month.
    pub fn day(&self) -> i64 {
        self.day
    }

    /// This date's Julian Day Number.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_calendar::types::SolarDate;
    ///
    /// let d = SolarDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!(d.jdn(), 2451545);
    /// ```
    pub fn jdn(&self) -> i64 {
        jdn_from_ymd(self.day, self.month, self.year)
    }

    /// Converts to the corresponding [`LunarDate`] under timezone `tz`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_calendar::types::SolarDate;
    ///
    /// let solar = SolarDate::from_ymd(2024, 2, 10).unwrap();
    /// let lunar = solar.to_lunar(7.0);
    /// assert_eq!((lunar.day(), lunar.month(), lunar.year(), lunar.is_leap()), (1, 1, 2024, false));
    /// ```
    pub fn to_lunar(&self, tz: f64) -> LunarDate {
        let (d, m, y, leap) = solar_to_lunar(self.day, self.month, self.year, tz);
        LunarDate { day: d, month: m, year: y, leap }
    }

    /// Name of the 24-term Solar Term segment containing this date, under
    /// timezone `tz`.
    pub fn solar_term(&self, tz: f64) -> &'static str {
        term_name(self.jdn(), tz)
    }
}

/// An immutable lunar quadruple: day, month, year, and whether this
/// instance names the intercalary (leap) month (spec.md §3 "Lunar date").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    day: i64,
    month: i64,
    year: i64,
    leap: bool,
}

impl LunarDate {
    /// Constructs a `LunarDate` from a quadruple, validating it against
    /// timezone `tz` by confirming the round trip back through
    /// [`lunar_to_solar`] succeeds (spec.md §3's leap-month invariant).
    pub fn new(day: i64, month: i64, year: i64, leap: bool, tz: f64) -> Result<Self> {
        validate_month(month)?;
        lunar_to_solar(day, month, year, leap, tz)?;
        Ok(Self { day, month, year, leap })
    }

    /// Constructs a `LunarDate` from a platform `chrono::NaiveDate`
    /// interpreted under timezone `tz`.
    pub fn from_naive_date(date: NaiveDate, tz: f64) -> Self {
        SolarDate::from_naive_date(date).to_lunar(tz)
    }

    /// Constructs a `LunarDate` from a [`SolarDate`] under timezone `tz`.
    pub fn from_solar(solar: SolarDate, tz: f64) -> Self {
        solar.to_lunar(tz)
    }

    /// Lunar day of month, 1..=30.
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Lunar month label, 1..=12 (the intercalary month shares its base
    /// month's label and is distinguished only by [`LunarDate::is_leap`]).
    pub fn month(&self) -> i64 {
        self.month
    }

    /// The lunar year label.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Whether this instance names the intercalary month.
    pub fn is_leap(&self) -> bool {
        self.leap
    }

    /// Converts back to a [`SolarDate`] under timezone `tz`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_calendar::types::LunarDate;
    ///
    /// let lunar = LunarDate::new(1, 1, 2024, false, 7.0).unwrap();
    /// let solar = lunar.to_solar(7.0).unwrap();
    /// assert_eq!((solar.year(), solar.month(), solar.day()), (2024, 2, 10));
    /// ```
    pub fn to_solar(&self, tz: f64) -> Result<SolarDate> {
        let (y, m, d) = lunar_to_solar(self.day, self.month, self.year, self.leap, tz)?;
        Ok(SolarDate { year: y, month: m, day: d })
    }

    /// The Can-Chi name of the lunar year, e.g. "Giáp Thìn".
    pub fn year_name(&self) -> CanChi {
        year_can_chi(self.year)
    }

    /// The Can-Chi name of the lunar month.
    pub fn month_name(&self) -> CanChi {
        month_can_chi(self.year, self.month)
    }

    /// The Can-Chi name of the day, derived from the equivalent solar JDN
    /// under timezone `tz`.
    pub fn day_name(&self, tz: f64) -> Result<CanChi> {
        let jdn = self.to_solar(tz)?.jdn();
        Ok(day_can_chi(jdn))
    }

    /// The Heavenly Stem naming the Tý hour (23:00 of the previous civil
    /// day through 01:00) that opens this date, under timezone `tz`.
    pub fn hour_name(&self, tz: f64) -> Result<&'static str> {
        let jdn = self.to_solar(tz)?.jdn();
        Ok(STEMS[hour_stem(jdn)])
    }

    /// Name of the 24-term Solar Term segment containing this date, under
    /// timezone `tz`.
    pub fn solar_term(&self, tz: f64) -> Result<&'static str> {
        let jdn = self.to_solar(tz)?.jdn();
        Ok(term_name(jdn, tz))
    }

    /// The six auspicious 2-hour windows for this date, under timezone `tz`.
    pub fn lucky_hours(&self, tz: f64) -> Result<Vec<LuckyHour>> {
        let jdn = self.to_solar(tz)?.jdn();
        Ok(lucky_hours(jdn))
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.leap {
            write!(f, "{:04}-{:02}-{:02} (nhuận)", self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

fn is_gregorian(year: i64, month: i64, day: i64) -> bool {
    (year, month, day) >= (1582, 10, 15)
}

fn is_leap_year(year: i64, month: i64, day: i64) -> bool {
    if is_gregorian(year, month, day) {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, month, 1) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_date_jdn_roundtrip() {
        let d = SolarDate::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(SolarDate::from_jdn(d.jdn()), d);
    }

    #[test]
    fn test_solar_date_rejects_bad_day() {
        assert!(SolarDate::from_ymd(2023, 2, 29).is_err());
        assert!(SolarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_solar_to_lunar_and_back() {
        let solar = SolarDate::from_ymd(2024, 9, 17).unwrap();
        let lunar = solar.to_lunar(DEFAULT_TZ);
        assert_eq!((lunar.day(), lunar.month(), lunar.year(), lunar.is_leap()), (15, 8, 2024, false));
        assert_eq!(lunar.to_solar(DEFAULT_TZ).unwrap(), solar);
    }

    #[test]
    fn test_lunar_date_new_rejects_bad_leap_flag() {
        assert!(LunarDate::new(1, 1, 2024, true, DEFAULT_TZ).is_err());
        assert!(LunarDate::new(1, 1, 2024, false, DEFAULT_TZ).is_ok());
    }

    #[test]
    fn test_year_name_matches_sexagenary() {
        let lunar = LunarDate::new(1, 1, 2024, false, DEFAULT_TZ).unwrap();
        assert_eq!(lunar.year_name().name(), "Giáp Thìn");
        assert_eq!(lunar.month_name().name(), "Bính Dần");
    }

    #[test]
    fn test_lucky_hours_len() {
        let lunar = LunarDate::new(1, 1, 2024, false, DEFAULT_TZ).unwrap();
        assert_eq!(lunar.lucky_hours(DEFAULT_TZ).unwrap().len(), 6);
    }

    #[test]
    fn test_display() {
        let d = SolarDate::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(d.to_string(), "2024-02-10");
        let l = LunarDate::new(1, 2, 2023, true, DEFAULT_TZ).unwrap();
        assert_eq!(l.to_string(), "2023-02-01 (nhuận)");
    }

    #[test]
    fn test_ordering_is_component_wise() {
        let a = SolarDate::from_ymd(2024, 1, 1).unwrap();
        let b = SolarDate::from_ymd(2024, 2, 1).unwrap();
        assert!(a < b);
    }
}
