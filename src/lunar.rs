//! The lunar year assembler: locates the Winter Solstice month-11 anchor,
//! places the intercalary (leap) month when a lunar year runs to thirteen
//! months, and converts between solar dates and lunar quadruples.
//!
//! This is the most iteration-heavy part of the engine (spec.md §4.4), so
//! its hot paths go through the [`crate::cache`] memoization layer rather
//! than calling [`crate::segments::new_moon_day`] directly.

use crate::cache::{cached_lunar_month_11, cached_new_moon_day};
use crate::error::{LunarError, Result};
use crate::julian::{jdn_from_ymd, ymd_from_jdn};
use crate::segments::sun_segment;

/// Mean synodic month length in days, used to estimate a lunation index
/// from a JDN before refining it against the actual new moon.
const SYNODIC_MONTH: f64 = 29.530588853;

/// Reference Julian Day (with fraction) near the lunation-index epoch,
/// spec.md §4.4's `2415021.076998695` constant.
const K_EPOCH: f64 = 2415021.076998695;

/// JDN of the new-moon day that begins the lunar month containing the
/// Winter Solstice of Gregorian year `year`, in timezone `tz`.
///
/// # Example
///
/// ```
/// use lunar_calendar::lunar::lunar_month_11;
///
/// let a11 = lunar_month_11(2023, 7.0);
/// assert!(a11 > 0);
/// ```
pub fn lunar_month_11(year: i64, tz: f64) -> i64 {
    cached_lunar_month_11(year, tz)
}

/// Uncached computation backing [`lunar_month_11`]; kept `pub(crate)` so the
/// cache wrapper in [`crate::cache`] can call it without recursing back
/// through the cache.
pub(crate) fn lunar_month_11_uncached(year: i64, tz: f64) -> i64 {
    let off = jdn_from_ymd(31, 12, year) - 2415021;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
    let nm = cached_new_moon_day(k, tz);
    if sun_segment(nm, tz) >= 9 {
        cached_new_moon_day(k - 1, tz)
    } else {
        nm
    }
}

/// Offset (1..=13) of the intercalary month relative to month 11, given the
/// JDN `a11` of a month-11 anchor that opens a 13-month (leap) year.
///
/// Iterates lunation indices past the anchor looking for two consecutive
/// new moons that fall in the same 30-degree solar-longitude segment: the
/// later of the pair opens the month with no Major Solar Term, which is the
/// leap month (spec.md §4.4, capped at 14 iterations).
pub fn leap_month_offset(a11: i64, tz: f64) -> i32 {
    let k = ((a11 as f64 - K_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut prev_arc = sun_segment(cached_new_moon_day(k + 1, tz), tz);
    for i in 2..=14i64 {
        let arc_i = sun_segment(cached_new_moon_day(k + i, tz), tz);
        if arc_i == prev_arc {
            return (i - 1) as i32;
        }
        prev_arc = arc_i;
    }
    14
}

/// Forward conversion: solar (day, month, year) in timezone `tz` to a lunar
/// quadruple `(day, month, year, is_leap)`.
///
/// Cannot fail for a structurally valid solar date (spec.md §4.4 "Failure
/// semantics").
///
/// # Example
///
/// ```
/// use lunar_calendar::lunar::solar_to_lunar;
///
/// assert_eq!(solar_to_lunar(10, 2, 2024, 7.0), (1, 1, 2024, false));
/// ```
pub fn solar_to_lunar(dd: i64, mm: i64, yy: i64, tz: f64) -> (i64, i64, i64, bool) {
    let day = jdn_from_ymd(dd, mm, yy);
    let k = ((day as f64 - K_EPOCH) / SYNODIC_MONTH).floor() as i64;

    let mut month_start = cached_new_moon_day(k + 1, tz);
    if month_start > day {
        month_start = cached_new_moon_day(k, tz);
    }

    let mut a11 = lunar_month_11(yy, tz);
    let b11;
    let mut ly;
    if a11 >= month_start {
        ly = yy;
        b11 = a11;
        a11 = lunar_month_11(yy - 1, tz);
    } else {
        ly = yy + 1;
        b11 = lunar_month_11(yy + 1, tz);
    }

    let ld = day - month_start + 1;
    let diff = (month_start - a11) / 29;
    let mut leap = false;
    let mut lm = diff + 11;

    if b11 - a11 > 365 {
        let lo = leap_month_offset(a11, tz) as i64;
        if diff >= lo {
            lm = diff + 10;
        }
        if diff == lo {
            leap = true;
        }
    }

    if lm > 12 {
        lm -= 12;
    }
    if lm >= 11 && diff < 4 {
        ly -= 1;
    }

    (ld, lm, ly, leap)
}

/// Reverse conversion: a lunar quadruple in timezone `tz` back to a solar
/// (day, month, year) triple.
///
/// Fails with [`LunarError::DateNotExist`] when the leap flag is
/// inconsistent with the year, or when the resulting day falls outside the
/// actual length of that lunar month (spec.md §4.4 "Failure semantics").
///
/// # Example
///
/// ```
/// use lunar_calendar::lunar::lunar_to_solar;
///
/// assert_eq!(lunar_to_solar(1, 1, 2024, false, 7.0).unwrap(), (2024, 2, 10));
/// ```
pub fn lunar_to_solar(ld: i64, lm: i64, ly: i64, leap: bool, tz: f64) -> Result<(i64, i64, i64)> {
    let (a11, b11) = if lm < 11 {
        (lunar_month_11(ly - 1, tz), lunar_month_11(ly, tz))
    } else {
        (lunar_month_11(ly, tz), lunar_month_11(ly + 1, tz))
    };

    let k = (0.5 + (a11 as f64 - K_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut off = lm - 11;
    if off < 0 {
        off += 12;
    }

    if b11 - a11 > 365 {
        let lo = leap_month_offset(a11, tz) as i64;
        let mut lm_expected = lo - 2;
        if lm_expected < 0 {
            lm_expected += 12;
        }
        if leap && lm != lm_expected {
            return Err(LunarError::DateNotExist {
                reason: format!(
                    "month {lm} has no intercalary occurrence in lunar year {ly}"
                ),
            });
        } else if leap || off >= lo {
            off += 1;
        }
    } else if leap {
        return Err(LunarError::DateNotExist {
            reason: format!("lunar year {ly} has no intercalary month"),
        });
    }

    let month_start = cached_new_moon_day(k + off, tz);
    let next_month_start = cached_new_moon_day(k + off + 1, tz);
    let month_length = next_month_start - month_start;

    if !(1..=30).contains(&ld) || ld > month_length {
        return Err(LunarError::DateNotExist {
            reason: format!("day {ld} exceeds the {month_length}-day length of this lunar month"),
        });
    }

    Ok(ymd_from_jdn(month_start + ld - 1))
}
