//! Julian Day Number conversions across the Gregorian/Julian boundary.
//!
//! Implements the Tondering algorithm, which is exact for both branches of
//! the 1582-10-15 Gregorian calendar reform and uses only integer-valued
//! floor division throughout.

/// Julian Day Number of the Gregorian calendar reform (1582-10-15).
///
/// Dates whose computed JDN is `>= GREGORIAN_EPOCH` use the Gregorian
/// correction terms; earlier dates use the proleptic Julian calendar.
pub const GREGORIAN_EPOCH: i64 = 2299161;

#[inline]
fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// Converts a (day, month, year) triple to a Julian Day Number.
///
/// Uses the Tondering formula (spec.md §4.1). `dd` and `mm` follow the
/// civil calendar (month 1 = January); `yy` is the astronomical year
/// (no year zero skip — negative years are proleptic).
///
/// # Example
///
/// ```
/// use lunar_calendar::julian::jdn_from_ymd;
///
/// // 2000-01-01 at noon is JD 2451545, so the civil-day JDN is 2451545.
/// assert_eq!(jdn_from_ymd(1, 1, 2000), 2451545);
/// ```
pub fn jdn_from_ymd(dd: i64, mm: i64, yy: i64) -> i64 {
    let a = floor_div(14 - mm, 12);
    let y = yy + 4800 - a;
    let m = mm + 12 * a - 3;

    let gregorian = dd + floor_div(153 * m + 2, 5) + 365 * y + floor_div(y, 4)
        - floor_div(y, 100)
        + floor_div(y, 400)
        - 32045;

    if gregorian >= GREGORIAN_EPOCH {
        gregorian
    } else {
        dd + floor_div(153 * m + 2, 5) + 365 * y + floor_div(y, 4) - 32083
    }
}

/// Converts a Julian Day Number back to a (year, month, day) triple.
///
/// Inverse of [`jdn_from_ymd`]; see spec.md §4.1.
///
/// # Example
///
/// ```
/// use lunar_calendar::julian::ymd_from_jdn;
///
/// assert_eq!(ymd_from_jdn(2451545), (2000, 1, 1));
/// ```
pub fn ymd_from_jdn(jd: i64) -> (i64, i64, i64) {
    let (b, c) = if jd > GREGORIAN_EPOCH - 1 {
        let a = jd + 32044;
        let b = floor_div(4 * a + 3, 146097);
        let c = a - floor_div(146097 * b, 4);
        (b, c)
    } else {
        (0, jd + 32082)
    };

    let d = floor_div(4 * c + 3, 1461);
    let e = c - floor_div(1461 * d, 4);
    let m = floor_div(5 * e + 2, 153);

    let day = e - floor_div(153 * m + 2, 5) + 1;
    let month = m + 3 - 12 * floor_div(m, 10);
    let year = 100 * b + d - 4800 + floor_div(m, 10);

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_known_dates() {
        for &(y, m, d) in &[
            (1900, 1, 1),
            (1582, 10, 15),
            (1582, 10, 4),
            (1970, 1, 1),
            (2000, 2, 29),
            (2024, 2, 10),
            (2100, 12, 31),
        ] {
            let jd = jdn_from_ymd(d, m, y);
            assert_eq!(ymd_from_jdn(jd), (y, m, d), "roundtrip failed for {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_gregorian_reform_boundary() {
        // 1582-10-04 (Julian) is immediately followed by 1582-10-15 (Gregorian).
        let last_julian = jdn_from_ymd(4, 10, 1582);
        let first_gregorian = jdn_from_ymd(15, 10, 1582);
        assert_eq!(first_gregorian, last_julian + 1);
    }

    #[test]
    fn test_j2000_epoch() {
        // 2000-01-01 12:00 UT is JD 2451545.0; the civil-day JDN is the same integer.
        assert_eq!(jdn_from_ymd(1, 1, 2000), 2451545);
    }

    #[test]
    fn test_monotonic_increase() {
        let mut prev = jdn_from_ymd(1, 1, 1900);
        for y in 1900..=2100 {
            for m in 1..=12 {
                let days = match m {
                    2 => {
                        if (y % 4 == 0 && y % 100 != 0) || y % 400 == 0 { 29 } else { 28 }
                    }
                    4 | 6 | 9 | 11 => 30,
                    _ => 31,
                };
                for d in 1..=days {
                    if (y, m, d) == (1900, 1, 1) {
                        continue;
                    }
                    let jd = jdn_from_ymd(d, m, y);
                    assert!(jd > prev, "JDN not increasing at {y}-{m}-{d}");
                    prev = jd;
                }
            }
        }
    }
}
