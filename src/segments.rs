//! Integer "civil day" helpers layered on top of the raw ephemeris: the
//! Julian Day Number of the new moon in a local timezone, and which of the
//! twelve 30-degree ecliptic arcs (or twenty-four 15-degree arcs) the Sun
//! occupies at local midnight.

use std::f64::consts::PI;

use crate::ephemeris::sun_longitude;

/// JDN of the civil day (in timezone `tz`, hours east of UTC) that contains
/// the mean new moon for lunation `k`.
///
/// # Example
///
/// ```
/// use lunar_calendar::segments::new_moon_day;
///
/// let day = new_moon_day(0, 7.0);
/// assert!((2415020..=2415022).contains(&day));
/// ```
pub fn new_moon_day(k: i64, tz: f64) -> i64 {
    (crate::cache::cached_new_moon(k) + 0.5 + tz / 24.0).floor() as i64
}

/// Which of the twelve 30-degree ecliptic arcs the Sun occupies at local
/// midnight opening civil day `day_number`. Segment 9 is the arc beginning
/// at the Winter Solstice.
///
/// # Example
///
/// ```
/// use lunar_calendar::segments::sun_segment;
///
/// let seg = sun_segment(2459206, 7.0); // 2020-12-22, just after the solstice
/// assert_eq!(seg, 9);
/// ```
pub fn sun_segment(day_number: i64, tz: f64) -> i32 {
    let jd = day_number as f64 - 0.5 - tz / 24.0;
    let arc = sun_longitude(jd) * 6.0 / PI;
    let segment = arc.floor() as i32;
    segment.rem_euclid(12)
}

/// Which of the twenty-four 15-degree ecliptic arcs the Sun occupies, used
/// for naming the full Solar Terms table (spec.md §4.6). `d` is one more
/// than the Gregorian JDN of interest, per spec.md's `TERMS[sun_segment_24(jd
/// + 1, tz)]` contract.
pub fn sun_segment_24(d: i64, tz: f64) -> i32 {
    let jd = d as f64 - 0.5 - tz / 24.0;
    let arc = sun_longitude(jd) * 12.0 / PI;
    let segment = arc.floor() as i32;
    segment.rem_euclid(24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jdn_from_ymd;

    #[test]
    fn test_new_moon_day_close_to_epoch() {
        let day = new_moon_day(0, 7.0);
        assert!((2415020..=2415022).contains(&day));
    }

    #[test]
    fn test_sun_segment_range() {
        for k in -5..=5 {
            let day = new_moon_day(k, 7.0);
            let seg = sun_segment(day, 7.0);
            assert!((0..12).contains(&seg));
        }
    }

    #[test]
    fn test_sun_segment_reaches_winter_solstice_arc() {
        // Somewhere in the days surrounding the solstice the segment must hit 9.
        let start = jdn_from_ymd(18, 12, 2020);
        let hit_nine = (0..8).any(|offset| sun_segment(start + offset, 7.0) == 9);
        assert!(hit_nine);
    }

    #[test]
    fn test_sun_segment_24_range() {
        for offset in 0..365 {
            let jd = jdn_from_ymd(1, 1, 2023) + offset;
            let seg = sun_segment_24(jd + 1, 7.0);
            assert!((0..24).contains(&seg));
        }
    }
}
