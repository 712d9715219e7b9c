//! The daily Lucky Hours (giờ hoàng đạo) table: six auspicious 2-hour
//! windows selected from a 12-bit pattern keyed by the day's Earthly Branch
//! modulo 6.

use crate::sexagenary::{day_can_chi, BRANCHES};

/// One auspicious 2-hour window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyHour {
    /// Earthly Branch naming this window, e.g. "Tý".
    pub branch: &'static str,
    /// Start hour, 0..24 (wraps across midnight for the Tý window).
    pub start_hour: i32,
    /// End hour, 0..24 (exclusive).
    pub end_hour: i32,
}

/// Six 12-bit patterns, one per day-branch-mod-6 class, MSB-first
/// (bit i corresponds to segment i, i.e. [`BRANCHES`]\[i\]).
const PATTERNS: [[u8; 12]; 6] = [
    [1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0], // Tý/Ngọ
    [0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1], // Sửu/Mùi
    [1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0], // Dần/Thân
    [1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0], // Mão/Dậu
    [0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1], // Thìn/Tuất
    [0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1], // Tỵ/Hợi
];

/// The ordered sequence of auspicious 2-hour windows for the civil day with
/// Julian Day Number `jd`.
///
/// # Example
///
/// ```
/// use lunar_calendar::lucky_hours::lucky_hours;
///
/// // 2460351 = 2024-02-10, whose day branch is Thìn, not Tý; any JDN works,
/// // this just checks the shape of the result.
/// let hours = lucky_hours(2460351);
/// assert_eq!(hours.len(), 6);
/// ```
pub fn lucky_hours(jd: i64) -> Vec<LuckyHour> {
    let day_branch = day_can_chi(jd).branch;
    let pattern = &PATTERNS[day_branch % 6];

    (0..12)
        .filter(|&i| pattern[i] == 1)
        .map(|i| {
            let start = ((2 * i as i32 + 23).rem_euclid(24)) as i32;
            let end = ((2 * i as i32 + 1).rem_euclid(24)) as i32;
            LuckyHour { branch: BRANCHES[i], start_hour: start, end_hour: end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ty_day_pattern() {
        // jd=2460359 has (jd+1) % 12 == 0, i.e. its day branch is Tý.
        let jd = 2460359;
        assert_eq!((jd + 1).rem_euclid(12), 0);
        let hours = lucky_hours(jd);
        let branches: Vec<&str> = hours.iter().map(|h| h.branch).collect();
        assert_eq!(branches, vec!["Tý", "Sửu", "Mão", "Ngọ", "Thân", "Dậu"]);
    }

    #[test]
    fn test_window_wraps_midnight_for_ty() {
        let jd = 2460359;
        let hours = lucky_hours(jd);
        let ty = hours.iter().find(|h| h.branch == "Tý").unwrap();
        assert_eq!(ty.start_hour, 23);
        assert_eq!(ty.end_hour, 1);
    }

    #[test]
    fn test_always_six_windows() {
        for jd in 2460340..2460360 {
            assert_eq!(lucky_hours(jd).len(), 6);
        }
    }
}
