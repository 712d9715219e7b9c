//! Can-Chi (Heavenly Stem / Earthly Branch) naming for the Sexagenary cycle.
//!
//! All modular arithmetic here is Euclidean (non-negative remainder), as
//! required by spec.md §4.5; `i64::rem_euclid` gives that directly.

/// The ten Heavenly Stems, in cycle order.
pub const STEMS: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// The twelve Earthly Branches, in cycle order. Index 0 is Tý.
pub const BRANCHES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Stem/Branch index pair naming a position in the 60-unit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanChi {
    /// Index into [`STEMS`], 0..10.
    pub stem: usize,
    /// Index into [`BRANCHES`], 0..12.
    pub branch: usize,
}

impl CanChi {
    /// The combined "Stem Branch" name, e.g. "Giáp Thìn".
    pub fn name(&self) -> String {
        format!("{} {}", STEMS[self.stem], BRANCHES[self.branch])
    }
}

impl std::fmt::Display for CanChi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Stem/Branch pair for a Gregorian year `y` (spec.md §4.5).
///
/// # Example
///
/// ```
/// use lunar_calendar::sexagenary::year_can_chi;
///
/// assert_eq!(year_can_chi(2024).name(), "Giáp Thìn");
/// ```
pub fn year_can_chi(y: i64) -> CanChi {
    CanChi {
        stem: (y + 6).rem_euclid(10) as usize,
        branch: (y + 8).rem_euclid(12) as usize,
    }
}

/// Stem/Branch pair for lunar month `m` (1..=12) of lunar year `y`.
///
/// # Example
///
/// ```
/// use lunar_calendar::sexagenary::month_can_chi;
///
/// assert_eq!(month_can_chi(2024, 1).name(), "Bính Dần");
/// ```
pub fn month_can_chi(y: i64, m: i64) -> CanChi {
    CanChi {
        stem: (12 * y + m + 3).rem_euclid(10) as usize,
        branch: (m + 1).rem_euclid(12) as usize,
    }
}

/// Stem/Branch pair for the civil day with Julian Day Number `jd`.
///
/// # Example
///
/// ```
/// use lunar_calendar::sexagenary::day_can_chi;
///
/// let cc = day_can_chi(2460351); // 2024-02-10
/// assert_eq!(cc.name(), "Giáp Thìn");
/// ```
pub fn day_can_chi(jd: i64) -> CanChi {
    CanChi {
        stem: (jd + 9).rem_euclid(10) as usize,
        branch: (jd + 1).rem_euclid(12) as usize,
    }
}

/// Stem for the first hour of the civil day (Tý, 23:00 of the previous
/// day through 01:00); the branch of that hour is always Tý by definition.
///
/// # Example
///
/// ```
/// use lunar_calendar::sexagenary::{hour_stem, STEMS};
///
/// // 2460351 = 2024-02-10, day stem Giáp (index 0); its Tý-hour stem is also Giáp.
/// assert_eq!(hour_stem(2460351), 0);
/// assert_eq!(STEMS[hour_stem(2460351)], "Giáp");
/// ```
pub fn hour_stem(jd: i64) -> usize {
    (2 * (jd - 1)).rem_euclid(10) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_can_chi_known() {
        assert_eq!(year_can_chi(2024).name(), "Giáp Thìn");
        assert_eq!(year_can_chi(1984).name(), "Giáp Tý");
    }

    #[test]
    fn test_month_can_chi_month_1_is_dan() {
        for y in 2000..2030 {
            assert_eq!(month_can_chi(y, 1).branch, 2); // Dần
        }
    }

    #[test]
    fn test_day_can_chi_cycle_length_60() {
        let base = day_can_chi(2460351);
        let later = day_can_chi(2460351 + 60);
        assert_eq!(base, later);
        for k in 1..60 {
            assert_ne!(base, day_can_chi(2460351 + k), "collision at offset {k}");
        }
    }

    #[test]
    fn test_stems_and_branches_len() {
        assert_eq!(STEMS.len(), 10);
        assert_eq!(BRANCHES.len(), 12);
    }

    #[test]
    fn test_hour_stem_known_values() {
        assert_eq!(hour_stem(2460351), 0); // 2024-02-10, day stem Giáp
        assert_eq!(hour_stem(2460352), 2);
        assert_eq!(hour_stem(2460353), 4);
    }

    #[test]
    fn test_hour_stem_is_double_day_stem_mod_10() {
        for jd in 2460340..2460360 {
            let day_stem = day_can_chi(jd).stem;
            assert_eq!(hour_stem(jd), (2 * day_stem) % 10, "mismatch at jd={jd}");
        }
    }
}
