//! Memoization for the three pure, expensive-to-recompute functions named
//! in spec.md §4.8: [`crate::ephemeris::new_moon`], [`crate::segments::new_moon_day`],
//! and [`crate::lunar::lunar_month_11`].
//!
//! The caches are the only process-wide state this crate carries. They are
//! purely functional accelerators: every wrapper recomputes and returns the
//! identical value an uncached call would produce, so clearing or bypassing
//! a cache never changes an observable result (spec.md §3 "Lifecycle", §5).
//! Keys include the timezone because results differ across timezones.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Bounded map that clears itself once it exceeds `capacity`. This is a
/// deliberately simple bounded-replacement policy: spec.md §9 notes that
/// correctness never depends on which policy is chosen because the
/// underlying functions are pure.
struct BoundedMap<K, V> {
    capacity: usize,
    map: HashMap<K, V>,
}

impl<K: std::hash::Hash + Eq, V: Clone> BoundedMap<K, V> {
    fn new(capacity: usize) -> Self {
        Self { capacity, map: HashMap::with_capacity(capacity.min(64)) }
    }

    fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(v) = self.map.get(&key) {
            return v.clone();
        }
        if self.map.len() >= self.capacity {
            self.map.clear();
        }
        let v = compute();
        self.map.insert(key, v.clone());
        v
    }
}

/// `tz` (an `f64`) can't be a `HashMap` key directly; its bit pattern can,
/// since cache keys only need equality, not ordering or arithmetic.
type TzBits = u64;

#[inline]
fn tz_bits(tz: f64) -> TzBits {
    tz.to_bits()
}

fn new_moon_cache() -> &'static Mutex<BoundedMap<i64, f64>> {
    static CACHE: OnceLock<Mutex<BoundedMap<i64, f64>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(BoundedMap::new(512)))
}

fn new_moon_day_cache() -> &'static Mutex<BoundedMap<(i64, TzBits), i64>> {
    static CACHE: OnceLock<Mutex<BoundedMap<(i64, TzBits), i64>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(BoundedMap::new(256)))
}

fn lunar_month_11_cache() -> &'static Mutex<BoundedMap<(i64, TzBits), i64>> {
    static CACHE: OnceLock<Mutex<BoundedMap<(i64, TzBits), i64>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(BoundedMap::new(128)))
}

/// Memoized [`crate::ephemeris::new_moon`], keyed by `k`.
pub(crate) fn cached_new_moon(k: i64) -> f64 {
    let mut cache = new_moon_cache().lock().unwrap();
    cache.get_or_insert_with(k, || crate::ephemeris::new_moon(k))
}

/// Memoized [`crate::segments::new_moon_day`], keyed by `(k, tz)`.
pub(crate) fn cached_new_moon_day(k: i64, tz: f64) -> i64 {
    let mut cache = new_moon_day_cache().lock().unwrap();
    cache.get_or_insert_with((k, tz_bits(tz)), || crate::segments::new_moon_day(k, tz))
}

/// Memoized [`crate::lunar::lunar_month_11`], keyed by `(year, tz)`.
pub(crate) fn cached_lunar_month_11(year: i64, tz: f64) -> i64 {
    let mut cache = lunar_month_11_cache().lock().unwrap();
    cache.get_or_insert_with((year, tz_bits(tz)), || crate::lunar::lunar_month_11_uncached(year, tz))
}
