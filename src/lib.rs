//! # lunar-calendar
//!
//! `lunar-calendar` is a self-contained Vietnamese lunisolar calendar engine:
//! solar/lunar date conversion, Can-Chi (Sexagenary) naming, the 24 Solar
//! Terms, and the daily Lucky Hours table.
//!
//! It includes:
//! - Julian Day Number conversion across the 1582 Gregorian reform boundary
//! - A Meeus (1998) low-precision ephemeris for the mean new moon and the
//!   Sun's apparent ecliptic longitude
//! - A lunar year assembler that anchors month 11 on the Winter Solstice and
//!   places the intercalary month when a lunar year runs to thirteen months
//! - Can-Chi naming for years, months, days, and hours
//! - The 24 Solar Terms and the six daily Lucky Hours windows
//!
//! ## Quick Example: convert a solar date to its lunar equivalent
//!
//! ```
//! use lunar_calendar::types::{SolarDate, DEFAULT_TZ};
//!
//! let solar = SolarDate::from_ymd(2024, 2, 10).unwrap();
//! let lunar = solar.to_lunar(DEFAULT_TZ);
//!
//! println!("{solar} is lunar {lunar}");
//! println!("Year: {}", lunar.year_name());
//! println!("Solar term: {}", solar.solar_term(DEFAULT_TZ));
//! ```
//!
//! This converts Tet 2024 (2024-02-10) to lunar day 1, month 1, year Giáp
//! Thìn, and names the solar term containing that date.

mod cache;
pub mod error;
pub mod ephemeris;
pub mod julian;
pub mod lucky_hours;
pub mod lunar;
pub mod segments;
pub mod sexagenary;
pub mod solar_terms;
pub mod types;

pub use error::*;
pub use ephemeris::*;
pub use julian::*;
pub use lucky_hours::*;
pub use lunar::*;
pub use segments::*;
pub use sexagenary::*;
pub use solar_terms::*;
pub use types::*;
