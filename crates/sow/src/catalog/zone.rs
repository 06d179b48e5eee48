//! Hardiness zones and their frost dates.
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A month/day pair that recurs every year.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrostDate {
    pub month: u32,
    pub day: u32,
}

impl FrostDate {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Resolve the frost date within `year`. February 29 falls back to the 28th outside
    /// leap years.
    pub fn in_year(&self, year: i32) -> Result<NaiveDate> {
        let day = if (self.month, self.day) == (2, 29)
            && NaiveDate::from_ymd_opt(year, 2, 29).is_none()
        {
            28
        } else {
            self.day
        };
        NaiveDate::from_ymd_opt(year, self.month, day).ok_or_else(|| {
            Error::InvalidDate(format!("{:02}-{:02} in {year}", self.month, self.day))
        })
    }
}

/// Average frost dates for one USDA hardiness zone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HardinessZone {
    /// Average last spring frost.
    pub last_frost: FrostDate,
    /// Average first autumn frost.
    pub first_frost: FrostDate,
    /// Frost-free days between the two.
    pub growing_season: u32,
}

impl HardinessZone {
    pub fn new(last_frost: FrostDate, first_frost: FrostDate, growing_season: u32) -> Self {
        Self {
            last_frost,
            first_frost,
            growing_season,
        }
    }
}
