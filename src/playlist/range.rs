use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const FIRST_YEAR: u32 = 1958;
pub const LAST_YEAR: u32 = 2022;

/// Prefix shared by every playlist in the dataset
pub const PLAYLIST_PREFIX: &str = "Top US Singles";

/// Inclusive range of chart years, always ordered and inside the chart history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    start: u32,
    end: u32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 1995,
            end: 2010,
        }
    }
}

impl YearRange {
    /// Build a range from two slider handles in either order, pulled into the chart years
    pub fn new(a: u32, b: u32) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start: low.clamp(FIRST_YEAR, LAST_YEAR),
            end: high.clamp(FIRST_YEAR, LAST_YEAR),
        }
    }

    pub fn single(year: u32) -> Self {
        Self::new(year, year)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn is_single_year(&self) -> bool {
        self.start == self.end
    }

    /// Name under which the dataset stores the playlist for this range
    pub fn canonical_name(&self) -> String {
        format!("{}: {}", PLAYLIST_PREFIX, self)
    }

    /// High school years for someone of `age` in `current_year`, roughly ages 14 through 18
    pub fn suggested_for_age(age: u32, current_year: i32) -> Self {
        let birth_year = i64::from(current_year) - i64::from(age);
        let to_year = |offset: i64| (birth_year + offset).clamp(0, i64::from(u32::MAX)) as u32;
        Self::new(to_year(14), to_year(18))
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_year() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for YearRange {
    type Err = anyhow::Error;

    /// Accepts `2000` or `1995-2010`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_year = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| anyhow::anyhow!("'{}' is not a year", part.trim()))
        };

        match s.trim().split_once('-') {
            Some((start, end)) => Ok(YearRange::new(parse_year(start)?, parse_year(end)?)),
            None => Ok(YearRange::single(parse_year(s)?)),
        }
    }
}
