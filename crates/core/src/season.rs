//! Seasonal flag derivation.
//!
//! Maps a 0-indexed calendar month to one of four season labels and derives
//! the per-request `isInSeason` flag from a record's season set. Everything
//! here is a pure function of its inputs so that tests can pin months
//! directly; callers pass `Utc::now().month0()` at the boundary.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the four season labels a food record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Returns the season for a 0-indexed month (0 = January).
    ///
    /// Months 2–4 map to spring, 5–7 to summer, 8–10 to fall, and 11/0/1 to
    /// winter. Month values above 11 wrap, so the function is total.
    pub fn for_month0(month0: u32) -> Self {
        match month0 % 12 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Returns the season for the current UTC calendar month.
    pub fn current() -> Self {
        Self::for_month0(Utc::now().month0())
    }

    /// Returns the lowercase label for this season.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Parses a lowercase season label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_to_season_table() {
        assert_eq!(Season::for_month0(0), Season::Winter);
        assert_eq!(Season::for_month0(1), Season::Winter);
        assert_eq!(Season::for_month0(2), Season::Spring);
        assert_eq!(Season::for_month0(3), Season::Spring);
        assert_eq!(Season::for_month0(4), Season::Spring);
        assert_eq!(Season::for_month0(5), Season::Summer);
        assert_eq!(Season::for_month0(7), Season::Summer);
        assert_eq!(Season::for_month0(8), Season::Fall);
        assert_eq!(Season::for_month0(10), Season::Fall);
        assert_eq!(Season::for_month0(11), Season::Winter);
    }

    #[test]
    fn test_for_month0_wraps_out_of_range_months() {
        assert_eq!(Season::for_month0(12), Season::Winter);
        assert_eq!(Season::for_month0(15), Season::Spring);
    }

    #[test]
    fn test_parse_round_trips_labels() {
        for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            assert_eq!(Season::parse(season.as_str()), Some(season));
        }
        assert_eq!(Season::parse("autumn"), None);
        assert_eq!(Season::parse("Spring"), None);
    }
}
