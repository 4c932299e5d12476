//! Time range selector.
//!
//! A range fixes three things at once: how many days are simulated, how many
//! labels the chart shows, and the unit those labels (and the growth rate)
//! are expressed in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of one chart label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelUnit {
    Day,
    Week,
    Month,
}

impl LabelUnit {
    /// Capitalized prefix used in labels ("Day 1", "Week 3")
    pub fn label_prefix(&self) -> &'static str {
        match self {
            LabelUnit::Day => "Day",
            LabelUnit::Week => "Week",
            LabelUnit::Month => "Month",
        }
    }

    /// Lowercase unit used in growth rates ("cm/week")
    pub fn rate_unit(&self) -> &'static str {
        match self {
            LabelUnit::Day => "day",
            LabelUnit::Week => "week",
            LabelUnit::Month => "month",
        }
    }
}

/// Display window requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    ThreeMonths,
    All,
}

impl TimeRange {
    pub const ALL_RANGES: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::ThreeMonths,
        TimeRange::All,
    ];

    /// Parse a selector value; anything unrecognized resolves to `Month`.
    ///
    /// # Examples
    /// ```
    /// use growth_tracker_rust::TimeRange;
    ///
    /// assert_eq!(TimeRange::parse_or_default("3months"), TimeRange::ThreeMonths);
    /// assert_eq!(TimeRange::parse_or_default("fortnight"), TimeRange::Month);
    /// ```
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown time range '{}', using month", value);
            TimeRange::default()
        })
    }

    /// Simulated duration in days
    pub fn total_days(&self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::All => 120,
        }
    }

    /// Number of chart labels (and series points)
    pub fn label_count(&self) -> usize {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 4,
            TimeRange::ThreeMonths => 12,
            TimeRange::All => 4,
        }
    }

    pub fn label_unit(&self) -> LabelUnit {
        match self {
            TimeRange::Week => LabelUnit::Day,
            TimeRange::Month | TimeRange::ThreeMonths => LabelUnit::Week,
            TimeRange::All => LabelUnit::Month,
        }
    }

    /// Days simulated per label.
    ///
    /// Rounded up when the days don't divide evenly, so a month simulates
    /// 4 x 8 days and three months 12 x 8 days.
    pub fn days_per_label(&self) -> u32 {
        // label_count is at most 12
        let labels = self.label_count() as u32;
        self.total_days().div_ceil(labels)
    }

    /// "Day 1".."Day 7", "Week 1".."Week 4", ...
    pub fn labels(&self) -> Vec<String> {
        let prefix = self.label_unit().label_prefix();
        (1..=self.label_count())
            .map(|i| format!("{} {}", prefix, i))
            .collect()
    }

    /// Selector value as the storefront writes it
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::ThreeMonths => "3months",
            TimeRange::All => "all",
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "3months" | "threeMonths" | "three_months" => Ok(TimeRange::ThreeMonths),
            "all" => Ok(TimeRange::All),
            other => Err(format!("unknown time range: {}", other)),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
