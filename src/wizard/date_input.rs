// ABOUTME: Composite year-month date input combining two selections
// ABOUTME: Produces the first day of the chosen month, rejecting invalid pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RosterHub Contributors

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Two independent selections that combine into the first day of a month
///
/// Either part may be picked in any order; the combined value only changes
/// when both parts are present and form a valid date. An invalid
/// combination is rejected and the previous value retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeDateInput {
    year: Option<i32>,
    month: Option<u32>,
    value: Option<NaiveDate>,
}

impl CompositeDateInput {
    /// Empty input with no selections
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            value: None,
        }
    }

    /// Pick the year part
    pub fn pick_year(&mut self, year: i32) {
        self.year = Some(year);
        self.recombine();
    }

    /// Pick the month part (1-12)
    pub fn pick_month(&mut self, month: u32) {
        self.month = Some(month);
        self.recombine();
    }

    fn recombine(&mut self) {
        if let (Some(y), Some(m)) = (self.year, self.month) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, 1) {
                self.value = Some(date);
            }
        }
    }

    /// The combined date, if both parts have formed a valid one
    #[must_use]
    pub const fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Interpret a wizard input value as a year-month date
    ///
    /// Accepts either a `{"year": .., "month": ..}` object or an ISO
    /// `YYYY-MM-DD` string, which is clamped to the first of its month.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<NaiveDate> {
        match value {
            Value::Object(obj) => {
                let year = i32::try_from(obj.get("year")?.as_i64()?).ok()?;
                let month = u32::try_from(obj.get("month")?.as_i64()?).ok()?;
                let mut input = Self::new();
                input.pick_year(year);
                input.pick_month(month);
                input.value()
            }
            Value::String(s) => {
                let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
                parsed.with_day(1)
            }
            _ => None,
        }
    }
}
