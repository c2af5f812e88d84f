//! Calendar bucketing for the performance series
//!
//! Two window shapes are supported:
//! - the last N calendar months ending with the current month
//! - the last N ISO-8601 weeks ending with the current week
//!
//! Buckets are always returned oldest first. Week buckets are keyed on the
//! ISO (year, week) pair, never the calendar year, so late-December and
//! early-January dates land in the right week.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::Granularity;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month identity (month is 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Step back `n` months, crossing year boundaries as needed
    pub fn months_back(self, n: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - n as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn label(&self) -> String {
        MONTH_ABBREVIATIONS[(self.month as usize - 1) % 12].to_string()
    }
}

/// ISO-8601 week identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoWeekKey {
    pub year: i32,
    pub week: u32,
}

impl IsoWeekKey {
    /// ISO year and week of a date.
    ///
    /// chrono applies the Thursday rule: the date is shifted to the Thursday of
    /// its Monday-start week and that Thursday's year is the ISO year. So
    /// 2025-12-29 is week 1 of 2026 and 2021-01-01 is week 53 of 2020.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

/// Identity of a time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Month(MonthKey),
    Week(IsoWeekKey),
}

impl BucketKey {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Month(key) => MonthKey::of(date) == *key,
            Self::Week(key) => IsoWeekKey::of(date) == *key,
        }
    }
}

/// A labelled time bucket
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBucket {
    pub label: String,
    pub key: BucketKey,
}

/// Monday of the week containing `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The `count` calendar months ending with the month of `today`, oldest first
pub fn month_buckets(today: NaiveDate, count: u32) -> Vec<TimeBucket> {
    let current = MonthKey::of(today);
    (0..count)
        .rev()
        .map(|back| {
            let key = current.months_back(back);
            TimeBucket {
                label: key.label(),
                key: BucketKey::Month(key),
            }
        })
        .collect()
}

/// The `count` ISO weeks ending with the week of `today`, oldest first.
///
/// Labels read `DD/MM-DD/MM` (Monday through Sunday).
pub fn week_buckets(today: NaiveDate, count: u32) -> Vec<TimeBucket> {
    (0..count)
        .rev()
        .map(|back| {
            let week_start = monday_of(today - Days::new(u64::from(back) * 7));
            let week_end = week_start + Days::new(6);
            TimeBucket {
                label: format!(
                    "{}-{}",
                    week_start.format("%d/%m"),
                    week_end.format("%d/%m")
                ),
                key: BucketKey::Week(IsoWeekKey::of(week_start)),
            }
        })
        .collect()
}

/// Buckets for a granularity
pub fn buckets(granularity: Granularity, today: NaiveDate, count: u32) -> Vec<TimeBucket> {
    match granularity {
        Granularity::Monthly => month_buckets(today, count),
        Granularity::Weekly => week_buckets(today, count),
    }
}
