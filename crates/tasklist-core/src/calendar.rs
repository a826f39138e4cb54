//! Month grids for a Sunday-first calendar.

use serde::Serialize;
use thiserror::Error;
use time::{Date, Month};

/// Error raised when a month falls outside the supported date range.
#[derive(Debug, Error)]
#[error("month {year}-{month:02} is out of range")]
pub struct CalendarError {
    year: i32,
    month: u8,
    #[source]
    source: time::error::ComponentRange,
}

/// A year/month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of the year.
    pub month: Month,
}

impl CalendarMonth {
    /// Construct from parts.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Month containing `date`.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Move by `delta` months, rolling over year boundaries.
    #[must_use]
    pub fn shift(self, delta: i32) -> Self {
        let zero_based = self.year * 12 + i32::from(u8::from(self.month)) - 1 + delta;
        let year = zero_based.div_euclid(12);
        let month_number = u8::try_from(zero_based.rem_euclid(12) + 1).unwrap_or(1);
        let month = Month::try_from(month_number).unwrap_or(Month::January);
        Self { year, month }
    }

    /// The following month.
    #[must_use]
    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// The preceding month.
    #[must_use]
    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    /// First day of the month.
    ///
    /// # Errors
    /// Fails when the year is outside the range supported by [`time`].
    pub fn first_day(self) -> Result<Date, CalendarError> {
        Date::from_calendar_date(self.year, self.month, 1).map_err(|source| self.error(source))
    }

    /// Number of days in the month.
    #[must_use]
    pub const fn days(self) -> u8 {
        match self.month {
            Month::February if time::util::is_leap_year(self.year) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    fn error(self, source: time::error::ComponentRange) -> CalendarError {
        CalendarError {
            year: self.year,
            month: u8::from(self.month),
            source,
        }
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "day")]
pub enum DayCell {
    /// Blank cell before the first day of the month.
    Padding,
    /// Day of the month, starting at 1.
    Day(u8),
}

impl DayCell {
    /// Day number, if this is not padding.
    #[must_use]
    pub const fn day(self) -> Option<u8> {
        match self {
            Self::Padding => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// Cells for `month`: padding up to the weekday of the 1st (weeks start on
/// Sunday), then every day in order.
///
/// # Errors
/// Fails when the year is outside the range supported by [`time`].
pub fn month_grid(month: CalendarMonth) -> Result<Vec<DayCell>, CalendarError> {
    let first = month.first_day()?;
    let leading = usize::from(first.weekday().number_days_from_sunday());
    let days = month.days();

    let mut cells = Vec::with_capacity(leading + usize::from(days));
    cells.extend(std::iter::repeat_n(DayCell::Padding, leading));
    cells.extend((1..=days).map(DayCell::Day));
    Ok(cells)
}

/// An event pinned to a day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Day of the month.
    pub day: u8,
    /// Event title.
    pub title: String,
    /// Display time, e.g. `10:00 AM`.
    pub time: String,
}

/// The dashboard's demo events.
#[must_use]
pub fn sample_events() -> Vec<CalendarEvent> {
    [
        (15, "Team Meeting", "10:00 AM"),
        (22, "Product Launch", "2:00 PM"),
        (28, "Quarterly Review", "9:00 AM"),
    ]
    .into_iter()
    .map(|(day, title, time)| CalendarEvent {
        day,
        title: title.to_owned(),
        time: time.to_owned(),
    })
    .collect()
}

/// Events scheduled on `day`.
pub fn events_on(events: &[CalendarEvent], day: u8) -> impl Iterator<Item = &CalendarEvent> + '_ {
    events.iter().filter(move |event| event.day == day)
}
