// Minimum date policy for the check-in and check-out inputs
// Keeps the inputs from offering dates before today or before the chosen check-in

use chrono::{Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    CheckIn,
    CheckOut,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::CheckIn => f.write_str("check-in"),
            DateField::CheckOut => f.write_str("check-out"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateInputError {
    #[error("{field} date {date} is earlier than {minimum}")]
    BeforeMinimum {
        field: DateField,
        date: NaiveDate,
        minimum: NaiveDate,
    },
}

// Source of "today"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

// Local calendar date of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Floors for the two date inputs, evaluated at the moment of interaction.
///
/// A date equal to its floor is always accepted. The check-out floor equals
/// the selected check-in, so a same-day pair passes here and is turned away
/// later by the validator as an invalid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDatePolicy {
    today: NaiveDate,
}

impl StayDatePolicy {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn min_check_in(&self) -> NaiveDate {
        self.today
    }

    pub fn min_check_out(&self, check_in: Option<NaiveDate>) -> NaiveDate {
        check_in.unwrap_or(self.today)
    }

    pub fn check_in_allowed(&self, date: NaiveDate) -> Result<NaiveDate, DateInputError> {
        Self::at_least(DateField::CheckIn, date, self.min_check_in())
    }

    pub fn check_out_allowed(
        &self,
        date: NaiveDate,
        check_in: Option<NaiveDate>,
    ) -> Result<NaiveDate, DateInputError> {
        Self::at_least(DateField::CheckOut, date, self.min_check_out(check_in))
    }

    fn at_least(
        field: DateField,
        date: NaiveDate,
        minimum: NaiveDate,
    ) -> Result<NaiveDate, DateInputError> {
        if date < minimum {
            return Err(DateInputError::BeforeMinimum {
                field,
                date,
                minimum,
            });
        }
        Ok(date)
    }
}
